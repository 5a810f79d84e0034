//! UI Components
//!
//! Reusable Leptos components.

mod cart_form;
mod cart_list;
mod receipt_modal;
mod search_box;

pub use cart_form::CartForm;
pub use cart_list::CartList;
pub use receipt_modal::ReceiptModal;
pub use search_box::SearchBox;
