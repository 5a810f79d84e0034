//! Application Context
//!
//! Shared state provided via Leptos Context API. One `CartContext` is
//! created per widget mount; every signal in it is owned by `App`.

use leptos::prelude::*;

use cart_core::{CartStore, Receipt};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct CartContext {
    /// The cart store - read
    pub cart: ReadSignal<CartStore>,
    /// The cart store - write
    pub set_cart: WriteSignal<CartStore>,
    /// Staged item name for the add/edit form - read
    pub new_name: ReadSignal<String>,
    /// Staged item name for the add/edit form - write
    pub set_new_name: WriteSignal<String>,
    /// Staged quantity for the add/edit form - read
    pub new_quantity: ReadSignal<u32>,
    /// Staged quantity for the add/edit form - write
    pub set_new_quantity: WriteSignal<u32>,
    /// Search term feeding the filtered list - read
    pub search_term: ReadSignal<String>,
    /// Search term feeding the filtered list - write
    pub set_search_term: WriteSignal<String>,
    /// Validation error shown in the form banner
    pub item_error: ReadSignal<Option<String>>,
    set_item_error: WriteSignal<Option<String>>,
    /// Receipt shown in the modal after a successful finalize
    pub receipt: ReadSignal<Option<Receipt>>,
    set_receipt: WriteSignal<Option<Receipt>>,
    /// Checkout error shown in the modal instead of a receipt
    pub checkout_error: ReadSignal<Option<String>>,
    set_checkout_error: WriteSignal<Option<String>>,
}

impl CartContext {
    pub fn new() -> Self {
        let (cart, set_cart) = signal(CartStore::new());
        let (new_name, set_new_name) = signal(String::new());
        let (new_quantity, set_new_quantity) = signal(1u32);
        let (search_term, set_search_term) = signal(String::new());
        let (item_error, set_item_error) = signal::<Option<String>>(None);
        let (receipt, set_receipt) = signal::<Option<Receipt>>(None);
        let (checkout_error, set_checkout_error) = signal::<Option<String>>(None);

        Self {
            cart,
            set_cart,
            new_name,
            set_new_name,
            new_quantity,
            set_new_quantity,
            search_term,
            set_search_term,
            item_error,
            set_item_error,
            receipt,
            set_receipt,
            checkout_error,
            set_checkout_error,
        }
    }

    /// Set or clear the form validation banner
    pub fn set_item_error(&self, msg: Option<String>) {
        self.set_item_error.set(msg);
    }

    /// Reset the staging fields after a successful add/save or a cancel
    pub fn reset_staging(&self) {
        self.set_new_name.set(String::new());
        self.set_new_quantity.set(1);
    }

    /// Show the receipt, clearing any previous checkout error
    pub fn show_receipt(&self, receipt: Receipt) {
        self.set_checkout_error.set(None);
        self.set_receipt.set(Some(receipt));
    }

    /// Show a checkout error in the modal, clearing any previous receipt
    pub fn show_checkout_error(&self, msg: String) {
        self.set_receipt.set(None);
        self.set_checkout_error.set(Some(msg));
    }

    /// Close the modal, clearing receipt and error. Idempotent.
    pub fn close_modal(&self) {
        self.set_receipt.set(None);
        self.set_checkout_error.set(None);
    }
}
