//! Domain Layer
//!
//! Cart lines, receipts and the cart store for the shopping-cart widget.
//! This layer has NO external dependencies (except serde for serialization)
//! and compiles for both native targets (unit tests) and wasm.

mod error;
mod line;
mod receipt;
mod store;

pub use error::{CartError, CartResult};
pub use line::CartLine;
pub use receipt::Receipt;
pub use store::CartStore;
