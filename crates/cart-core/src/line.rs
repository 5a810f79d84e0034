//! Cart Line Entity
//!
//! A single item/quantity entry in the cart.

use serde::{Deserialize, Serialize};

/// One item entry in the cart
///
/// `id` is a stable identity assigned by the store at insertion and never
/// reused within a store's lifetime. Views reference lines by id, so a
/// filtered row always resolves back to the right line even when names
/// change under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Stable identity, assigned by the store
    pub id: u32,
    /// Item name, trimmed and non-empty
    pub name: String,
    /// Units of the item
    pub quantity: u32,
}

impl CartLine {
    /// Create a new line
    pub fn new(id: u32, name: String, quantity: u32) -> Self {
        Self { id, name, quantity }
    }

    /// Format this line the way the receipt prints it
    pub fn receipt_entry(&self) -> String {
        format!("{} - Qtd:  {}", self.name, self.quantity)
    }

    /// Case-insensitive substring match against a search term
    pub fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}
