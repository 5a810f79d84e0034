//! Domain-level errors
//!
//! Both variants are user-facing and locally recovered by the widget;
//! nothing here is fatal.

use serde::{Deserialize, Serialize};

/// Common result type for cart operations
pub type CartResult<T> = Result<T, CartError>;

/// Cart-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartError {
    /// Rejected form input: blank name, quantity below 1, or a rename
    /// that would collide with another line's name
    Validation(String),
    /// Finalize was called on a cart with no lines
    EmptyCart,
}

impl std::fmt::Display for CartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartError::Validation(msg) => write!(f, "{}", msg),
            CartError::EmptyCart => write!(f, "Nenhum item encontrado no carrinho"),
        }
    }
}

impl std::error::Error for CartError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_displays_its_message() {
        let err = CartError::Validation("nope".to_string());
        assert_eq!(err.to_string(), "nope");
    }

    #[test]
    fn test_empty_cart_message() {
        assert_eq!(
            CartError::EmptyCart.to_string(),
            "Nenhum item encontrado no carrinho"
        );
    }
}
