//! Purchase Receipt
//!
//! Read-only summary produced by finalizing the cart. Held only as
//! presentation state; cleared when the modal closes.

use serde::{Deserialize, Serialize};

use crate::line::CartLine;

/// Finalized summary of cart contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Pre-formatted entries, one per cart line, in cart order
    pub lines: Vec<String>,
    /// Sum of all line quantities
    pub total_items: u32,
}

impl Receipt {
    pub(crate) fn from_lines(lines: &[CartLine]) -> Self {
        Self {
            lines: lines.iter().map(CartLine::receipt_entry).collect(),
            total_items: lines.iter().map(|line| line.quantity).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_from_lines() {
        let lines = vec![
            CartLine::new(1, "Apple".to_string(), 2),
            CartLine::new(2, "Pear".to_string(), 1),
        ];
        let receipt = Receipt::from_lines(&lines);
        assert_eq!(receipt.lines, vec!["Apple - Qtd:  2", "Pear - Qtd:  1"]);
        assert_eq!(receipt.total_items, 3);
    }

    #[test]
    fn test_receipt_serializes() {
        let receipt = Receipt::from_lines(&[CartLine::new(1, "Apple".to_string(), 2)]);
        let json = serde_json::to_string(&receipt).unwrap();
        assert!(json.contains("total_items"));
        let back: Receipt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, receipt);
    }
}
