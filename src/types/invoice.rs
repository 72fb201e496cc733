//! Invoice-related types for the Theater Billing Engine
//!
//! This module defines the performance and invoice records that form the
//! input to statement generation. Both are inert data holders: all pricing
//! behavior lives in the core modules.

use crate::types::PlayId;
use serde::{Deserialize, Serialize};

/// A single performance of a play
///
/// References its play by ID; the play itself is resolved through the play
/// repository at statement time. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// The ID of the play performed (foreign key into the play repository)
    pub play_id: PlayId,

    /// The audience size for this performance
    pub audience: u32,
}

impl Performance {
    /// Create a new performance for the play with the given ID and audience size
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Performance {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer invoice: the full input to statement generation
///
/// The order of `performances` determines the order of the per-performance
/// lines in the printed statement. It carries no other semantic weight;
/// totals are order-independent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// The customer the statement is addressed to
    pub customer: String,

    /// The performances being billed, in statement line order
    pub performances: Vec<Performance>,
}

impl Invoice {
    /// Create a new invoice for the given customer and performances
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Invoice {
            customer: customer.into(),
            performances,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_construction() {
        let performance = Performance::new("hamlet", 55);
        assert_eq!(performance.play_id, "hamlet");
        assert_eq!(performance.audience, 55);
    }

    #[test]
    fn test_invoice_preserves_performance_order() {
        let invoice = Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
                Performance::new("othello", 40),
            ],
        );

        let ids: Vec<&str> = invoice
            .performances
            .iter()
            .map(|p| p.play_id.as_str())
            .collect();
        assert_eq!(ids, vec!["hamlet", "as-like", "othello"]);
    }
}
