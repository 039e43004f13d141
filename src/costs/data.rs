//! Cost line items for the fixed and variable cost schedules

use serde::{Deserialize, Serialize};

/// A single cost line item
///
/// Belongs to exactly one owning list (the fixed-cost schedule or the
/// per-learner variable-cost schedule) and is mutable in place by its owner.
/// Amounts are expected to be non-negative; the ingestion layer validates
/// this, the calculation core does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostItem {
    /// Identifier, unique within the owning list
    pub id: String,

    /// Free-text description
    pub description: String,

    /// Monthly amount in currency units
    pub amount: f64,
}

impl CostItem {
    /// Create a new cost item
    pub fn new(id: impl Into<String>, description: impl Into<String>, amount: f64) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            amount,
        }
    }
}

/// Sum the amounts of a cost list
pub fn total_amount(items: &[CostItem]) -> f64 {
    items.iter().map(|item| item.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_amount() {
        let items = vec![
            CostItem::new("salaries", "Instructor salaries", 42_000.0),
            CostItem::new("platform", "Platform hosting", 3_500.0),
            CostItem::new("office", "Office lease", 20_000.0),
        ];

        assert_eq!(total_amount(&items), 65_500.0);
    }

    #[test]
    fn test_total_amount_empty() {
        assert_eq!(total_amount(&[]), 0.0);
    }
}
