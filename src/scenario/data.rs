//! Scenario data structures

use serde::{Deserialize, Serialize};

use crate::costs::{total_amount, CostItem};
use crate::params::FinancialParams;

/// A saved cost and parameter set under a user-facing name
///
/// The two cost schedules own their line items exclusively. Total fixed
/// costs and the per-learner variable cost are always derived by summation,
/// never stored alongside the lists where they could drift out of sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Store-assigned identifier
    pub id: u32,

    /// User-facing name
    pub name: String,

    /// Fixed monthly cost line items
    pub fixed_costs: Vec<CostItem>,

    /// Per-learner variable cost line items
    pub variable_costs: Vec<CostItem>,

    /// Subscription price per learner per month
    pub price_per_learner: f64,

    /// Learner count at the start of month 1
    pub initial_learner_count: f64,

    /// Monthly growth rate as a plain percentage
    pub monthly_growth_rate: f64,

    /// Monthly churn rate as a plain percentage
    pub monthly_churn_rate: f64,
}

impl Scenario {
    /// Sum of the fixed cost schedule
    pub fn total_fixed_costs(&self) -> f64 {
        total_amount(&self.fixed_costs)
    }

    /// Sum of the variable cost schedule, per learner per month
    pub fn variable_cost_per_learner(&self) -> f64 {
        total_amount(&self.variable_costs)
    }

    /// Assemble calculation inputs from the current scenario state
    pub fn params(&self) -> FinancialParams {
        FinancialParams {
            price_per_learner: self.price_per_learner,
            variable_cost_per_learner: self.variable_cost_per_learner(),
            initial_learner_count: self.initial_learner_count,
            monthly_growth_rate: self.monthly_growth_rate,
            monthly_churn_rate: self.monthly_churn_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_scenario() -> Scenario {
        Scenario {
            id: 1,
            name: "Base case".to_string(),
            fixed_costs: vec![
                CostItem::new("salaries", "Instructor salaries", 42_000.0),
                CostItem::new("office", "Office lease", 23_500.0),
            ],
            variable_costs: vec![
                CostItem::new("content", "Content licensing", 30.0),
                CostItem::new("support", "Learner support", 15.0),
            ],
            price_per_learner: 299.0,
            initial_learner_count: 150.0,
            monthly_growth_rate: 8.5,
            monthly_churn_rate: 5.2,
        }
    }

    #[test]
    fn test_derived_sums() {
        let scenario = test_scenario();

        assert_eq!(scenario.total_fixed_costs(), 65_500.0);
        assert_eq!(scenario.variable_cost_per_learner(), 45.0);
    }

    #[test]
    fn test_params_assembly() {
        let params = test_scenario().params();

        assert_eq!(params.price_per_learner, 299.0);
        assert_eq!(params.variable_cost_per_learner, 45.0);
        assert_eq!(params.initial_learner_count, 150.0);
        assert_eq!(params.monthly_growth_rate, 8.5);
        assert_eq!(params.monthly_churn_rate, 5.2);
    }
}
