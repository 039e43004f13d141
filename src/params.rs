//! Simulation input parameters

use serde::{Deserialize, Serialize};

/// Exogenous inputs shared by the metrics and projection calculations
///
/// A plain value object with no identity beyond its values: the caller
/// assembles one from current cost and pricing state on every recompute.
/// Growth and churn rates are plain percentages (8.5 means 8.5% per month);
/// the persistence layer stores rates in a scaled integer form, and that
/// conversion happens at the store boundary only, never here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialParams {
    /// Subscription price per learner per month
    pub price_per_learner: f64,

    /// Variable cost per learner per month (sum of the variable cost items)
    pub variable_cost_per_learner: f64,

    /// Learner count at the start of month 1
    pub initial_learner_count: f64,

    /// Monthly growth rate as a percentage of the current learner base
    pub monthly_growth_rate: f64,

    /// Monthly churn rate as a percentage of the current learner base
    pub monthly_churn_rate: f64,
}

impl FinancialParams {
    /// Create a parameter set with all fields specified
    pub fn new(
        price_per_learner: f64,
        variable_cost_per_learner: f64,
        initial_learner_count: f64,
        monthly_growth_rate: f64,
        monthly_churn_rate: f64,
    ) -> Self {
        Self {
            price_per_learner,
            variable_cost_per_learner,
            initial_learner_count,
            monthly_growth_rate,
            monthly_churn_rate,
        }
    }
}
