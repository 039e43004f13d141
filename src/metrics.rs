//! Unit-economics metrics derived from costs and price

use serde::{Deserialize, Serialize};

use crate::params::FinancialParams;

/// Break-even and margin metrics for the current cost and price structure
///
/// Fully determined by (total fixed costs, parameters); recomputed on every
/// call, never mutated incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Price per learner minus variable cost per learner
    pub contribution_margin: f64,

    /// Contribution margin as a percentage of price (0 when price is 0)
    pub cm_ratio: f64,

    /// Learner count at which contribution covers fixed costs
    ///
    /// 0 when the contribution margin is non-positive: break-even is
    /// unreachable under current unit economics, and consumers must not read
    /// 0 here as "already broken even".
    pub break_even_learners: i64,

    /// MRR at the break-even learner count
    pub break_even_mrr: f64,

    /// Growth rate echoed from the inputs for display
    pub monthly_growth_rate: f64,

    /// Churn rate echoed from the inputs for display
    pub monthly_churn_rate: f64,
}

/// Compute break-even metrics from total fixed costs and current parameters.
///
/// Total over all numeric inputs: out-of-range values (negative costs, huge
/// counts) flow through and produce arithmetically consistent output rather
/// than an error. Input validation is the caller's responsibility; the only
/// guards here are the price-zero and non-positive-margin policies.
pub fn compute_metrics(fixed_costs: f64, params: &FinancialParams) -> Metrics {
    let contribution_margin = params.price_per_learner - params.variable_cost_per_learner;

    // Margin ratio is undefined at price 0; report 0 instead of dividing
    let cm_ratio = if params.price_per_learner > 0.0 {
        contribution_margin / params.price_per_learner * 100.0
    } else {
        0.0
    };

    // A non-positive margin can never recoup fixed costs: report 0, not
    // infinity and not an error
    let break_even_learners = if contribution_margin > 0.0 {
        (fixed_costs / contribution_margin).ceil() as i64
    } else {
        0
    };

    let break_even_mrr = break_even_learners as f64 * params.price_per_learner;

    Metrics {
        contribution_margin,
        cm_ratio,
        break_even_learners,
        break_even_mrr,
        monthly_growth_rate: params.monthly_growth_rate,
        monthly_churn_rate: params.monthly_churn_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn base_params() -> FinancialParams {
        FinancialParams::new(299.0, 45.0, 150.0, 8.5, 5.2)
    }

    #[test]
    fn test_break_even_reachable() {
        let metrics = compute_metrics(65_500.0, &base_params());

        assert_eq!(metrics.contribution_margin, 254.0);
        assert_relative_eq!(metrics.cm_ratio, 84.949_832_775_919_73, epsilon = 1e-9);
        assert_eq!(metrics.break_even_learners, 258);
        assert_eq!(metrics.break_even_mrr, 77_142.0);
    }

    #[test]
    fn test_break_even_unreachable_negative_margin() {
        let params = FinancialParams::new(100.0, 150.0, 150.0, 8.5, 5.2);

        // Loss-making unit economics are valid output, not an error, and the
        // break-even metrics report "not achievable" regardless of fixed cost
        for fixed_costs in [0.0, 65_500.0, 1e12] {
            let metrics = compute_metrics(fixed_costs, &params);
            assert_eq!(metrics.contribution_margin, -50.0);
            assert_eq!(metrics.break_even_learners, 0);
            assert_eq!(metrics.break_even_mrr, 0.0);
        }
    }

    #[test]
    fn test_break_even_unreachable_zero_margin() {
        let params = FinancialParams::new(100.0, 100.0, 150.0, 0.0, 0.0);
        let metrics = compute_metrics(10_000.0, &params);

        assert_eq!(metrics.contribution_margin, 0.0);
        assert_eq!(metrics.break_even_learners, 0);
        assert_eq!(metrics.break_even_mrr, 0.0);
    }

    #[test]
    fn test_price_zero_guard() {
        let params = FinancialParams::new(0.0, 45.0, 150.0, 8.5, 5.2);
        let metrics = compute_metrics(65_500.0, &params);

        assert_eq!(metrics.cm_ratio, 0.0);
        assert_eq!(metrics.contribution_margin, -45.0);
        assert_eq!(metrics.break_even_learners, 0);
        assert_eq!(metrics.break_even_mrr, 0.0);
    }

    #[test]
    fn test_rates_echoed() {
        let metrics = compute_metrics(65_500.0, &base_params());

        assert_eq!(metrics.monthly_growth_rate, 8.5);
        assert_eq!(metrics.monthly_churn_rate, 5.2);
    }

    #[test]
    fn test_idempotent() {
        let params = base_params();

        assert_eq!(
            compute_metrics(65_500.0, &params),
            compute_metrics(65_500.0, &params)
        );
    }

    #[test]
    fn test_negative_fixed_costs_flow_through() {
        // No validation in the core: a negative fixed cost yields a negative
        // break-even count, arithmetically consistent if nonsensical
        let metrics = compute_metrics(-1_000.0, &base_params());
        assert_eq!(metrics.break_even_learners, -3);
    }
}
