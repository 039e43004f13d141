//! Month-by-month recurrence for subscriber count and recurring revenue

use super::periods::ProjectionPeriod;
use crate::params::FinancialParams;

/// Fixed projection horizon in months
pub const PROJECTION_MONTHS: u32 = 12;

/// Simulate learner count and MRR over the fixed 12-month horizon.
///
/// Month 1 takes the initial learner count as-is; each later month applies
/// growth and churn additively to the same base and floors the result at 0,
/// so the learner count never goes negative even when churn exceeds growth.
/// The unrounded learner count carries forward between months; rounding
/// happens only when a row is recorded, so compounding never drifts from the
/// continuous-rate recurrence.
///
/// Pure and total: any real-valued inputs produce a well-defined 12-row
/// sequence, and identical inputs produce identical output on every call.
pub fn compute_projection(params: &FinancialParams) -> Vec<ProjectionPeriod> {
    let mut periods = Vec::with_capacity(PROJECTION_MONTHS as usize);
    let mut current_learners = params.initial_learner_count;

    for month in 1..=PROJECTION_MONTHS {
        if month > 1 {
            let growth = current_learners * (params.monthly_growth_rate / 100.0);
            let churn = current_learners * (params.monthly_churn_rate / 100.0);
            current_learners = (current_learners + growth - churn).max(0.0);
        }

        let mrr = current_learners * params.price_per_learner;
        periods.push(ProjectionPeriod {
            month,
            learners: current_learners.round() as i64,
            mrr: mrr.round() as i64,
        });
    }

    periods
}

#[cfg(test)]
mod tests {
    use super::*;

    fn growth_params() -> FinancialParams {
        FinancialParams::new(299.0, 45.0, 150.0, 8.5, 5.2)
    }

    #[test]
    fn test_twelve_months() {
        let projection = compute_projection(&growth_params());

        assert_eq!(projection.len(), 12);
        for (i, period) in projection.iter().enumerate() {
            assert_eq!(period.month, i as u32 + 1);
        }
    }

    #[test]
    fn test_first_month_pass_through() {
        let projection = compute_projection(&growth_params());

        // No growth or churn applied in month 1
        assert_eq!(projection[0].learners, 150);
        assert_eq!(projection[0].mrr, 44_850);
    }

    #[test]
    fn test_compounding_growth() {
        let projection = compute_projection(&growth_params());

        // Net 3.3%/month compounding from 150: 150 * 1.033^(m-1)
        let expected_learners = [150, 155, 160, 165, 171, 176, 182, 188, 194, 201, 208, 214];
        for (period, expected) in projection.iter().zip(expected_learners) {
            assert_eq!(period.learners, expected);
        }

        assert_eq!(projection[1].mrr, 46_330);
        assert_eq!(projection[11].mrr, 64_101);
    }

    #[test]
    fn test_unrounded_count_carries_forward() {
        // Month 2 is 100.4, which displays as 100. If the accumulator were
        // rounded between months, month 3 would also display as 100; the
        // unrounded carry gives 100.8016, which displays as 101.
        let params = FinancialParams::new(10.0, 0.0, 100.0, 0.4, 0.0);
        let projection = compute_projection(&params);

        assert_eq!(projection[1].learners, 100);
        assert_eq!(projection[2].learners, 101);
    }

    #[test]
    fn test_learners_floored_at_zero() {
        let params = FinancialParams::new(299.0, 45.0, 1.0, 0.0, 100.0);
        let projection = compute_projection(&params);

        assert_eq!(projection[0].learners, 1);
        for period in &projection[1..] {
            assert_eq!(period.learners, 0);
            assert_eq!(period.mrr, 0);
        }
    }

    #[test]
    fn test_churn_exceeding_growth_stays_non_negative() {
        let params = FinancialParams::new(299.0, 45.0, 10.0, 10.0, 160.0);
        let projection = compute_projection(&params);

        for period in &projection {
            assert!(period.learners >= 0);
        }
        assert_eq!(projection[1].learners, 0);
    }

    #[test]
    fn test_zero_price_zero_mrr() {
        let params = FinancialParams::new(0.0, 45.0, 150.0, 8.5, 5.2);
        let projection = compute_projection(&params);

        for period in &projection {
            assert_eq!(period.mrr, 0);
        }
    }

    #[test]
    fn test_negative_growth_flows_through() {
        // Negative rates are nonsensical for the business but well-defined:
        // -10% growth shrinks the base by 10% a month
        let params = FinancialParams::new(299.0, 45.0, 150.0, -10.0, 0.0);
        let projection = compute_projection(&params);

        assert_eq!(projection[1].learners, 135);
    }

    #[test]
    fn test_idempotent() {
        let params = growth_params();

        assert_eq!(compute_projection(&params), compute_projection(&params));
    }
}
