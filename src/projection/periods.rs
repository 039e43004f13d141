//! Projection output structures

use serde::{Deserialize, Serialize};

/// One month of projection output
///
/// Learner count and MRR are rounded to the nearest integer for display when
/// the row is recorded; the engine carries the unrounded count between months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionPeriod {
    /// Projection month (1-indexed)
    pub month: u32,

    /// Learner count at end of month
    pub learners: i64,

    /// Monthly recurring revenue at end of month
    pub mrr: i64,
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub months: u32,
    pub final_learners: i64,
    pub final_mrr: i64,
    pub cumulative_revenue: i64,
}

/// Summarize a projection for reporting
pub fn summarize(periods: &[ProjectionPeriod]) -> ProjectionSummary {
    let last = periods.last();

    ProjectionSummary {
        months: periods.len() as u32,
        final_learners: last.map(|p| p.learners).unwrap_or(0),
        final_mrr: last.map(|p| p.mrr).unwrap_or(0),
        cumulative_revenue: periods.iter().map(|p| p.mrr).sum(),
    }
}
