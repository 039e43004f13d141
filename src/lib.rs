//! Breakeven System - Financial projection engine for subscription businesses
//!
//! This library provides:
//! - Unit-economics metrics (contribution margin, break-even learner count)
//! - 12-month subscriber and MRR projections under monthly growth and churn
//! - Cost line item modeling with CSV ingestion
//! - Named scenario storage with JSON file persistence

pub mod costs;
pub mod metrics;
pub mod params;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use costs::CostItem;
pub use metrics::{compute_metrics, Metrics};
pub use params::FinancialParams;
pub use projection::{compute_projection, ProjectionPeriod, ProjectionSummary, PROJECTION_MONTHS};
pub use scenario::{Scenario, ScenarioStore};
