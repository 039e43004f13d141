//! Projection engine for 12-month subscriber and revenue forecasts

mod engine;
mod periods;

pub use engine::{compute_projection, PROJECTION_MONTHS};
pub use periods::{summarize, ProjectionPeriod, ProjectionSummary};
