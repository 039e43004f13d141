//! Cost line item modeling and CSV ingestion

mod data;
pub mod loader;

pub use data::{total_amount, CostItem};
pub use loader::{load_cost_items, load_cost_items_from_reader};
