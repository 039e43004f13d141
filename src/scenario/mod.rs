//! Named scenarios and their storage

mod data;
mod store;

pub use data::Scenario;
pub use store::{NewScenario, ScenarioStore, StoreError};
