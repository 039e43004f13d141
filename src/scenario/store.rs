//! In-memory scenario storage with JSON file persistence
//!
//! The live data model keeps growth and churn rates as plain percentages.
//! The file format stores them as integer tenths of a percent (8.5% = 85);
//! that conversion lives in this module and nowhere else.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Scenario;
use crate::costs::CostItem;

/// Errors from scenario storage operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("scenario {0} not found")]
    NotFound(u32),

    #[error("failed to read or write scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode or decode scenario file: {0}")]
    Format(#[from] serde_json::Error),
}

/// Input for creating or updating a scenario (the id is store-assigned)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewScenario {
    pub name: String,
    pub fixed_costs: Vec<CostItem>,
    pub variable_costs: Vec<CostItem>,
    pub price_per_learner: f64,
    pub initial_learner_count: f64,
    pub monthly_growth_rate: f64,
    pub monthly_churn_rate: f64,
}

impl NewScenario {
    fn into_scenario(self, id: u32) -> Scenario {
        Scenario {
            id,
            name: self.name,
            fixed_costs: self.fixed_costs,
            variable_costs: self.variable_costs,
            price_per_learner: self.price_per_learner,
            initial_learner_count: self.initial_learner_count,
            monthly_growth_rate: self.monthly_growth_rate,
            monthly_churn_rate: self.monthly_churn_rate,
        }
    }
}

/// In-memory scenario store keyed by auto-incrementing id
#[derive(Debug, Clone)]
pub struct ScenarioStore {
    scenarios: HashMap<u32, Scenario>,
    next_id: u32,
}

impl ScenarioStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            scenarios: HashMap::new(),
            next_id: 1,
        }
    }

    /// Create a scenario, assigning the next free id
    pub fn create(&mut self, new: NewScenario) -> &Scenario {
        let id = self.next_id;
        self.next_id += 1;

        debug!("creating scenario {} ({})", id, new.name);
        self.scenarios.insert(id, new.into_scenario(id));
        &self.scenarios[&id]
    }

    /// Look up a scenario by id
    pub fn get(&self, id: u32) -> Option<&Scenario> {
        self.scenarios.get(&id)
    }

    /// All scenarios, ordered by id
    pub fn list(&self) -> Vec<&Scenario> {
        let mut scenarios: Vec<&Scenario> = self.scenarios.values().collect();
        scenarios.sort_by_key(|s| s.id);
        scenarios
    }

    /// Replace a scenario's contents, keeping its id
    pub fn update(&mut self, id: u32, new: NewScenario) -> Result<&Scenario, StoreError> {
        if !self.scenarios.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }

        self.scenarios.insert(id, new.into_scenario(id));
        Ok(&self.scenarios[&id])
    }

    /// Remove a scenario, returning it
    pub fn delete(&mut self, id: u32) -> Result<Scenario, StoreError> {
        debug!("deleting scenario {}", id);
        self.scenarios.remove(&id).ok_or(StoreError::NotFound(id))
    }

    /// Number of stored scenarios
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Write the store to a JSON file
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let file = ScenarioFile {
            saved_at: Utc::now(),
            scenarios: self.list().into_iter().map(ScenarioRecord::from_scenario).collect(),
        };

        fs::write(&path, serde_json::to_string_pretty(&file)?)?;
        info!(
            "saved {} scenarios to {}",
            file.scenarios.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Read a store from a JSON file written by [`ScenarioStore::save_to_path`]
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let file: ScenarioFile = serde_json::from_str(&fs::read_to_string(&path)?)?;
        info!(
            "loaded {} scenarios from {} (saved at {})",
            file.scenarios.len(),
            path.as_ref().display(),
            file.saved_at
        );

        let scenarios: HashMap<u32, Scenario> = file
            .scenarios
            .into_iter()
            .map(|record| {
                let scenario = record.into_scenario();
                (scenario.id, scenario)
            })
            .collect();
        let next_id = scenarios.keys().max().map(|id| id + 1).unwrap_or(1);

        Ok(Self { scenarios, next_id })
    }
}

impl Default for ScenarioStore {
    fn default() -> Self {
        Self::new()
    }
}

/// On-disk scenario file
#[derive(Debug, Serialize, Deserialize)]
struct ScenarioFile {
    saved_at: DateTime<Utc>,
    scenarios: Vec<ScenarioRecord>,
}

/// On-disk scenario row with rates in integer tenths of a percent
#[derive(Debug, Serialize, Deserialize)]
struct ScenarioRecord {
    id: u32,
    name: String,
    fixed_costs: Vec<CostItem>,
    variable_costs: Vec<CostItem>,
    price_per_learner: f64,
    initial_learner_count: f64,
    monthly_growth_rate_tenths: i64,
    monthly_churn_rate_tenths: i64,
}

impl ScenarioRecord {
    fn from_scenario(scenario: &Scenario) -> Self {
        Self {
            id: scenario.id,
            name: scenario.name.clone(),
            fixed_costs: scenario.fixed_costs.clone(),
            variable_costs: scenario.variable_costs.clone(),
            price_per_learner: scenario.price_per_learner,
            initial_learner_count: scenario.initial_learner_count,
            monthly_growth_rate_tenths: rate_to_tenths(scenario.monthly_growth_rate),
            monthly_churn_rate_tenths: rate_to_tenths(scenario.monthly_churn_rate),
        }
    }

    fn into_scenario(self) -> Scenario {
        Scenario {
            id: self.id,
            name: self.name,
            fixed_costs: self.fixed_costs,
            variable_costs: self.variable_costs,
            price_per_learner: self.price_per_learner,
            initial_learner_count: self.initial_learner_count,
            monthly_growth_rate: tenths_to_rate(self.monthly_growth_rate_tenths),
            monthly_churn_rate: tenths_to_rate(self.monthly_churn_rate_tenths),
        }
    }
}

/// Encode a plain percentage as tenths of a percent (8.5% = 85).
/// Sub-tenth precision is dropped here; the live model never is.
fn rate_to_tenths(rate: f64) -> i64 {
    (rate * 10.0).round() as i64
}

fn tenths_to_rate(tenths: i64) -> f64 {
    tenths as f64 / 10.0
}
