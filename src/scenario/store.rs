//! In-memory scenario store

use super::{Scenario, ScenarioError, ScenarioInputs, ScenarioOutputs};
use crate::valuation::{DerivedMetrics, InputParameters, PaymentSchedule};

/// Ordered, append-only list of saved scenarios
#[derive(Debug, Clone)]
pub struct ScenarioStore {
    scenarios: Vec<Scenario>,
}

impl ScenarioStore {
    /// Create a store seeded with the minimum and target deals
    pub fn new() -> Self {
        Self {
            scenarios: seed_scenarios(),
        }
    }

    /// Create a store with no scenarios
    pub fn empty() -> Self {
        Self { scenarios: vec![] }
    }

    /// Save a snapshot of `inputs` and `metrics` under `name`.
    ///
    /// Returns the index of the new scenario. An empty name leaves the
    /// store untouched.
    pub fn append(
        &mut self,
        name: &str,
        inputs: &InputParameters,
        metrics: &DerivedMetrics,
    ) -> Result<usize, ScenarioError> {
        if name.is_empty() {
            tracing::warn!("Rejected scenario with empty name");
            return Err(ScenarioError::EmptyName);
        }

        self.scenarios.push(Scenario {
            name: name.to_string(),
            inputs: ScenarioInputs::from(inputs),
            outputs: ScenarioOutputs::from(metrics),
        });

        let index = self.scenarios.len() - 1;
        tracing::info!(index, scenario = name, net_revenue = metrics.net_revenue, "Saved scenario");
        Ok(index)
    }

    /// Scenario at `index`
    pub fn get(&self, index: usize) -> Result<&Scenario, ScenarioError> {
        self.scenarios.get(index).ok_or(ScenarioError::NotFound {
            index,
            len: self.scenarios.len(),
        })
    }

    /// All scenarios in insertion order
    pub fn list(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Inputs for the scenario at `index`, layered over `current`
    pub fn load(
        &self,
        index: usize,
        current: &InputParameters,
    ) -> Result<InputParameters, ScenarioError> {
        let scenario = self.get(index)?;
        tracing::info!(index, scenario = %scenario.name, "Loaded scenario");
        Ok(scenario.load_into(current))
    }

    /// Number of stored scenarios
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl Default for ScenarioStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Reference deals from the negotiation brief. Outputs are stored as given,
/// not recomputed.
fn seed_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "Minimum Deal".to_string(),
            inputs: ScenarioInputs {
                license_per_episode: 35_000.0,
                contract_length_years: 2,
                payment_schedule: PaymentSchedule::new(50.0, 25.0, 25.0, 0.0),
                include_add_on: false,
                add_on_price_per_episode: 10_000.0,
            },
            outputs: ScenarioOutputs {
                net_revenue: 3_025_000.0,
                net_value_vs_batna: 525_000.0,
            },
        },
        Scenario {
            name: "Target Deal".to_string(),
            inputs: ScenarioInputs {
                license_per_episode: 70_000.0,
                contract_length_years: 2,
                payment_schedule: PaymentSchedule::new(50.0, 25.0, 25.0, 0.0),
                include_add_on: true,
                add_on_price_per_episode: 15_000.0,
            },
            outputs: ScenarioOutputs {
                net_revenue: 7_537_500.0,
                net_value_vs_batna: 5_037_500.0,
            },
        },
    ]
}
