//! Scenario types

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::valuation::{DerivedMetrics, InputParameters, PaymentSchedule};

/// Scenario store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    /// Scenario name was empty
    #[error("Scenario name must not be empty")]
    EmptyName,
    /// No scenario at the requested index
    #[error("Scenario {index} not found ({len} stored)")]
    NotFound { index: usize, len: usize },
}

/// Deal terms captured by a scenario.
///
/// Viewership forecast settings are not part of a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInputs {
    pub license_per_episode: f64,
    pub contract_length_years: u32,
    pub payment_schedule: PaymentSchedule,
    pub include_add_on: bool,
    pub add_on_price_per_episode: f64,
}

impl From<&InputParameters> for ScenarioInputs {
    fn from(inputs: &InputParameters) -> Self {
        Self {
            license_per_episode: inputs.license_per_episode,
            contract_length_years: inputs.contract_length_years,
            payment_schedule: inputs.payment_schedule,
            include_add_on: inputs.include_add_on,
            add_on_price_per_episode: inputs.add_on_price_per_episode,
        }
    }
}

/// Headline results recorded with a scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutputs {
    pub net_revenue: f64,
    pub net_value_vs_batna: f64,
}

impl From<&DerivedMetrics> for ScenarioOutputs {
    fn from(metrics: &DerivedMetrics) -> Self {
        Self {
            net_revenue: metrics.net_revenue,
            net_value_vs_batna: metrics.net_value_vs_batna,
        }
    }
}

/// A named snapshot of deal terms and their results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Display name, not necessarily unique
    pub name: String,
    /// Captured deal terms
    pub inputs: ScenarioInputs,
    /// Results at save time
    pub outputs: ScenarioOutputs,
}

impl Scenario {
    /// Project this scenario onto a fresh set of inputs.
    ///
    /// Captured deal terms come from the scenario; everything else is
    /// copied from `current`.
    pub fn load_into(&self, current: &InputParameters) -> InputParameters {
        InputParameters {
            license_per_episode: self.inputs.license_per_episode,
            contract_length_years: self.inputs.contract_length_years,
            payment_schedule: self.inputs.payment_schedule,
            include_add_on: self.inputs.include_add_on,
            add_on_price_per_episode: self.inputs.add_on_price_per_episode,
            ..current.clone()
        }
    }
}
