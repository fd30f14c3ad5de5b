//! Scenario module
//!
//! Named snapshots of deal terms for side-by-side comparison

mod store;
mod types;

pub use store::ScenarioStore;
pub use types::{Scenario, ScenarioError, ScenarioInputs, ScenarioOutputs};
