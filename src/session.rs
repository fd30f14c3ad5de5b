//! Negotiation session
//!
//! Holds the current deal terms and their metrics, re-evaluating on every
//! change, plus the scenario store for the life of the session.

use crate::scenario::{Scenario, ScenarioError, ScenarioStore};
use crate::telemetry::{self, CounterMetric};
use crate::valuation::{
    range_hints, DerivedMetrics, InputParameters, RangeHint, ValuationEngine, ValuationModel,
};

/// A single-user valuation session
pub struct Session<M: ValuationModel = ValuationEngine> {
    model: M,
    inputs: InputParameters,
    metrics: DerivedMetrics,
    store: ScenarioStore,
}

impl Session<ValuationEngine> {
    /// Start a session with the default engine and seeded scenarios
    pub fn new(inputs: InputParameters) -> Self {
        Self::with_model(ValuationEngine::new(), inputs, ScenarioStore::new())
    }
}

impl<M: ValuationModel> Session<M> {
    /// Start a session with a custom model and store
    pub fn with_model(model: M, inputs: InputParameters, store: ScenarioStore) -> Self {
        let metrics = evaluate_and_record(&model, &inputs);
        Self {
            model,
            inputs,
            metrics,
            store,
        }
    }

    /// Current deal terms
    pub fn inputs(&self) -> &InputParameters {
        &self.inputs
    }

    /// Metrics for the current deal terms
    pub fn metrics(&self) -> &DerivedMetrics {
        &self.metrics
    }

    /// Saved scenarios
    pub fn store(&self) -> &ScenarioStore {
        &self.store
    }

    /// Saved scenarios in insertion order
    pub fn scenarios(&self) -> &[Scenario] {
        self.store.list()
    }

    /// Replace the deal terms and re-evaluate
    pub fn set_inputs(&mut self, inputs: InputParameters) -> &DerivedMetrics {
        self.inputs = inputs;
        self.recompute()
    }

    /// Edit the deal terms in place and re-evaluate
    pub fn update<F>(&mut self, edit: F) -> &DerivedMetrics
    where
        F: FnOnce(&mut InputParameters),
    {
        edit(&mut self.inputs);
        self.recompute()
    }

    /// Save the current deal under `name`
    pub fn save(&mut self, name: &str) -> Result<usize, ScenarioError> {
        let index = self.store.append(name, &self.inputs, &self.metrics)?;
        telemetry::increment(CounterMetric::ScenariosSaved);
        Ok(index)
    }

    /// Replace the current deal terms with a saved scenario's.
    ///
    /// Viewership forecast settings are kept. On error the session is
    /// unchanged.
    pub fn load(&mut self, index: usize) -> Result<&DerivedMetrics, ScenarioError> {
        let inputs = self.store.load(index, &self.inputs).map_err(|e| {
            tracing::warn!(index, error = %e, "Scenario load failed");
            e
        })?;
        Ok(self.set_inputs(inputs))
    }

    /// Advisory hints for the current deal terms
    pub fn range_hints(&self) -> Vec<RangeHint> {
        range_hints(&self.inputs)
    }

    fn recompute(&mut self) -> &DerivedMetrics {
        self.metrics = evaluate_and_record(&self.model, &self.inputs);
        &self.metrics
    }
}

impl Default for Session<ValuationEngine> {
    fn default() -> Self {
        Self::new(InputParameters::default())
    }
}

fn evaluate_and_record<M: ValuationModel>(model: &M, inputs: &InputParameters) -> DerivedMetrics {
    let metrics = model.evaluate(inputs);

    if !metrics.is_payment_schedule_valid {
        tracing::warn!(
            total = metrics.total_payment_percent,
            "Payment schedule does not sum to 100%"
        );
    }
    if !metrics.counterparty_profit_margin.is_finite() {
        tracing::warn!(
            counterparty_revenue = metrics.counterparty_revenue,
            "Counterparty profit margin is undefined"
        );
    }

    telemetry::record_evaluation(&metrics);
    metrics
}
