//! Valuation metrics
//!
//! Recorded through the `metrics` facade. Nothing is exported unless the
//! embedding application installs a recorder, and nothing is recorded at all
//! once [`set_enabled`] turns recording off.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::valuation::DerivedMetrics;

static ENABLED: AtomicBool = AtomicBool::new(true);

/// Turn metric recording on or off for the whole process
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether metrics are currently recorded
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Deal evaluations performed
    Evaluations,
    /// Scenarios saved to the store
    ScenariosSaved,
}

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Net revenue of the current deal
    NetRevenue,
    /// Net value against the BATNA
    NetValueVsBatna,
    /// Counterparty profit margin
    CounterpartyMargin,
}

impl CounterMetric {
    fn name(self) -> &'static str {
        match self {
            CounterMetric::Evaluations => "dealval_evaluations_total",
            CounterMetric::ScenariosSaved => "dealval_scenarios_saved_total",
        }
    }
}

impl GaugeMetric {
    fn name(self) -> &'static str {
        match self {
            GaugeMetric::NetRevenue => "dealval_net_revenue_usd",
            GaugeMetric::NetValueVsBatna => "dealval_net_value_vs_batna_usd",
            GaugeMetric::CounterpartyMargin => "dealval_counterparty_margin_pct",
        }
    }
}

/// Increment a counter by one
pub fn increment(metric: CounterMetric) {
    if !is_enabled() {
        return;
    }
    ::metrics::counter!(metric.name()).increment(1);
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    if !is_enabled() {
        return;
    }
    ::metrics::gauge!(metric.name()).set(value);
}

/// Record the headline numbers of an evaluation
pub fn record_evaluation(derived: &DerivedMetrics) {
    increment(CounterMetric::Evaluations);
    set_gauge(GaugeMetric::NetRevenue, derived.net_revenue);
    set_gauge(GaugeMetric::NetValueVsBatna, derived.net_value_vs_batna);

    // Gauges cannot hold NaN meaningfully
    if derived.counterparty_profit_margin.is_finite() {
        set_gauge(GaugeMetric::CounterpartyMargin, derived.counterparty_profit_margin);
    }
}
