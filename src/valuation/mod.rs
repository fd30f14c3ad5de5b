//! Deal valuation module
//!
//! Turns a set of deal inputs into derived financial metrics. Every metric
//! is a pure function of the inputs; nothing is cached between evaluations.

mod engine;
mod financing;
mod hints;
mod viewership;

pub use engine::{contract_adjustment, evaluate, ValuationEngine};
pub use financing::{PaymentSchedule, Tranche};
pub use hints::{range_hints, RangeHint, MAX_REVENUE_RATE, MIN_REVENUE_RATE};
pub use viewership::{expected_counterparty_revenue, expected_viewership_millions, ViewershipRange};

use serde::{Deserialize, Serialize};

/// Episodes covered by every license
pub const NUM_EPISODES: u32 = 100;
/// Walk-away value of the competing offer
pub const BATNA_VALUE: f64 = 2_500_000.0;

/// Deal inputs for one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputParameters {
    /// License fee per episode
    pub license_per_episode: f64,
    /// Episodes licensed
    pub num_episodes: u32,
    /// Contract length in years
    pub contract_length_years: u32,
    /// Tranche percentages
    pub payment_schedule: PaymentSchedule,
    /// Whether the add-on product is part of the deal
    pub include_add_on: bool,
    /// Add-on price per episode
    pub add_on_price_per_episode: f64,
    /// Walk-away alternative
    pub batna_value: f64,
    /// Streaming viewership forecast bucket
    pub viewership_range: ViewershipRange,
    /// Counterparty revenue per 10M viewers
    pub revenue_per_ten_million_viewers: f64,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            license_per_episode: 45_000.0,
            num_episodes: NUM_EPISODES,
            contract_length_years: 2,
            payment_schedule: PaymentSchedule::default(),
            include_add_on: false,
            add_on_price_per_episode: 10_000.0,
            batna_value: BATNA_VALUE,
            viewership_range: ViewershipRange::default(),
            revenue_per_ten_million_viewers: 1_000_000.0,
        }
    }
}

/// Metrics derived from [`InputParameters`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// License fee times episodes
    pub base_revenue: f64,
    /// Opportunity cost of deferred tranches
    pub financing_cost: f64,
    /// Base revenue less financing cost
    pub revenue_after_financing: f64,
    /// Contract length bonus or penalty
    pub contract_adjustment: f64,
    /// Add-on revenue, zero when excluded
    pub add_on_value: f64,
    /// Revenue after all adjustments
    pub net_revenue: f64,
    /// Net revenue minus the BATNA
    pub net_value_vs_batna: f64,
    /// Sum of tranche percentages
    pub total_payment_percent: f64,
    /// True when the tranches sum to exactly 100
    pub is_payment_schedule_valid: bool,
    /// Counterparty revenue at the forecast midpoint
    pub counterparty_revenue: f64,
    /// Counterparty revenue minus base revenue
    pub counterparty_profit: f64,
    /// Counterparty profit as a percent of its revenue.
    ///
    /// Not finite when counterparty revenue is zero.
    pub counterparty_profit_margin: f64,
}

/// Trait for deal valuation implementations
pub trait ValuationModel: Send + Sync {
    /// Derive metrics from the given inputs
    fn evaluate(&self, inputs: &InputParameters) -> DerivedMetrics;
}
