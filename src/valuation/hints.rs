//! Advisory range hints for deal inputs
//!
//! Hints never block evaluation. They tell a front end which inputs sit
//! outside the ranges the negotiation brief considers sensible.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;

use super::financing::Tranche;
use super::{InputParameters, BATNA_VALUE, NUM_EPISODES};

/// Lowest streamer revenue per 10M viewers in the brief
pub const MIN_REVENUE_RATE: f64 = 500_000.0;
/// Highest streamer revenue per 10M viewers in the brief
pub const MAX_REVENUE_RATE: f64 = 1_500_000.0;
/// Revenue rate increments
const REVENUE_RATE_STEP: Decimal = dec!(100000);

/// An input outside its suggested range
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RangeHint {
    /// A money amount below zero
    Negative { field: &'static str, value: f64 },
    /// A tranche percentage outside 0..=100
    PercentOutOfRange { tranche: Tranche, value: f64 },
    /// Contract length with no adjustment entry
    UnknownContractLength { years: u32 },
    /// Revenue rate outside the forecast band
    RevenueRateOutOfRange { value: f64 },
    /// Revenue rate not on a 100,000 step
    RevenueRateOffStep { value: f64 },
    /// Episode count differs from the season being licensed
    EpisodeCountChanged { episodes: u32 },
    /// Walk-away value differs from the negotiated BATNA
    BatnaChanged { value: f64 },
}

impl fmt::Display for RangeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeHint::Negative { field, value } => {
                write!(f, "{field} should not be negative (got {value})")
            }
            RangeHint::PercentOutOfRange { tranche, value } => {
                write!(f, "{} share should be between 0 and 100 (got {value})", tranche.label())
            }
            RangeHint::UnknownContractLength { years } => {
                write!(f, "contract length should be 1 to 4 years (got {years})")
            }
            RangeHint::RevenueRateOutOfRange { value } => write!(
                f,
                "revenue per 10M viewers should be between {MIN_REVENUE_RATE} and {MAX_REVENUE_RATE} (got {value})"
            ),
            RangeHint::RevenueRateOffStep { value } => {
                write!(f, "revenue per 10M viewers moves in steps of 100000 (got {value})")
            }
            RangeHint::EpisodeCountChanged { episodes } => {
                write!(f, "episode count is fixed at {NUM_EPISODES} (got {episodes})")
            }
            RangeHint::BatnaChanged { value } => {
                write!(f, "BATNA is fixed at {BATNA_VALUE} (got {value})")
            }
        }
    }
}

/// Collect every range hint for `inputs`, in field order
pub fn range_hints(inputs: &InputParameters) -> Vec<RangeHint> {
    let mut hints = Vec::new();

    if inputs.license_per_episode < 0.0 {
        hints.push(RangeHint::Negative {
            field: "license_per_episode",
            value: inputs.license_per_episode,
        });
    }

    if inputs.num_episodes != NUM_EPISODES {
        hints.push(RangeHint::EpisodeCountChanged {
            episodes: inputs.num_episodes,
        });
    }

    if !(1..=4).contains(&inputs.contract_length_years) {
        hints.push(RangeHint::UnknownContractLength {
            years: inputs.contract_length_years,
        });
    }

    for tranche in Tranche::ALL {
        let value = inputs.payment_schedule.percent(tranche);
        if !(0.0..=100.0).contains(&value) {
            hints.push(RangeHint::PercentOutOfRange { tranche, value });
        }
    }

    if inputs.add_on_price_per_episode < 0.0 {
        hints.push(RangeHint::Negative {
            field: "add_on_price_per_episode",
            value: inputs.add_on_price_per_episode,
        });
    }

    if inputs.batna_value != BATNA_VALUE {
        hints.push(RangeHint::BatnaChanged {
            value: inputs.batna_value,
        });
    }

    let rate = inputs.revenue_per_ten_million_viewers;
    if !(MIN_REVENUE_RATE..=MAX_REVENUE_RATE).contains(&rate) {
        hints.push(RangeHint::RevenueRateOutOfRange { value: rate });
    } else if !on_step(rate) {
        hints.push(RangeHint::RevenueRateOffStep { value: rate });
    }

    hints
}

fn on_step(rate: f64) -> bool {
    Decimal::from_f64(rate)
        .map(|d| (d % REVENUE_RATE_STEP).is_zero())
        .unwrap_or(false)
}
