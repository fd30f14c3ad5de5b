//! Payment schedule and financing cost
//!
//! Deferred tranches carry an opportunity-cost penalty proportional to the
//! share of base revenue they defer. Upfront money is free.

use serde::{Deserialize, Serialize};

/// Penalty rate for the six-month tranche
pub const SIX_MONTH_RATE: f64 = 0.20;
/// Penalty rate for the twelve-month tranche
pub const TWELVE_MONTH_RATE: f64 = 0.35;
/// Penalty rate for the eighteen-month tranche
pub const EIGHTEEN_MONTH_RATE: f64 = 0.50;

/// A payment tranche, keyed by when the money arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tranche {
    Upfront,
    SixMonth,
    TwelveMonth,
    EighteenMonth,
}

impl Tranche {
    /// All tranches in payment order
    pub const ALL: [Tranche; 4] = [
        Tranche::Upfront,
        Tranche::SixMonth,
        Tranche::TwelveMonth,
        Tranche::EighteenMonth,
    ];

    /// Opportunity-cost rate applied to the deferred share
    pub fn penalty_rate(self) -> f64 {
        match self {
            Tranche::Upfront => 0.0,
            Tranche::SixMonth => SIX_MONTH_RATE,
            Tranche::TwelveMonth => TWELVE_MONTH_RATE,
            Tranche::EighteenMonth => EIGHTEEN_MONTH_RATE,
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Tranche::Upfront => "Upfront",
            Tranche::SixMonth => "6 Months",
            Tranche::TwelveMonth => "12 Months",
            Tranche::EighteenMonth => "18 Months",
        }
    }
}

/// Percent of the license fee paid in each tranche.
///
/// The percentages are expected to sum to 100 but nothing enforces it;
/// [`PaymentSchedule::is_valid`] reports the advisory check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentSchedule {
    pub upfront: f64,
    pub six_month: f64,
    pub twelve_month: f64,
    pub eighteen_month: f64,
}

impl PaymentSchedule {
    /// Create a schedule from the four tranche percentages
    pub fn new(upfront: f64, six_month: f64, twelve_month: f64, eighteen_month: f64) -> Self {
        Self {
            upfront,
            six_month,
            twelve_month,
            eighteen_month,
        }
    }

    /// Percentage assigned to a tranche
    pub fn percent(&self, tranche: Tranche) -> f64 {
        match tranche {
            Tranche::Upfront => self.upfront,
            Tranche::SixMonth => self.six_month,
            Tranche::TwelveMonth => self.twelve_month,
            Tranche::EighteenMonth => self.eighteen_month,
        }
    }

    /// Sum of all tranche percentages
    pub fn total_percent(&self) -> f64 {
        self.upfront + self.six_month + self.twelve_month + self.eighteen_month
    }

    /// Exact check that the schedule covers 100% of the fee
    pub fn is_valid(&self) -> bool {
        self.total_percent() == 100.0
    }

    /// Opportunity cost of the deferred tranches against `base_revenue`
    pub fn financing_cost(&self, base_revenue: f64) -> f64 {
        Tranche::ALL
            .iter()
            .map(|&t| (self.percent(t) / 100.0) * base_revenue * t.penalty_rate())
            .sum()
    }

    /// Non-zero tranches in payment order
    pub fn distribution(&self) -> Vec<(Tranche, f64)> {
        Tranche::ALL
            .iter()
            .map(|&t| (t, self.percent(t)))
            .filter(|&(_, pct)| pct > 0.0)
            .collect()
    }
}

impl Default for PaymentSchedule {
    fn default() -> Self {
        Self::new(50.0, 25.0, 25.0, 0.0)
    }
}
