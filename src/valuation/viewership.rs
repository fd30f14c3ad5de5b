//! Streaming viewership forecast buckets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Forecast bucket for streaming viewership, in millions of viewers.
///
/// Unknown tags resolve to [`ViewershipRange::From50To60`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ViewershipRange {
    From20To30,
    From30To40,
    From40To50,
    #[default]
    From50To60,
    From60To70,
}

impl ViewershipRange {
    /// All buckets, lowest first
    pub const ALL: [ViewershipRange; 5] = [
        ViewershipRange::From20To30,
        ViewershipRange::From30To40,
        ViewershipRange::From40To50,
        ViewershipRange::From50To60,
        ViewershipRange::From60To70,
    ];

    /// Resolve a tag such as `"40-50"`, falling back to `"50-60"`
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "20-30" => ViewershipRange::From20To30,
            "30-40" => ViewershipRange::From30To40,
            "40-50" => ViewershipRange::From40To50,
            "50-60" => ViewershipRange::From50To60,
            "60-70" => ViewershipRange::From60To70,
            other => {
                tracing::debug!(tag = other, "Unknown viewership range, using 50-60");
                ViewershipRange::default()
            }
        }
    }

    /// Tag used in config files and on the command line
    pub fn tag(self) -> &'static str {
        match self {
            ViewershipRange::From20To30 => "20-30",
            ViewershipRange::From30To40 => "30-40",
            ViewershipRange::From40To50 => "40-50",
            ViewershipRange::From50To60 => "50-60",
            ViewershipRange::From60To70 => "60-70",
        }
    }

    /// Lower and upper bound in millions of viewers
    pub fn bounds(self) -> (f64, f64) {
        match self {
            ViewershipRange::From20To30 => (20.0, 30.0),
            ViewershipRange::From30To40 => (30.0, 40.0),
            ViewershipRange::From40To50 => (40.0, 50.0),
            ViewershipRange::From50To60 => (50.0, 60.0),
            ViewershipRange::From60To70 => (60.0, 70.0),
        }
    }

    /// Bucket midpoint in millions of viewers
    pub fn midpoint(self) -> f64 {
        let (low, high) = self.bounds();
        (low + high) / 2.0
    }

    /// Forecast likelihood of this bucket, as a fraction
    pub fn likelihood(self) -> f64 {
        match self {
            ViewershipRange::From50To60 => 0.50,
            ViewershipRange::From60To70 => 0.20,
            _ => 0.10,
        }
    }

    /// Counterparty revenue at this bucket's midpoint
    pub fn counterparty_revenue(self, revenue_per_ten_million: f64) -> f64 {
        self.midpoint() / 10.0 * revenue_per_ten_million
    }
}

/// Likelihood-weighted viewership across all buckets, in millions
pub fn expected_viewership_millions() -> f64 {
    ViewershipRange::ALL
        .iter()
        .map(|r| r.midpoint() * r.likelihood())
        .sum()
}

/// Counterparty revenue at the likelihood-weighted viewership
pub fn expected_counterparty_revenue(revenue_per_ten_million: f64) -> f64 {
    expected_viewership_millions() / 10.0 * revenue_per_ten_million
}

impl From<&str> for ViewershipRange {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<String> for ViewershipRange {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<ViewershipRange> for String {
    fn from(range: ViewershipRange) -> Self {
        range.tag().to_string()
    }
}

impl fmt::Display for ViewershipRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}M", self.tag())
    }
}
