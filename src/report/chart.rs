//! Text comparison bars

use serde::Serialize;

use super::format::format_currency;
use crate::valuation::DerivedMetrics;

/// One bar in a comparison chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonBar {
    pub label: &'static str,
    pub value: f64,
    /// Share of the largest value in the chart, clamped to 0..=100
    pub width_pct: f64,
}

/// Scale `items` against the largest value
pub fn comparison_bars(items: &[(&'static str, f64)]) -> Vec<ComparisonBar> {
    let max = items
        .iter()
        .map(|&(_, v)| v)
        .fold(f64::NEG_INFINITY, f64::max);

    items
        .iter()
        .map(|&(label, value)| {
            let width_pct = if max > 0.0 && max.is_finite() {
                (value / max * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            };
            ComparisonBar {
                label,
                value,
                width_pct,
            }
        })
        .collect()
}

/// Current deal against the walk-away alternative
pub fn deal_comparison(metrics: &DerivedMetrics, batna_value: f64) -> Vec<ComparisonBar> {
    comparison_bars(&[("Current Deal", metrics.net_revenue), ("BATNA", batna_value)])
}

/// Licensor revenue against the streamer's projected revenue and profit
pub fn revenue_comparison(metrics: &DerivedMetrics) -> Vec<ComparisonBar> {
    comparison_bars(&[
        ("Your Revenue", metrics.base_revenue),
        ("Streamers Revenue", metrics.counterparty_revenue),
        ("Streamers Profit", metrics.counterparty_profit),
    ])
}

/// Render bars as text, `width` characters at 100%
pub fn render_bars(bars: &[ComparisonBar], width: usize) -> String {
    let label_width = bars.iter().map(|b| b.label.len()).max().unwrap_or(0);

    bars.iter()
        .map(|bar| {
            let filled = (bar.width_pct / 100.0 * width as f64).round() as usize;
            format!(
                "{:<label_width$}  {}{}  {}\n",
                bar.label,
                "█".repeat(filled),
                "░".repeat(width.saturating_sub(filled)),
                format_currency(bar.value),
            )
        })
        .collect()
}
