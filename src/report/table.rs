//! Text tables for CLI output

use serde::Serialize;

use super::chart::{deal_comparison, render_bars, revenue_comparison};
use super::format::{format_currency, format_percent};
use crate::scenario::Scenario;
use crate::valuation::{expected_counterparty_revenue, DerivedMetrics, InputParameters, RangeHint};

const BAR_WIDTH: usize = 30;

/// Full valuation report for one set of deal terms
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport<'a> {
    pub inputs: &'a InputParameters,
    pub metrics: &'a DerivedMetrics,
    pub hints: Vec<RangeHint>,
}

impl<'a> MetricsReport<'a> {
    /// Build a report for the given inputs and their metrics
    pub fn new(inputs: &'a InputParameters, metrics: &'a DerivedMetrics, hints: Vec<RangeHint>) -> Self {
        Self {
            inputs,
            metrics,
            hints,
        }
    }

    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        let m = self.metrics;
        let i = self.inputs;

        let schedule_note = if m.is_payment_schedule_valid {
            String::new()
        } else {
            format!("  (total {}, must equal 100%)", format_percent(m.total_payment_percent))
        };

        let distribution: String = i
            .payment_schedule
            .distribution()
            .iter()
            .map(|(tranche, pct)| format!("{:<18}{pct}%\n", format!("{}:", tranche.label())))
            .collect();

        let hints: String = self.hints.iter().map(|h| format!("! {h}\n")).collect();

        format!(
            r#"
══════════════════════════════════════════════════════
               DEAL VALUATION
══════════════════════════════════════════════════════

TERMS
───────────────────────────────────────────────────────
License/Episode:  {}
Episodes:         {}
Contract Length:  {} year(s)
Add-on:           {}
{hints}
REVENUE
───────────────────────────────────────────────────────
Base Revenue:     {}
Financing Cost:   {}
After Financing:  {}
Contract Adj.:    {}
Add-on Value:     {}
Net Revenue:      {}
vs. BATNA ({}): {}

PAYMENT DISTRIBUTION{schedule_note}
───────────────────────────────────────────────────────
{distribution}
STREAMER FORECAST ({})
───────────────────────────────────────────────────────
Revenue:          {}
Profit:           {}
Profit Margin:    {}
Weighted Revenue: {}

COMPARISON
───────────────────────────────────────────────────────
{}
{}══════════════════════════════════════════════════════
"#,
            format_currency(i.license_per_episode),
            i.num_episodes,
            i.contract_length_years,
            if i.include_add_on {
                format!("Yes @ {}/episode", format_currency(i.add_on_price_per_episode))
            } else {
                "No".to_string()
            },
            format_currency(m.base_revenue),
            format_currency(m.financing_cost),
            format_currency(m.revenue_after_financing),
            format_currency(m.contract_adjustment),
            format_currency(m.add_on_value),
            format_currency(m.net_revenue),
            format_currency(i.batna_value),
            format_currency(m.net_value_vs_batna),
            i.viewership_range,
            format_currency(m.counterparty_revenue),
            format_currency(m.counterparty_profit),
            format_percent(m.counterparty_profit_margin),
            format_currency(expected_counterparty_revenue(i.revenue_per_ten_million_viewers)),
            render_bars(&deal_comparison(m, i.batna_value), BAR_WIDTH),
            render_bars(&revenue_comparison(m), BAR_WIDTH),
        )
    }
}

/// Format saved scenarios as a table
pub fn format_scenario_table(scenarios: &[Scenario]) -> String {
    let mut out = format!(
        "{:<3} {:<20} {:>10} {:>5} {:<14} {:<6} {:>14} {:>14}\n",
        "#", "Scenario", "License", "Years", "Payments", "Add-on", "Net Revenue", "vs BATNA"
    );

    for (index, s) in scenarios.iter().enumerate() {
        let p = &s.inputs.payment_schedule;
        out.push_str(&format!(
            "{:<3} {:<20} {:>10} {:>5} {:<14} {:<6} {:>14} {:>14}\n",
            index,
            s.name,
            format_currency(s.inputs.license_per_episode),
            s.inputs.contract_length_years,
            format!(
                "{}/{}/{}/{}",
                p.upfront, p.six_month, p.twelve_month, p.eighteen_month
            ),
            if s.inputs.include_add_on { "Yes" } else { "No" },
            format_currency(s.outputs.net_revenue),
            format_currency(s.outputs.net_value_vs_batna),
        ));
    }

    out
}

/// A stored scenario next to its re-evaluated result
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub name: String,
    pub stored_net_revenue: f64,
    pub net_revenue: f64,
    pub net_value_vs_batna: f64,
    pub counterparty_profit_margin: f64,
}

impl ComparisonRow {
    /// Difference between the recomputed and stored net revenue
    pub fn drift(&self) -> f64 {
        self.net_revenue - self.stored_net_revenue
    }
}

/// Format side-by-side scenario comparison
pub fn format_comparison_table(rows: &[ComparisonRow]) -> String {
    let mut out = format!(
        "{:<20} {:>14} {:>14} {:>10} {:>14} {:>10}\n",
        "Scenario", "Stored", "Net Revenue", "Drift", "vs BATNA", "Margin"
    );

    for row in rows {
        out.push_str(&format!(
            "{:<20} {:>14} {:>14} {:>10} {:>14} {:>10}\n",
            row.name,
            format_currency(row.stored_net_revenue),
            format_currency(row.net_revenue),
            format_currency(row.drift()),
            format_currency(row.net_value_vs_batna),
            format_percent(row.counterparty_profit_margin),
        ));
    }

    out
}
