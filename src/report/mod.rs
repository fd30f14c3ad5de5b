//! Reporting module
//!
//! The single display format: whole-dollar USD amounts, one-decimal
//! percentages, text comparison bars and tables.

mod chart;
mod format;
mod table;

pub use chart::{comparison_bars, deal_comparison, render_bars, revenue_comparison, ComparisonBar};
pub use format::{format_currency, format_percent, NOT_AVAILABLE};
pub use table::{format_comparison_table, format_scenario_table, ComparisonRow, MetricsReport};
