//! Compare command implementation

use clap::Args;

use super::OutputFormat;
use crate::config::Config;
use crate::report::{format_comparison_table, ComparisonRow};
use crate::scenario::ScenarioStore;
use crate::valuation::{InputParameters, ValuationEngine, ValuationModel};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl CompareArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let rows = compare_scenarios(&ScenarioStore::new(), &config.deal);

        for row in rows.iter().filter(|r| r.drift() != 0.0) {
            tracing::warn!(
                scenario = %row.name,
                drift = row.drift(),
                "Stored net revenue differs from re-evaluation"
            );
        }

        match self.format {
            OutputFormat::Table => print!("{}", format_comparison_table(&rows)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        }

        Ok(())
    }
}

/// Re-evaluate every stored scenario with the forecast settings of `current`
pub fn compare_scenarios(store: &ScenarioStore, current: &InputParameters) -> Vec<ComparisonRow> {
    let engine = ValuationEngine::new();

    store
        .list()
        .iter()
        .map(|scenario| {
            let metrics = engine.evaluate(&scenario.load_into(current));
            ComparisonRow {
                name: scenario.name.clone(),
                stored_net_revenue: scenario.outputs.net_revenue,
                net_revenue: metrics.net_revenue,
                net_value_vs_batna: metrics.net_value_vs_batna,
                counterparty_profit_margin: metrics.counterparty_profit_margin,
            }
        })
        .collect()
}
