//! Scenarios command implementation

use clap::Args;

use super::OutputFormat;
use crate::report::format_scenario_table;
use crate::scenario::ScenarioStore;

#[derive(Args, Debug)]
pub struct ScenariosArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ScenariosArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let store = ScenarioStore::new();

        match self.format {
            OutputFormat::Table => print!("{}", format_scenario_table(store.list())),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(store.list())?),
        }

        Ok(())
    }
}
