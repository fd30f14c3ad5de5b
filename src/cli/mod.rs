//! CLI interface for deal-valuator
//!
//! Provides subcommands for:
//! - `evaluate`: Value a deal, optionally saving it as a scenario
//! - `scenarios`: List saved scenarios
//! - `compare`: Re-evaluate saved scenarios side by side
//! - `config`: Show effective configuration

mod compare;
mod evaluate;
mod scenarios;

pub use compare::CompareArgs;
pub use evaluate::EvaluateArgs;
pub use scenarios::ScenariosArgs;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "deal-valuator")]
#[command(about = "Valuation calculator for TV-licensing deal negotiations")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Value a deal from config defaults and overrides
    Evaluate(EvaluateArgs),
    /// List saved scenarios
    Scenarios(ScenariosArgs),
    /// Re-evaluate saved scenarios against current forecast settings
    Compare(CompareArgs),
    /// Show effective configuration
    Config,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
