//! Evaluate command implementation

use clap::Args;

use super::OutputFormat;
use crate::config::Config;
use crate::report::{format_scenario_table, MetricsReport};
use crate::session::Session;
use crate::valuation::{InputParameters, ViewershipRange};

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// License fee per episode
    #[arg(long)]
    pub license: Option<f64>,

    /// Contract length in years (1-4)
    #[arg(long)]
    pub contract_years: Option<u32>,

    /// Percent paid upfront
    #[arg(long)]
    pub upfront: Option<f64>,

    /// Percent paid after 6 months
    #[arg(long)]
    pub six_month: Option<f64>,

    /// Percent paid after 12 months
    #[arg(long)]
    pub twelve_month: Option<f64>,

    /// Percent paid after 18 months
    #[arg(long)]
    pub eighteen_month: Option<f64>,

    /// Include the add-on at this price per episode
    #[arg(long, conflicts_with = "no_add_on")]
    pub add_on_price: Option<f64>,

    /// Exclude the add-on
    #[arg(long)]
    pub no_add_on: bool,

    /// Viewership forecast bucket (20-30, 30-40, 40-50, 50-60, 60-70)
    #[arg(long)]
    pub viewership: Option<String>,

    /// Streamer revenue per 10M viewers
    #[arg(long)]
    pub revenue_rate: Option<f64>,

    /// Save the evaluated deal as a scenario with this name
    #[arg(long)]
    pub save: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl EvaluateArgs {
    /// Layer command-line overrides onto `base`
    pub fn apply(&self, base: InputParameters) -> InputParameters {
        let mut inputs = base;

        if let Some(license) = self.license {
            inputs.license_per_episode = license;
        }
        if let Some(years) = self.contract_years {
            inputs.contract_length_years = years;
        }

        let schedule = &mut inputs.payment_schedule;
        if let Some(p) = self.upfront {
            schedule.upfront = p;
        }
        if let Some(p) = self.six_month {
            schedule.six_month = p;
        }
        if let Some(p) = self.twelve_month {
            schedule.twelve_month = p;
        }
        if let Some(p) = self.eighteen_month {
            schedule.eighteen_month = p;
        }

        if let Some(price) = self.add_on_price {
            inputs.include_add_on = true;
            inputs.add_on_price_per_episode = price;
        }
        if self.no_add_on {
            inputs.include_add_on = false;
        }

        if let Some(tag) = &self.viewership {
            inputs.viewership_range = ViewershipRange::from_tag(tag);
        }
        if let Some(rate) = self.revenue_rate {
            inputs.revenue_per_ten_million_viewers = rate;
        }

        inputs
    }

    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut session = Session::new(self.apply(config.deal.clone()));
        tracing::info!(
            net_revenue = session.metrics().net_revenue,
            "Evaluated deal"
        );

        let saved = match &self.save {
            Some(name) => match session.save(name) {
                Ok(_) => true,
                Err(e) => {
                    eprintln!("Scenario not saved: {}", e);
                    false
                }
            },
            None => false,
        };

        let report = MetricsReport::new(session.inputs(), session.metrics(), session.range_hints());

        match self.format {
            OutputFormat::Table => {
                print!("{}", report.format_table());
                if saved {
                    println!("{}", format_scenario_table(session.scenarios()));
                }
            }
            OutputFormat::Json => {
                let scenarios = saved.then(|| session.scenarios());
                let output = serde_json::json!({
                    "report": report,
                    "scenarios": scenarios,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }

        Ok(())
    }
}
