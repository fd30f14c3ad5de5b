use clap::Parser;
use deal_valuator::cli::{Cli, Commands};
use deal_valuator::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            toml::from_str(include_str!("../config.toml.example"))?
        }
    };

    // Initialize telemetry
    let _telemetry = deal_valuator::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Evaluate(args) => {
            tracing::info!("Evaluating deal");
            args.execute(&config)?;
        }
        Commands::Scenarios(args) => {
            args.execute()?;
        }
        Commands::Compare(args) => {
            tracing::info!("Comparing saved scenarios");
            args.execute(&config)?;
        }
        Commands::Config => {
            let deal = &config.deal;
            let schedule = &deal.payment_schedule;
            println!("Current configuration:");
            println!(
                "  Logging: {} ({:?})",
                config.telemetry.log_level, config.telemetry.log_format
            );
            println!("  Metrics: {}", config.telemetry.metrics_enabled);
            println!(
                "  License: {} x {} episodes, {} year(s)",
                deal.license_per_episode, deal.num_episodes, deal.contract_length_years
            );
            println!(
                "  Payments: {}/{}/{}/{}",
                schedule.upfront, schedule.six_month, schedule.twelve_month, schedule.eighteen_month
            );
            println!(
                "  Add-on: {} @ {}",
                deal.include_add_on, deal.add_on_price_per_episode
            );
            println!(
                "  Forecast: {} @ {} per 10M viewers",
                deal.viewership_range, deal.revenue_per_ten_million_viewers
            );
            println!("  BATNA: {}", deal.batna_value);
        }
    }

    Ok(())
}
