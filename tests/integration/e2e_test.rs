//! End-to-end integration tests

use deal_valuator::config::Config;
use deal_valuator::report::{format_currency, MetricsReport};
use deal_valuator::session::Session;
use deal_valuator::valuation::ViewershipRange;

#[test]
fn test_config_example_drives_session() {
    let toml = r#"
        [telemetry]
        log_level = "warn"

        [deal]
        license_per_episode = 70000.0
        include_add_on = true
        add_on_price_per_episode = 15000.0
        viewership_range = "50-60"
    "#;

    let config: Config = toml::from_str(toml).unwrap();
    let session = Session::new(config.deal.clone());

    assert_eq!(session.metrics().net_revenue, 7_537_500.0);
    assert_eq!(format_currency(session.metrics().net_value_vs_batna), "$5,037,500");
}

#[test]
fn test_edit_save_load_cycle() {
    let mut session = Session::default();

    session.update(|i| {
        i.license_per_episode = 55_000.0;
        i.contract_length_years = 1;
    });
    let first = session.save("Short and rich").unwrap();

    session.update(|i| {
        i.license_per_episode = 40_000.0;
        i.contract_length_years = 4;
        i.viewership_range = ViewershipRange::From60To70;
    });
    let second = session.save("Long and lean").unwrap();

    assert_eq!(session.scenarios().len(), 4);

    session.load(first).unwrap();
    assert_eq!(session.inputs().license_per_episode, 55_000.0);
    assert_eq!(session.metrics().contract_adjustment, 250_000.0);
    // Forecast settings survive the load
    assert_eq!(session.inputs().viewership_range, ViewershipRange::From60To70);

    session.load(second).unwrap();
    assert_eq!(session.metrics().contract_adjustment, -500_000.0);
}

#[test]
fn test_report_renders_for_session() {
    let session = Session::default();
    let report = MetricsReport::new(session.inputs(), session.metrics(), session.range_hints());

    let table = report.format_table();
    assert!(table.contains("DEAL VALUATION"));
    assert!(table.contains("Current Deal"));
    assert!(table.contains("BATNA"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["metrics"]["base_revenue"], 4_500_000.0);
    assert_eq!(json["inputs"]["viewership_range"], "50-60");
}
