//! Integration tests for the scenario store

use deal_valuator::scenario::{ScenarioError, ScenarioStore};
use deal_valuator::valuation::{evaluate, InputParameters, PaymentSchedule, ViewershipRange};

#[test]
fn test_seeded_fixture_values() {
    let store = ScenarioStore::new();

    let minimum = store.get(0).unwrap();
    assert_eq!(minimum.name, "Minimum Deal");
    assert_eq!(minimum.inputs.license_per_episode, 35_000.0);
    assert_eq!(minimum.outputs.net_revenue, 3_025_000.0);
    assert_eq!(minimum.outputs.net_value_vs_batna, 525_000.0);

    let target = store.get(1).unwrap();
    assert_eq!(target.name, "Target Deal");
    assert!(target.inputs.include_add_on);
    assert_eq!(target.outputs.net_revenue, 7_537_500.0);
    assert_eq!(target.outputs.net_value_vs_batna, 5_037_500.0);
}

#[test]
fn test_roundtrip_through_store() {
    let mut store = ScenarioStore::new();
    let inputs = InputParameters {
        license_per_episode: 47_500.0,
        contract_length_years: 3,
        payment_schedule: PaymentSchedule::new(25.0, 25.0, 25.0, 25.0),
        include_add_on: true,
        add_on_price_per_episode: 11_000.0,
        viewership_range: ViewershipRange::From40To50,
        revenue_per_ten_million_viewers: 900_000.0,
        ..Default::default()
    };
    let metrics = evaluate(&inputs);

    let index = store.append("Even split", &inputs, &metrics).unwrap();
    let scenario = store.get(index).unwrap();
    assert_eq!(scenario.outputs.net_revenue, metrics.net_revenue);

    // Forecast fields come from the caller's current inputs
    assert_eq!(scenario.load_into(&inputs), inputs);

    let other = InputParameters::default();
    let loaded = scenario.load_into(&other);
    assert_eq!(loaded.viewership_range, other.viewership_range);
    assert_eq!(loaded.payment_schedule, inputs.payment_schedule);
}

#[test]
fn test_empty_name_and_missing_index() {
    let mut store = ScenarioStore::new();
    let inputs = InputParameters::default();
    let metrics = evaluate(&inputs);

    let before = store.len();
    assert_eq!(store.append("", &inputs, &metrics), Err(ScenarioError::EmptyName));
    assert_eq!(store.len(), before);

    let err = store.get(before).unwrap_err();
    assert_eq!(err, ScenarioError::NotFound { index: before, len: before });
}

#[test]
fn test_stored_scenarios_are_snapshots() {
    let mut store = ScenarioStore::empty();
    let mut inputs = InputParameters::default();
    store.append("snapshot", &inputs, &evaluate(&inputs)).unwrap();

    inputs.license_per_episode = 1.0;
    assert_eq!(store.get(0).unwrap().inputs.license_per_episode, 45_000.0);
}
