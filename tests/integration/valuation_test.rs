//! Integration tests for the valuation engine

use deal_valuator::valuation::{evaluate, InputParameters, PaymentSchedule, ViewershipRange};

fn with_schedule(license: f64, schedule: PaymentSchedule) -> InputParameters {
    InputParameters {
        license_per_episode: license,
        payment_schedule: schedule,
        ..Default::default()
    }
}

#[test]
fn test_base_revenue_is_linear() {
    for license in [0.0, 1.0, 35_000.0, 45_000.5, 1_000_000.0] {
        let metrics = evaluate(&with_schedule(license, PaymentSchedule::default()));
        assert_eq!(metrics.base_revenue, license * 100.0);
    }
}

#[test]
fn test_upfront_only_has_no_financing_cost() {
    for upfront in [0.0, 50.0, 100.0] {
        let metrics = evaluate(&with_schedule(45_000.0, PaymentSchedule::new(upfront, 0.0, 0.0, 0.0)));
        assert_eq!(metrics.financing_cost, 0.0);
    }
}

#[test]
fn test_financing_rates_per_tranche() {
    let base = 40_000.0 * 100.0;
    let per_point = base / 100.0;

    let cases = [
        (PaymentSchedule::new(0.0, 10.0, 0.0, 0.0), 0.20),
        (PaymentSchedule::new(0.0, 0.0, 10.0, 0.0), 0.35),
        (PaymentSchedule::new(0.0, 0.0, 0.0, 10.0), 0.50),
    ];

    for (schedule, rate) in cases {
        let metrics = evaluate(&with_schedule(40_000.0, schedule));
        let expected = 10.0 * per_point * rate;
        assert!((metrics.financing_cost - expected).abs() < 1e-6);
    }
}

#[test]
fn test_financing_is_monotonic() {
    let mut prev = f64::NEG_INFINITY;
    for eighteen in (0..=10).map(|n| n as f64 * 5.0) {
        let cost = evaluate(&with_schedule(
            50_000.0,
            PaymentSchedule::new(50.0, 0.0, 0.0, eighteen),
        ))
        .financing_cost;
        assert!(cost > prev);
        prev = cost;
    }
}

#[test]
fn test_net_revenue_identity() {
    let schedules = [
        PaymentSchedule::default(),
        PaymentSchedule::new(10.0, 20.0, 30.0, 40.0),
        PaymentSchedule::new(80.0, 0.0, 0.0, 0.0),
    ];

    for years in 0..=5 {
        for schedule in schedules {
            for add_on in [false, true] {
                let inputs = InputParameters {
                    license_per_episode: 61_000.0,
                    contract_length_years: years,
                    payment_schedule: schedule,
                    include_add_on: add_on,
                    add_on_price_per_episode: 12_500.0,
                    ..Default::default()
                };
                let m = evaluate(&inputs);
                assert_eq!(
                    m.net_revenue,
                    m.base_revenue - m.financing_cost + m.contract_adjustment + m.add_on_value
                );
                assert_eq!(m.net_value_vs_batna, m.net_revenue - 2_500_000.0);
            }
        }
    }
}

#[test]
fn test_viewership_buckets() {
    let expected = [
        (ViewershipRange::From20To30, 2_500_000.0),
        (ViewershipRange::From30To40, 3_500_000.0),
        (ViewershipRange::From40To50, 4_500_000.0),
        (ViewershipRange::From50To60, 5_500_000.0),
        (ViewershipRange::From60To70, 6_500_000.0),
    ];

    for (range, revenue) in expected {
        let inputs = InputParameters {
            viewership_range: range,
            revenue_per_ten_million_viewers: 1_000_000.0,
            ..Default::default()
        };
        assert_eq!(evaluate(&inputs).counterparty_revenue, revenue);
    }
}

#[test]
fn test_json_inputs_fill_defaults() {
    let inputs: InputParameters =
        serde_json::from_str(r#"{"license_per_episode": 35000.0, "viewership_range": "??"}"#).unwrap();
    assert_eq!(inputs.viewership_range, ViewershipRange::From50To60);
    assert_eq!(inputs.num_episodes, 100);

    let metrics = evaluate(&inputs);
    assert_eq!(metrics.net_revenue, 3_018_750.0);
}
