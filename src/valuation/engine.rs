//! License deal valuation engine
//!
//! Net revenue = base revenue - financing cost + contract adjustment + add-on.
//! Counterparty revenue is projected from the viewership bucket midpoint.

use super::{DerivedMetrics, InputParameters, ValuationModel};

/// Stateless valuation engine
#[derive(Debug, Clone, Copy, Default)]
pub struct ValuationEngine;

impl ValuationEngine {
    /// Create a new valuation engine
    pub fn new() -> Self {
        Self
    }
}

impl ValuationModel for ValuationEngine {
    fn evaluate(&self, inputs: &InputParameters) -> DerivedMetrics {
        let episodes = f64::from(inputs.num_episodes);

        let base_revenue = inputs.license_per_episode * episodes;
        let financing_cost = inputs.payment_schedule.financing_cost(base_revenue);
        let revenue_after_financing = base_revenue - financing_cost;
        let contract_adjustment = contract_adjustment(inputs.contract_length_years);
        let add_on_value = if inputs.include_add_on {
            inputs.add_on_price_per_episode * episodes
        } else {
            0.0
        };

        let net_revenue = revenue_after_financing + contract_adjustment + add_on_value;
        let net_value_vs_batna = net_revenue - inputs.batna_value;

        let counterparty_revenue = inputs
            .viewership_range
            .counterparty_revenue(inputs.revenue_per_ten_million_viewers);
        let counterparty_profit = counterparty_revenue - base_revenue;
        // Division by zero is left alone; callers render a non-finite margin as N/A
        let counterparty_profit_margin = (counterparty_profit / counterparty_revenue) * 100.0;

        let total_payment_percent = inputs.payment_schedule.total_percent();
        let is_payment_schedule_valid = inputs.payment_schedule.is_valid();

        tracing::debug!(
            base_revenue,
            financing_cost,
            net_revenue,
            net_value_vs_batna,
            counterparty_profit_margin,
            "Evaluated deal"
        );

        DerivedMetrics {
            base_revenue,
            financing_cost,
            revenue_after_financing,
            contract_adjustment,
            add_on_value,
            net_revenue,
            net_value_vs_batna,
            total_payment_percent,
            is_payment_schedule_valid,
            counterparty_revenue,
            counterparty_profit,
            counterparty_profit_margin,
        }
    }
}

/// Fixed revenue adjustment for a contract length.
///
/// Short contracts earn a premium, long ones a discount. Lengths outside
/// 1..=4 get no adjustment.
pub fn contract_adjustment(years: u32) -> f64 {
    match years {
        1 => 250_000.0,
        3 => -250_000.0,
        4 => -500_000.0,
        _ => 0.0,
    }
}

/// Evaluate `inputs` with the default engine
pub fn evaluate(inputs: &InputParameters) -> DerivedMetrics {
    ValuationEngine::new().evaluate(inputs)
}
