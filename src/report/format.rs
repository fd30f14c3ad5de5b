//! Currency and percentage formatting

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Placeholder for values that cannot be shown
pub const NOT_AVAILABLE: &str = "N/A";

/// Format as whole US dollars, e.g. `-$1,234,568`.
///
/// Half-cent values round away from zero. Non-finite values render as `N/A`.
pub fn format_currency(value: f64) -> String {
    let Some((negative, amount)) = whole_units(value) else {
        return NOT_AVAILABLE.to_string();
    };

    let digits = group_thousands(&amount);
    if negative {
        format!("-${digits}")
    } else {
        format!("${digits}")
    }
}

/// Format a percentage with one decimal place, e.g. `18.2%`
pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}%")
    } else {
        NOT_AVAILABLE.to_string()
    }
}

/// Sign and unsigned whole-dollar digits; `None` only for non-finite values
fn whole_units(value: f64) -> Option<(bool, String)> {
    if !value.is_finite() {
        return None;
    }
    match Decimal::from_f64(value) {
        Some(d) => {
            let rounded = d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            let negative = rounded.is_sign_negative() && !rounded.is_zero();
            Some((negative, rounded.abs().to_string()))
        }
        // Beyond Decimal's 96-bit range; rounding is moot at this magnitude
        None => Some((value < 0.0, format!("{:.0}", value.abs().round()))),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1_000.0), "$1,000");
        assert_eq!(format_currency(7_537_500.0), "$7,537,500");
        assert_eq!(format_currency(123_456_789.0), "$123,456,789");
    }

    #[test]
    fn test_currency_rounding() {
        assert_eq!(format_currency(1_234.4), "$1,234");
        assert_eq!(format_currency(1_234.5), "$1,235");
        assert_eq!(format_currency(-1_234.5), "-$1,235");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(format_currency(-250_000.0), "-$250,000");
        assert_eq!(format_currency(-0.2), "$0");
    }

    #[test]
    fn test_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), "N/A");
        assert_eq!(format_currency(f64::INFINITY), "N/A");
    }

    #[test]
    fn test_currency_beyond_decimal_range() {
        let big = format_currency(1e30);
        assert!(big.starts_with("$1,000,000,"), "{big}");
        assert_eq!(big.matches(',').count(), 10);

        let negative = format_currency(-1e30);
        assert!(negative.starts_with("-$1,000,000,"), "{negative}");
    }

    #[test]
    fn test_huge_license_still_formats() {
        let inputs = crate::valuation::InputParameters {
            license_per_episode: 1e27,
            ..Default::default()
        };
        let metrics = crate::valuation::evaluate(&inputs);
        assert!(metrics.net_revenue.is_finite());
        assert_ne!(format_currency(metrics.net_revenue), NOT_AVAILABLE);
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(18.181818), "18.2%");
        assert_eq!(format_percent(-27.3), "-27.3%");
        assert_eq!(format_percent(100.0), "100.0%");
        assert_eq!(format_percent(f64::NAN), "N/A");
        assert_eq!(format_percent(f64::NEG_INFINITY), "N/A");
    }
}
