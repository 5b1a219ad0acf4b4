use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};

/// Rounds to two decimal places, ties away from zero.
///
/// Works on the shortest decimal text of `v`, so a stored `12.345` rounds to
/// `12.35` even though its binary value sits just below the tie.
pub fn round2(v: f64) -> f64 {
    match fixed2(v) {
        Some(s) => s.parse().unwrap_or(v),
        None => v,
    }
}

/// Renders a percentage ratio as `"12.35%"`. Always two decimals.
pub fn percent_string(v: f64) -> String {
    match fixed2(v) {
        Some(s) => format!("{s}%"),
        None => format!("{v}%"),
    }
}

/// `v` rounded to scale 2 and written out with exactly two fraction digits.
///
/// `BigDecimal`'s `Display` drops the scale of a zero, so the digits are laid
/// out by hand from the unscaled integer.
fn fixed2(v: f64) -> Option<String> {
    if !v.is_finite() {
        return None;
    }
    let rounded = BigDecimal::from_str(&v.to_string())
        .ok()?
        .with_scale_round(2, RoundingMode::HalfUp);
    let (unscaled, _) = rounded.into_bigint_and_exponent();
    let unscaled = unscaled.to_string();
    let (sign, digits) = match unscaled.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", unscaled.as_str()),
    };
    let digits = format!("{digits:0>3}");
    let (whole, frac) = digits.split_at(digits.len() - 2);
    Some(format!("{sign}{whole}.{frac}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_rounds_half_up() {
        assert_eq!(round2(12.345), 12.35);
        assert_eq!(round2(2.675), 2.68);
        assert_eq!(round2(1.004), 1.0);
        assert_eq!(round2(-1.005), -1.01);
        assert_eq!(round2(7.0), 7.0);
    }

    #[test]
    fn round2_keeps_large_volumes() {
        assert_eq!(round2(12_345_678.9051), 12_345_678.91);
    }

    #[test]
    fn percent_string_pins_two_decimals() {
        assert_eq!(percent_string(12.345), "12.35%");
        assert_eq!(percent_string(12.0), "12.00%");
        assert_eq!(percent_string(-3.1), "-3.10%");
        assert_eq!(percent_string(0.0), "0.00%");
    }

    #[test]
    fn near_zero_percentages_keep_two_decimals() {
        assert_eq!(percent_string(-0.001), "0.00%");
        assert_eq!(percent_string(1e-9), "0.00%");
        assert_eq!(percent_string(0.004), "0.00%");
        assert_eq!(percent_string(0.005), "0.01%");
        assert_eq!(percent_string(-0.05), "-0.05%");
        assert_eq!(round2(-0.001), 0.0);
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(percent_string(f64::INFINITY), "inf%");
    }
}
