//! Body-weight adjustment of erg times.

use rowsplit_common::round_tenth;

/// Reference body weight, in pounds, at which the adjustment is neutral.
pub const REFERENCE_WEIGHT: f64 = 270.0;

/// Exponent of the mass scaling.
pub const WEIGHT_EXPONENT: f64 = 0.222;

/// Scales a time or split to the reference body weight.
///
/// `value * (weight / 270) ^ 0.222`, rounded to one decimal place. With no
/// weight the value is returned unchanged.
///
/// ```
/// use rowsplit_records::weight_adjusted;
///
/// assert_eq!(weight_adjusted(112.6, None), 112.6);
/// assert_eq!(weight_adjusted(112.6, Some(270.0)), 112.6);
/// assert!(weight_adjusted(112.6, Some(150.0)) < 112.6);
/// ```
pub fn weight_adjusted(value: f64, weight: Option<f64>) -> f64 {
    match weight {
        None => value,
        Some(weight) => round_tenth(weight_factor(weight) * value),
    }
}

/// The multiplicative factor for a body weight.
pub fn weight_factor(weight: f64) -> f64 {
    (weight / REFERENCE_WEIGHT).powf(WEIGHT_EXPONENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_weight_is_identity() {
        for value in [0.0, 1.23456, 112.6, 431.99] {
            assert_eq!(weight_adjusted(value, None).to_bits(), value.to_bits());
        }
    }

    #[test]
    fn test_known_value() {
        // (150 / 270) ^ 0.222 = 0.8777...
        let adjusted = weight_adjusted(120.0, Some(150.0));
        assert!((adjusted - 105.3).abs() < 1e-9, "got {adjusted}");
    }

    #[test]
    fn test_factor_at_reference_weight() {
        assert!((weight_factor(REFERENCE_WEIGHT) - 1.0).abs() < 1e-12);
    }
}
