//! Numeric helpers shared by the scoring modules.

/// Rounds `value` to `decimals` decimal places.
///
/// Rounding is done on the exact decimal expansion of the binary value, so a
/// number stored as `0.72499...` (the `f64` nearest to `0.725`) rounds down to
/// `0.72`. Scaling by a power of ten first would round it up instead.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Shorthand for [`round_to`] with two decimal places.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Divides `numerator` by `denominator`, returning `0.0` for a zero or
/// non-finite denominator.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() {
        0.0
    } else {
        numerator / denominator
    }
}

/// Checks if two values are almost equal.
pub fn almost_equal(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}
