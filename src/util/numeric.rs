//! Rounding rules used by the search engine and the display layer.
//!
//! Every place that rounds or truncates a measurement goes through this
//! module so the rules stay consistent:
//!
//! - Search inputs and reported deltas round the exact decimal value of the
//!   float at a fixed number of places ([`round_to`]), so `2.45` (stored as
//!   `2.4500000000000002`) rounds up and `0.15` (stored as
//!   `0.1499999999999999`) rounds down. Exact ties go to even.
//! - Sales model suffixes truncate `height * 10` toward zero
//!   ([`height_code`]), so `2.05 m` becomes `20`, not `21`.

/// Round `value` to `places` decimal places.
///
/// Rounding happens on the exact binary value rather than on `value * 10^places`,
/// which would pick up a second rounding error from the multiplication.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Round a diameter or height input to the precision used for matching.
pub fn round_dimension(value: f64) -> f64 {
    round_to(value, 1)
}

/// Height expressed in decimetres, truncated toward zero.
pub fn height_code(height: f64) -> i64 {
    (height * 10.0).trunc() as i64
}

/// Whether `value` lies within `tolerance` of `target` (inclusive).
pub fn within(value: f64, target: f64, tolerance: f64) -> bool {
    (value - target).abs() <= tolerance
}
