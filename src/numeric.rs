//! Numeric rules for stat values.
//!
//! Catalog numbers are plain `f64`. Two rounding rules apply: enchanted
//! Min/Max values round to the nearest integer with halves going up, and
//! power numbers round to a fixed number of decimals for display.

/// Numeric type for all catalog and resolved stat values.
pub type StatValue = f64;

/// Round to the nearest integer, halves toward positive infinity.
///
/// This differs from [`f64::round`] only for negative halves:
/// `-2.5` rounds to `-2.0` here.
///
/// # Examples
///
/// ```rust
/// use codex_stats::numeric::round_half_up;
///
/// assert_eq!(round_half_up(110.00000000000001), 110.0);
/// assert_eq!(round_half_up(2.5), 3.0);
/// assert_eq!(round_half_up(-2.5), -2.0);
/// ```
pub fn round_half_up(value: StatValue) -> StatValue {
    (value + 0.5).floor()
}

/// Round to `decimals` places (half away from zero).
///
/// # Examples
///
/// ```rust
/// use codex_stats::numeric::round_to_places;
///
/// assert_eq!(round_to_places(0.7, 2), 0.7);
/// assert_eq!(round_to_places(1.23456, 2), 1.23);
/// assert_eq!(round_to_places(0.125, 1), 0.1);
/// ```
pub fn round_to_places(value: StatValue, decimals: u32) -> StatValue {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
