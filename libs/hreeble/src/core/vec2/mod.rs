//! 2D vector definitions for parameter-space (s, t) coordinates.
//!
//! Provides a type alias for `glam::DVec2` and the unit-square helpers used by
//! decal placement.

pub use glam::DVec2 as Vec2;

/// Linearly maps `unit` from `[0, 1]` onto `[lo, hi]`.
///
/// Values outside `[0, 1]` extrapolate; nothing is clamped.
///
/// # Examples
/// ```
/// use hreeble::core::vec2::fit01;
/// assert_eq!(fit01(0.5, 2.0, 4.0), 3.0);
/// assert_eq!(fit01(0.25, 0.0, 0.5), 0.125);
/// ```
#[inline]
pub fn fit01(unit: f64, lo: f64, hi: f64) -> f64 {
    lo + unit * (hi - lo)
}

/// True when `value` lies outside the closed unit interval.
#[inline]
pub fn outside_unit(value: f64) -> bool {
    !(0.0..=1.0).contains(&value)
}

/// Signed area of a closed polyline by the shoelace formula.
///
/// Counter-clockwise loops are positive.
///
/// # Examples
/// ```
/// use hreeble::core::vec2::{signed_area, Vec2};
/// let square = [
///     Vec2::new(0.0, 0.0),
///     Vec2::new(1.0, 0.0),
///     Vec2::new(1.0, 1.0),
///     Vec2::new(0.0, 1.0),
/// ];
/// assert_eq!(signed_area(&square), 1.0);
/// ```
pub fn signed_area(points: &[Vec2]) -> f64 {
    let n = points.len();
    let twice: f64 = (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum();
    twice * 0.5
}
