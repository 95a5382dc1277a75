//! Thin wrapper around `glam::DVec3` for world-space positions.
//!
//! The helpers keep polygon normal and area math in one place.

pub use glam::DVec3 as Vec3;

/// Unnormalized polygon normal by Newell's method.
///
/// The length of the result is twice the polygon's area, which makes the
/// method robust for slightly non-planar quads.
///
/// # Examples
/// ```
/// use hreeble::core::vec3::{newell, Vec3};
/// let tri = [Vec3::ZERO, Vec3::X, Vec3::Y];
/// assert_eq!(newell(&tri), Vec3::new(0.0, 0.0, 1.0));
/// ```
pub fn newell(points: &[Vec3]) -> Vec3 {
    let n = points.len();
    let mut normal = Vec3::ZERO;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }
    normal
}

/// Area of a planar-ish polygon.
pub fn polygon_area(points: &[Vec3]) -> f64 {
    newell(points).length() * 0.5
}

#[cfg(test)]
mod tests;
