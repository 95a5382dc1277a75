//! Surface sampler over a three- or four-sided polygon.
//!
//! Parameter `(s, t)` in the unit square maps onto the polygon with the same
//! weights for positions and for texture coordinates:
//!
//! - quads: `lerp(lerp(p0, p1, s), lerp(p3, p2, s), t)`, exact at the corners
//!   `(0,0) (1,0) (1,1) (0,1)`
//! - triangles: `p0 + s (p1 - p0) + t (p2 - p0)`

use std::ops::{Add, Mul};

use crate::core::vec2::{signed_area, Vec2};
use crate::core::vec3::{newell, polygon_area, Vec3};
use crate::error::{Error, Result};
use crate::mesh::PolyId;

/// Capabilities the decal builder and panel operations need from a host
/// surface.
pub trait Surface {
    /// 3 or 4.
    fn vertex_count(&self) -> usize;

    /// World position at parameter `(s, t)`.
    fn evaluate_interior(&self, s: f64, t: f64) -> Vec3;

    /// Unit normal, zero for a degenerate polygon.
    fn compute_normal(&self) -> Vec3;

    /// World-space area.
    fn calc_area(&self) -> f64;

    /// Texture coordinate at `(s, t)`, `None` when the surface carries none.
    fn evaluate_uv(&self, s: f64, t: f64) -> Option<Vec2>;

    /// Texture-space area, `None` when the surface carries no coordinates.
    fn uv_area(&self) -> Option<f64>;
}

/// Snapshot of a mesh polygon's corners, detached from the mesh so the mesh
/// can be mutated while the sampler is in use.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSurface {
    positions: Vec<Vec3>,
    uvs: Option<Vec<Vec2>>,
}

impl PanelSurface {
    /// Creates a sampler over 3 or 4 corners.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedVertexCount`] for any other corner count.
    pub fn new(id: PolyId, positions: Vec<Vec3>, uvs: Option<Vec<Vec2>>) -> Result<Self> {
        if !(3..=4).contains(&positions.len()) {
            return Err(Error::UnsupportedVertexCount {
                polygon: id.0,
                count: positions.len(),
                expected: "3 or 4",
            });
        }
        Ok(Self { positions, uvs })
    }

    /// Corner positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    fn weights(&self, s: f64, t: f64) -> [f64; 4] {
        if self.positions.len() == 4 {
            [(1.0 - s) * (1.0 - t), s * (1.0 - t), s * t, (1.0 - s) * t]
        } else {
            [1.0 - s - t, s, t, 0.0]
        }
    }
}

fn blend<T>(values: &[T], weights: [f64; 4]) -> T
where
    T: Copy + Add<Output = T> + Mul<f64, Output = T>,
{
    values
        .iter()
        .zip(weights)
        .skip(1)
        .fold(values[0] * weights[0], |acc, (&v, w)| acc + v * w)
}

impl Surface for PanelSurface {
    fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn evaluate_interior(&self, s: f64, t: f64) -> Vec3 {
        blend(&self.positions, self.weights(s, t))
    }

    fn compute_normal(&self) -> Vec3 {
        newell(&self.positions).normalize_or_zero()
    }

    fn calc_area(&self) -> f64 {
        polygon_area(&self.positions)
    }

    fn evaluate_uv(&self, s: f64, t: f64) -> Option<Vec2> {
        let weights = self.weights(s, t);
        self.uvs.as_deref().map(|uvs| blend(uvs, weights))
    }

    fn uv_area(&self) -> Option<f64> {
        self.uvs.as_deref().map(|uvs| signed_area(uvs).abs())
    }
}
