//! Decal Builder: maps a placed decal onto a panel and extrudes it.
//!
//! Each part with `N` points gets a contiguous block of `2N` mesh points,
//! interleaved as `base_0, top_0, base_1, top_1, ...`. Walls follow the same
//! winding as panel extrusion, `[base_i, base_{i+1}, top_{i+1}, top_i]`, and
//! the cap is the ring of top points in part order.
//!
//! ## Texture coordinates
//!
//! When the panel carries texture coordinates, base corners sample them with
//! the surface weights. The top pair of every wall is pushed away from the
//! panel's uv center by
//!
//! ```text
//! offset = (wall_area * panel_uv_area / panel_area) / edge_length
//! ```
//!
//! so the wall gets a uv strip whose area keeps the panel's texel density.

use ::config::constants::{DEGENERATE_EDGE_LENGTH, EPSILON};

use super::Decal;
use crate::core::vec2::Vec2;
use crate::core::vec3::Vec3;
use crate::error::Result;
use crate::mesh::{Mesh, PanelSurface, PointId, PolyId, Surface};

/// Polygons emitted by [`Decal::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecalPolygons {
    /// Wall quads of every part, part by part.
    pub walls: Vec<PolyId>,
    /// One cap per part.
    pub caps: Vec<PolyId>,
}

impl DecalPolygons {
    /// Walls and caps together.
    pub fn len(&self) -> usize {
        self.walls.len() + self.caps.len()
    }

    /// True when nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty() && self.caps.is_empty()
    }
}

/// Panel-wide values the uv correction needs, computed once per build.
struct UvFrame {
    center: Vec2,
    /// `panel_uv_area / panel_area`.
    density: f64,
}

impl UvFrame {
    fn new(surface: &PanelSurface) -> Option<Self> {
        let uv_area = surface.uv_area()?;
        let center = surface.evaluate_uv(0.5, 0.5)?;
        let area = surface.calc_area();
        if area < EPSILON {
            return None;
        }
        Some(Self {
            center,
            density: uv_area / area,
        })
    }

    /// Offset of a wall's top uvs relative to its base uvs.
    fn wall_shift(&self, edge: (Vec3, Vec3), rise: Vec3, uv: (Vec2, Vec2)) -> Vec2 {
        let edge_3d = edge.1 - edge.0;
        let edge_length = edge_3d.length();
        let edge_uv = uv.1 - uv.0;
        if edge_length < DEGENERATE_EDGE_LENGTH || edge_uv.length_squared() < EPSILON {
            return Vec2::ZERO;
        }
        let wall_area = edge_3d.cross(rise).length();
        let offset = wall_area * self.density / edge_length;

        let along = (self.center - uv.0).dot(edge_uv) / edge_uv.length_squared();
        let foot = uv.0 + edge_uv * along;
        (foot - self.center).normalize_or_zero() * offset
    }
}

impl Decal {
    /// Emits the decal's 3D geometry on `panel` and consumes the decal.
    ///
    /// Points are evaluated on the panel surface at the decal's parameter
    /// coordinates and raised by `normal * height`. Walls join the elements
    /// group; caps join both the elements and elements_front groups, when the
    /// decal has them.
    ///
    /// # Errors
    ///
    /// Fails when `panel` is not a live tri/quad polygon or a group handle is
    /// stale.
    pub fn build(
        self,
        mesh: &mut Mesh,
        panel: PolyId,
        normal: Vec3,
        height: f64,
    ) -> Result<DecalPolygons> {
        let surface = mesh.surface(panel)?;
        let uv_frame = UvFrame::new(&surface);
        let rise = normal * height;
        let mut out = DecalPolygons::default();

        for part in &self.parts {
            let coords = part.points();
            let n = coords.len();
            let first = mesh.append_point_block(n * 2);
            let base = |i: usize| first.offset(2 * i);
            let top = |i: usize| first.offset(2 * i + 1);

            let mut base_positions = Vec::with_capacity(n);
            for (i, c) in coords.iter().enumerate() {
                let p = surface.evaluate_interior(c.x, c.y);
                mesh.set_position(base(i), p)?;
                mesh.set_position(top(i), p + rise)?;
                base_positions.push(p);
            }
            let base_uvs: Option<Vec<Vec2>> = coords
                .iter()
                .map(|c| surface.evaluate_uv(c.x, c.y))
                .collect();

            for i in 0..n {
                let j = (i + 1) % n;
                let wall_uvs = match (&uv_frame, &base_uvs) {
                    (Some(frame), Some(uvs)) => {
                        let shift = frame.wall_shift(
                            (base_positions[i], base_positions[j]),
                            rise,
                            (uvs[i], uvs[j]),
                        );
                        Some([uvs[i], uvs[j], uvs[j] + shift, uvs[i] + shift])
                    }
                    (None, Some(uvs)) => Some([uvs[i], uvs[j], uvs[j], uvs[i]]),
                    _ => None,
                };
                let wall = mesh.build_polygon(
                    &[base(i), base(j), top(j), top(i)],
                    wall_uvs.as_ref().map(|w| &w[..]),
                )?;
                if let Some(group) = self.groups.elements {
                    mesh.add_to_group(group, wall)?;
                }
                out.walls.push(wall);
            }

            let ring: Vec<PointId> = (0..n).map(top).collect();
            let cap = mesh.build_polygon(&ring, base_uvs.as_deref())?;
            if let Some(group) = self.groups.elements {
                mesh.add_to_group(group, cap)?;
            }
            if let Some(group) = self.groups.elements_front {
                mesh.add_to_group(group, cap)?;
            }
            out.caps.push(cap);
        }

        log::trace!(
            "built {:?} decal on polygon {}: {} walls, {} caps",
            self.kind,
            panel.0,
            out.walls.len(),
            out.caps.len()
        );
        Ok(out)
    }
}
