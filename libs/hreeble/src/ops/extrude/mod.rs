//! Inset extrusion of a panel.
//!
//! The panel is pushed out along its normal by `height`. Each top corner is
//! pulled toward the raised center by `inset`, so walls lean inward:
//!
//! ```text
//!        top_i ---------- top_{i+1}
//!       /                         \
//!   base_i ------------------ base_{i+1}
//! ```

use crate::core::vec2::Vec2;
use crate::error::Result;
use crate::mesh::{Mesh, PointId, PolyId, Surface};

/// Polygons produced by [`extrude`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extrusion {
    /// The raised top face; decals are placed on it.
    pub cap: PolyId,
    /// One wall per panel edge, in edge order.
    pub walls: Vec<PolyId>,
}

/// Extrudes `panel` by `height` with an inset toward its center.
///
/// Walls are `[base_i, base_{i+1}, top_{i+1}, top_i]` and reuse the panel's
/// corner uvs; the cap carries the corner uvs unchanged. The panel is queued
/// for deletion.
///
/// # Errors
///
/// - [`crate::Error::UnsupportedVertexCount`] unless the panel has 3 or 4 corners
/// - [`crate::Error::PendingDeletion`] if the panel is already queued
pub fn extrude(mesh: &mut Mesh, panel: PolyId, height: f64, inset: f64) -> Result<Extrusion> {
    mesh.ensure_live(panel)?;
    let surface = mesh.surface(panel)?;
    let base: Vec<PointId> = mesh.polygon(panel)?.points().to_vec();
    let uvs: Option<Vec<Vec2>> = mesh.polygon(panel)?.uvs().map(<[Vec2]>::to_vec);

    // Zero for a degenerate panel; the extrusion then stays flat.
    let rise = surface.compute_normal() * height;
    let top_center = surface.evaluate_interior(0.5, 0.5) + rise;

    let top: Vec<PointId> = surface
        .positions()
        .iter()
        .map(|&p| {
            let raised = p + rise;
            let pull = (top_center - raised).normalize_or_zero() * inset;
            mesh.append_point(raised + pull)
        })
        .collect();

    let n = base.len();
    let mut walls = Vec::with_capacity(n);
    for i in 0..n {
        let j = (i + 1) % n;
        let wall_uvs = uvs.as_ref().map(|uv| [uv[i], uv[j], uv[j], uv[i]]);
        walls.push(mesh.build_polygon(
            &[base[i], base[j], top[j], top[i]],
            wall_uvs.as_ref().map(|w| &w[..]),
        )?);
    }
    let cap = mesh.build_polygon(&top, uvs.as_deref())?;
    mesh.queue_destroy(panel)?;

    log::trace!(
        "extruded polygon {} by {height} (inset {inset}) into cap {}",
        panel.0,
        cap.0
    );
    Ok(Extrusion { cap, walls })
}
