//! # Mesh Module
//!
//! Polygon mesh arena that panels and decals are built into.
//!
//! ## Structure
//!
//! - `Mesh` - points, polygons and named polygon groups addressed by stable
//!   `u32` handles
//! - `surface` - the bilinear sampler over a tri/quad polygon
//! - `export` - Wavefront OBJ output
//!
//! ## Deferred deletion
//!
//! Handles stay valid for the whole cook pass. Superseded polygons are only
//! marked with [`Mesh::queue_destroy`]; [`Mesh::destroy_queued`] removes them
//! in one compaction step at the end of the pass and remaps every handle.
//!
//! ## Example
//!
//! ```rust
//! use hreeble::Mesh;
//! use glam::DVec3;
//!
//! let mut mesh = Mesh::new();
//! let a = mesh.append_point(DVec3::new(0.0, 0.0, 0.0));
//! let b = mesh.append_point(DVec3::new(1.0, 0.0, 0.0));
//! let c = mesh.append_point(DVec3::new(0.0, 1.0, 0.0));
//! let tri = mesh.build_polygon(&[a, b, c], None).unwrap();
//! assert_eq!(mesh.vertex_count(tri).unwrap(), 3);
//! ```

mod export;
pub mod surface;

pub use surface::{PanelSurface, Surface};

use std::collections::BTreeSet;

use crate::core::vec2::Vec2;
use crate::core::vec3::Vec3;
use crate::error::{Error, Result};

// =============================================================================
// HANDLES
// =============================================================================

/// Handle of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u32);

/// Handle of a polygon. The raw value is the polygon's index in the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolyId(pub u32);

/// Handle of a named polygon group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u32);

impl PointId {
    /// Handle `n` points after this one inside a block allocation.
    pub fn offset(self, n: usize) -> Self {
        Self(self.0 + n as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl PolyId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

// =============================================================================
// POLYGON
// =============================================================================

/// A closed polygon over mesh points with optional per-vertex texture
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<PointId>,
    uvs: Option<Vec<Vec2>>,
}

impl Polygon {
    /// Point handles in winding order.
    pub fn points(&self) -> &[PointId] {
        &self.points
    }

    /// Per-vertex texture coordinates, parallel to [`points`](Self::points).
    pub fn uvs(&self) -> Option<&[Vec2]> {
        self.uvs.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Group {
    name: String,
    members: Vec<PolyId>,
}

/// Outcome of [`Mesh::destroy_queued`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Compaction {
    /// Polygons removed.
    pub polygons_removed: usize,
    /// Points removed because only removed polygons used them.
    pub points_removed: usize,
}

// =============================================================================
// MESH
// =============================================================================

/// Arena of points, polygons and polygon groups.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    positions: Vec<Vec3>,
    polygons: Vec<Polygon>,
    groups: Vec<Group>,
    pending: BTreeSet<PolyId>,
}

impl Mesh {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Create a new empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // POINTS
    // =========================================================================

    /// Number of points.
    pub fn point_count(&self) -> usize {
        self.positions.len()
    }

    /// Appends one point.
    pub fn append_point(&mut self, position: Vec3) -> PointId {
        let id = PointId(self.positions.len() as u32);
        self.positions.push(position);
        id
    }

    /// Appends `count` points at the origin and returns the first handle;
    /// the rest follow contiguously.
    pub fn append_point_block(&mut self, count: usize) -> PointId {
        let first = PointId(self.positions.len() as u32);
        self.positions.resize(self.positions.len() + count, Vec3::ZERO);
        first
    }

    /// Position of a point.
    pub fn position(&self, id: PointId) -> Result<Vec3> {
        self.positions
            .get(id.index())
            .copied()
            .ok_or_else(|| Error::StaleHandle(format!("point {}", id.0)))
    }

    /// Moves a point.
    pub fn set_position(&mut self, id: PointId, position: Vec3) -> Result<()> {
        let slot = self
            .positions
            .get_mut(id.index())
            .ok_or_else(|| Error::StaleHandle(format!("point {}", id.0)))?;
        *slot = position;
        Ok(())
    }

    // =========================================================================
    // POLYGONS
    // =========================================================================

    /// Number of polygons, including those pending deletion.
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Builds a polygon from an ordered point list.
    ///
    /// # Errors
    ///
    /// - [`Error::DegeneratePart`] for fewer than three points
    /// - [`Error::StaleHandle`] for unknown points
    /// - [`Error::InvalidGeometry`] when `uvs` does not match the point count
    pub fn build_polygon(&mut self, points: &[PointId], uvs: Option<&[Vec2]>) -> Result<PolyId> {
        if points.len() < 3 {
            return Err(Error::DegeneratePart {
                points: points.len(),
            });
        }
        if let Some(bad) = points.iter().find(|p| p.index() >= self.positions.len()) {
            return Err(Error::StaleHandle(format!("point {}", bad.0)));
        }
        if let Some(uvs) = uvs {
            if uvs.len() != points.len() {
                return Err(Error::InvalidGeometry {
                    message: format!(
                        "{} texture coordinates for {} points",
                        uvs.len(),
                        points.len()
                    ),
                });
            }
        }
        let id = PolyId(self.polygons.len() as u32);
        self.polygons.push(Polygon {
            points: points.to_vec(),
            uvs: uvs.map(<[Vec2]>::to_vec),
        });
        Ok(id)
    }

    /// A polygon by handle.
    pub fn polygon(&self, id: PolyId) -> Result<&Polygon> {
        self.polygons
            .get(id.index())
            .ok_or_else(|| Error::StaleHandle(format!("polygon {}", id.0)))
    }

    /// Polygon vertex count.
    pub fn vertex_count(&self, id: PolyId) -> Result<usize> {
        Ok(self.polygon(id)?.points.len())
    }

    /// Polygon corner positions in winding order.
    pub fn polygon_positions(&self, id: PolyId) -> Result<Vec<Vec3>> {
        self.polygon(id)?
            .points
            .iter()
            .map(|&p| self.position(p))
            .collect()
    }

    /// Handles of every polygon not pending deletion, in insertion order.
    pub fn live_polygons(&self) -> Vec<PolyId> {
        (0..self.polygons.len() as u32)
            .map(PolyId)
            .filter(|id| !self.pending.contains(id))
            .collect()
    }

    /// Fails with [`Error::PendingDeletion`] if `id` is queued, or
    /// [`Error::StaleHandle`] if it does not exist.
    pub fn ensure_live(&self, id: PolyId) -> Result<()> {
        self.polygon(id)?;
        if self.pending.contains(&id) {
            return Err(Error::PendingDeletion(id.0));
        }
        Ok(())
    }

    /// Sampler over a live tri/quad polygon.
    pub fn surface(&self, id: PolyId) -> Result<PanelSurface> {
        self.ensure_live(id)?;
        let polygon = self.polygon(id)?;
        PanelSurface::new(id, self.polygon_positions(id)?, polygon.uvs.clone())
    }

    // =========================================================================
    // DEFERRED DELETION
    // =========================================================================

    /// Marks a polygon for removal at the next [`destroy_queued`](Self::destroy_queued).
    pub fn queue_destroy(&mut self, id: PolyId) -> Result<()> {
        self.polygon(id)?;
        self.pending.insert(id);
        Ok(())
    }

    /// True if `id` is queued for removal.
    pub fn is_pending(&self, id: PolyId) -> bool {
        self.pending.contains(&id)
    }

    /// Handles queued for removal, ascending.
    pub fn pending(&self) -> Vec<PolyId> {
        self.pending.iter().copied().collect()
    }

    /// Removes every queued polygon in one pass.
    ///
    /// Points referenced only by removed polygons go too; points that were
    /// never referenced are kept. Polygon and point handles are renumbered
    /// densely in their previous order and group members are remapped.
    pub fn destroy_queued(&mut self) -> Compaction {
        if self.pending.is_empty() {
            return Compaction::default();
        }

        let mut used = vec![false; self.positions.len()];
        let mut orphaned = vec![false; self.positions.len()];
        let mut poly_remap = vec![None; self.polygons.len()];
        let mut kept = Vec::with_capacity(self.polygons.len() - self.pending.len());

        for (index, polygon) in std::mem::take(&mut self.polygons).into_iter().enumerate() {
            let id = PolyId(index as u32);
            let flags = if self.pending.contains(&id) {
                &mut orphaned
            } else {
                poly_remap[index] = Some(PolyId(kept.len() as u32));
                &mut used
            };
            for p in &polygon.points {
                flags[p.index()] = true;
            }
            if poly_remap[index].is_some() {
                kept.push(polygon);
            }
        }

        let mut point_remap = vec![None; self.positions.len()];
        let mut positions = Vec::with_capacity(self.positions.len());
        for (index, &position) in self.positions.iter().enumerate() {
            if orphaned[index] && !used[index] {
                continue;
            }
            point_remap[index] = Some(PointId(positions.len() as u32));
            positions.push(position);
        }

        for polygon in &mut kept {
            for p in &mut polygon.points {
                // Every point of a kept polygon is marked used above.
                if let Some(new) = point_remap[p.index()] {
                    *p = new;
                }
            }
        }
        for group in &mut self.groups {
            group.members = group
                .members
                .iter()
                .filter_map(|m| poly_remap[m.index()])
                .collect();
        }

        let compaction = Compaction {
            polygons_removed: self.pending.len(),
            points_removed: self.positions.len() - positions.len(),
        };
        log::debug!(
            "compacted mesh: removed {} polygons, {} points",
            compaction.polygons_removed,
            compaction.points_removed
        );
        self.positions = positions;
        self.polygons = kept;
        self.pending.clear();
        compaction
    }

    // =========================================================================
    // GROUPS
    // =========================================================================

    /// Creates a group, or returns the existing one with the same name.
    pub fn new_group(&mut self, name: &str) -> GroupId {
        if let Some(index) = self.groups.iter().position(|g| g.name == name) {
            return GroupId(index as u32);
        }
        self.groups.push(Group {
            name: name.to_string(),
            members: Vec::new(),
        });
        GroupId(self.groups.len() as u32 - 1)
    }

    /// Appends a polygon to a group.
    pub fn add_to_group(&mut self, group: GroupId, polygon: PolyId) -> Result<()> {
        self.polygon(polygon)?;
        let group = self
            .groups
            .get_mut(group.0 as usize)
            .ok_or_else(|| Error::StaleHandle(format!("group {}", group.0)))?;
        group.members.push(polygon);
        Ok(())
    }

    /// Members of a group in insertion order.
    pub fn group(&self, group: GroupId) -> Result<&[PolyId]> {
        self.groups
            .get(group.0 as usize)
            .map(|g| g.members.as_slice())
            .ok_or_else(|| Error::StaleHandle(format!("group {}", group.0)))
    }

    /// Members of the group called `name`, if it exists.
    pub fn group_by_name(&self, name: &str) -> Option<&[PolyId]> {
        self.groups
            .iter()
            .find(|g| g.name == name)
            .map(|g| g.members.as_slice())
    }

    // =========================================================================
    // PREPROCESSING
    // =========================================================================

    /// Fan-splits each of `polygons` with more than `max_sides` vertices
    /// into triangles and queues the original for deletion.
    ///
    /// Returns the polygon list with every split polygon replaced in place by
    /// its triangles. Assumes convex input polygons; concave n-gons may fold.
    pub fn convex(&mut self, polygons: &[PolyId], max_sides: usize) -> Result<Vec<PolyId>> {
        if max_sides < 3 {
            return Err(Error::InvalidGeometry {
                message: format!("cannot split polygons below 3 sides: {max_sides}"),
            });
        }
        let mut out = Vec::with_capacity(polygons.len());
        for &id in polygons {
            self.ensure_live(id)?;
            let polygon = self.polygon(id)?.clone();
            let n = polygon.points.len();
            if n <= max_sides {
                out.push(id);
                continue;
            }
            for i in 1..n - 1 {
                let corners = [0, i, i + 1];
                let points: Vec<PointId> = corners.iter().map(|&c| polygon.points[c]).collect();
                let uvs: Option<Vec<Vec2>> = polygon
                    .uvs
                    .as_ref()
                    .map(|uvs| corners.iter().map(|&c| uvs[c]).collect());
                out.push(self.build_polygon(&points, uvs.as_deref())?);
            }
            self.queue_destroy(id)?;
            log::trace!("fan-split polygon {} ({n} sides) into {} triangles", id.0, n - 2);
        }
        Ok(out)
    }
}
