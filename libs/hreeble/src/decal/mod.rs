//! Decals: parametric 2D ornaments placed on panel caps.
//!
//! A [`Decal`] owns one or more closed [`Part`] polylines in unit-square
//! parameter space. It is created by the shape catalog, mutated in place by
//! [`Decal::transform`], and consumed by [`Decal::build`] which emits the
//! extruded 3D geometry.
//!
//! ## Transform pipeline
//!
//! ```text
//! flip (mirrored kinds) → move pivot → scale about pivot → boundary correction
//! ```
//!
//! The steps do not commute and always run in this order.

mod build;

pub use build::DecalPolygons;

use ::config::constants::{BOUNDARY_OVERSHOOT, CLAMP_MAX, CLAMP_MIN};

use crate::core::vec2::{outside_unit, Vec2};
use crate::error::{Error, Result};
use crate::mesh::GroupId;
use crate::shapes::{Direction, ShapeKind};

/// One closed polyline; the edge from the last point back to the first is
/// implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    points: Vec<Vec2>,
}

impl Part {
    /// Creates a part from at least three points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegeneratePart`] for fewer than three points.
    pub fn new(points: Vec<Vec2>) -> Result<Self> {
        if points.len() < 3 {
            return Err(Error::DegeneratePart {
                points: points.len(),
            });
        }
        Ok(Self { points })
    }

    pub(crate) fn from_points_unchecked(points: Vec<Vec2>) -> Self {
        debug_assert!(points.len() >= 3);
        Self { points }
    }

    /// Points in winding order.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}

/// Axis-aligned bound of a decal's points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox2D {
    /// Smallest s and t.
    pub min: Vec2,
    /// Largest s and t.
    pub max: Vec2,
}

impl BBox2D {
    /// True when both corners lie in `[lo, hi]` on both axes, within `eps`.
    pub fn within(&self, lo: f64, hi: f64, eps: f64) -> bool {
        self.min.cmpge(Vec2::splat(lo - eps)).all() && self.max.cmple(Vec2::splat(hi + eps)).all()
    }
}

/// Which branch of the boundary correction a transform took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The scaled decal already fit in the unit square.
    Inside,
    /// The overshoot move brought the decal back inside.
    Shifted,
    /// The decal was still outside after the move and got hard-clamped.
    Clamped,
}

/// Group handles a decal's polygons are appended to when built.
///
/// The mesh owns the groups; a decal only adds members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputGroups {
    /// Receives every wall and cap polygon.
    pub elements: Option<GroupId>,
    /// Receives only cap polygons.
    pub elements_front: Option<GroupId>,
}

/// A decal instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Decal {
    kind: ShapeKind,
    direction: Direction,
    parts: Vec<Part>,
    groups: OutputGroups,
}

impl Decal {
    /// Creates a decal from explicit parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] when `parts` is empty.
    pub fn new(kind: ShapeKind, direction: Direction, parts: Vec<Part>) -> Result<Self> {
        if parts.is_empty() {
            return Err(Error::InvalidGeometry {
                message: "a decal needs at least one part".to_string(),
            });
        }
        Ok(Self::from_parts_unchecked(kind, direction, parts))
    }

    pub(crate) fn from_parts_unchecked(
        kind: ShapeKind,
        direction: Direction,
        parts: Vec<Part>,
    ) -> Self {
        Self {
            kind,
            direction,
            parts,
            groups: OutputGroups::default(),
        }
    }

    /// Attaches output groups filled by [`build`](Self::build).
    #[must_use]
    pub fn with_groups(mut self, groups: OutputGroups) -> Self {
        self.groups = groups;
        self
    }

    /// Shape kind.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Direction flag.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Parts in creation order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Output groups.
    pub fn groups(&self) -> OutputGroups {
        self.groups
    }

    /// Total number of points across all parts.
    pub fn num_points(&self) -> usize {
        self.parts.iter().map(|p| p.points.len()).sum()
    }

    fn points(&self) -> impl Iterator<Item = &Vec2> {
        self.parts.iter().flat_map(|p| p.points.iter())
    }

    fn points_mut(&mut self) -> impl Iterator<Item = &mut Vec2> {
        self.parts.iter_mut().flat_map(|p| p.points.iter_mut())
    }

    /// Current bound of all points; recomputed on every call.
    pub fn bbox(&self) -> BBox2D {
        let mut min = Vec2::splat(f64::INFINITY);
        let mut max = Vec2::splat(f64::NEG_INFINITY);
        for &pt in self.points() {
            min = min.min(pt);
            max = max.max(pt);
        }
        BBox2D { min, max }
    }

    /// Arithmetic mean of all points.
    pub fn pivot(&self) -> Vec2 {
        self.points().copied().sum::<Vec2>() / self.num_points() as f64
    }

    /// Correction pushing out-of-range bbox edges back to the unit square.
    ///
    /// Each of min.x, min.y, max.x, max.y outside `[0, 1]` contributes
    /// `sign(v) - v` on its axis, where `sign(v)` is 1 for positive `v` and 0
    /// otherwise. Zero when the decal already fits.
    pub fn bounds_intersection(&self) -> Vec2 {
        let sign = |v: f64| if v > 0.0 { 1.0 } else { 0.0 };
        let correction = |v: f64| if outside_unit(v) { sign(v) - v } else { 0.0 };
        let bbox = self.bbox();
        Vec2::new(
            correction(bbox.min.x) + correction(bbox.max.x),
            correction(bbox.min.y) + correction(bbox.max.y),
        )
    }

    /// True when the bbox lies inside the closed unit square.
    pub fn fits_unit_square(&self) -> bool {
        let bbox = self.bbox();
        [bbox.min.x, bbox.min.y, bbox.max.x, bbox.max.y]
            .into_iter()
            .all(|v| !outside_unit(v))
    }

    /// Translates every point by `offset`.
    pub fn move_by(&mut self, offset: Vec2) {
        for pt in self.points_mut() {
            *pt += offset;
        }
    }

    /// Mirrors the decal along its direction axis and reverses each part's
    /// winding. No-op for kinds that are not flippable.
    pub fn flip(&mut self) {
        if !self.kind.behavior().flippable {
            return;
        }
        let axis = self.direction.axis();
        for part in &mut self.parts {
            part.points.reverse();
            for pt in &mut part.points {
                pt[axis] = 1.0 - pt[axis];
            }
        }
    }

    /// Scales every point about the current pivot.
    pub fn scale(&mut self, factor: f64) {
        let pivot = self.pivot();
        for pt in self.points_mut() {
            *pt += (*pt - pivot) * (factor - 1.0);
        }
    }

    /// Flips, moves, scales and re-fits the decal into the unit square.
    ///
    /// `target` is the requested pivot; the kind's move rule may re-fit it.
    /// After the call every point lies in `[0, 1]²`, or in
    /// `[CLAMP_MIN, CLAMP_MAX]²` when the hard clamp ran.
    pub fn transform(&mut self, target: Vec2, scale: f64, flip: bool) -> Placement {
        if flip {
            self.flip();
        }

        let destination = (self.kind.behavior().move_target)(target);
        let offset = destination - self.pivot();
        self.move_by(offset);

        self.scale(scale);

        let correction = self.bounds_intersection();
        let shifted = correction.length() != 0.0;
        if shifted {
            self.move_by(correction * BOUNDARY_OVERSHOOT);
        }
        if self.fits_unit_square() {
            return if shifted {
                Placement::Shifted
            } else {
                Placement::Inside
            };
        }
        // Also reached when opposite overflows cancel in the correction vector.
        for pt in self.points_mut() {
            *pt = pt.clamp(Vec2::splat(CLAMP_MIN), Vec2::splat(CLAMP_MAX));
        }
        Placement::Clamped
    }
}

#[cfg(test)]
mod tests;
