//! Panel subdivision.
//!
//! A quad with corners `p0 p1 p2 p3` is cut in half through the midpoints of
//! two opposite edges:
//!
//! ```text
//!  Rows                      Columns
//!  p3 ------ p2              p3 --- m1 --- p2
//!  |          |              |      |      |
//!  m0 ------ m1              |      |      |
//!  |          |              |      |      |
//!  p0 ------ p1              p0 --- m0 --- p1
//! ```
//!
//! [`divide`] chains two cuts in opposite directions but only re-splits one of
//! the first two halves, so it yields three panels, not four.

use ::config::constants::RESPLIT_SEED_MULTIPLIER;

use crate::core::vec2::Vec2;
use crate::error::{Error, Result};
use crate::mesh::{Mesh, PointId, PolyId};
use crate::rand::{hashed_uniform, SeedStream};

/// Which pair of edges a split cuts through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitDirection {
    /// Cuts edges `p0-p3` and `p1-p2`; halves `[p0 p1 m1 m0]`, `[m0 m1 p2 p3]`.
    Rows,
    /// Cuts edges `p0-p1` and `p3-p2`; halves `[p0 m0 m1 p3]`, `[m0 p1 p2 m1]`.
    Columns,
}

impl SplitDirection {
    /// 0 is `Rows`, anything else `Columns`.
    pub fn from_index(index: u32) -> Self {
        if index == 0 {
            SplitDirection::Rows
        } else {
            SplitDirection::Columns
        }
    }

    /// The other direction.
    pub fn opposite(self) -> Self {
        match self {
            SplitDirection::Rows => SplitDirection::Columns,
            SplitDirection::Columns => SplitDirection::Rows,
        }
    }
}

/// Cuts a quad into two halves and queues it for deletion.
///
/// New edge points sit at the midpoints of the cut edges; texture coordinates
/// of new corners are the average of the edge endpoints, original corners
/// keep theirs.
///
/// # Errors
///
/// - [`Error::UnsupportedVertexCount`] if `panel` is not a quad
/// - [`Error::PendingDeletion`] if `panel` is already queued
pub fn split(mesh: &mut Mesh, panel: PolyId, direction: SplitDirection) -> Result<(PolyId, PolyId)> {
    mesh.ensure_live(panel)?;
    let polygon = mesh.polygon(panel)?.clone();
    let p = polygon.points();
    if p.len() != 4 {
        return Err(Error::UnsupportedVertexCount {
            polygon: panel.0,
            count: p.len(),
            expected: "4",
        });
    }

    // (edge start, edge end) corner indices of the two cut edges.
    let (cut0, cut1) = match direction {
        SplitDirection::Rows => ((0, 3), (1, 2)),
        SplitDirection::Columns => ((0, 1), (3, 2)),
    };
    let midpoint = |mesh: &Mesh, (a, b): (usize, usize)| -> Result<_> {
        Ok(mesh.position(p[a])? + (mesh.position(p[b])? - mesh.position(p[a])?) * 0.5)
    };
    let mid0 = midpoint(mesh, cut0)?;
    let mid1 = midpoint(mesh, cut1)?;
    let m0 = mesh.append_point(mid0);
    let m1 = mesh.append_point(mid1);

    let uv_mid = |uvs: &[Vec2], (a, b): (usize, usize)| uvs[a].lerp(uvs[b], 0.5);
    let halves: [[(Option<usize>, PointId); 4]; 2] = match direction {
        SplitDirection::Rows => [
            [(Some(0), p[0]), (Some(1), p[1]), (None, m1), (None, m0)],
            [(None, m0), (None, m1), (Some(2), p[2]), (Some(3), p[3])],
        ],
        SplitDirection::Columns => [
            [(Some(0), p[0]), (None, m0), (None, m1), (Some(3), p[3])],
            [(None, m0), (Some(1), p[1]), (Some(2), p[2]), (None, m1)],
        ],
    };

    let mut built = Vec::with_capacity(2);
    for half in &halves {
        let points: Vec<PointId> = half.iter().map(|&(_, id)| id).collect();
        let uvs: Option<Vec<Vec2>> = polygon.uvs().map(|uvs| {
            half.iter()
                .map(|&(corner, id)| match corner {
                    Some(c) => uvs[c],
                    None if id == m0 => uv_mid(uvs, cut0),
                    None => uv_mid(uvs, cut1),
                })
                .collect()
        });
        built.push(mesh.build_polygon(&points, uvs.as_deref())?);
    }
    mesh.queue_destroy(panel)?;
    log::trace!("split polygon {} ({direction:?}) into {:?}", panel.0, built);
    Ok((built[0], built[1]))
}

/// Splits a quad, then splits one of the halves in the opposite direction.
///
/// The direction comes from the next hashed draw of `stream`; the half to
/// re-split from a hashed draw of `stream.state() * 1999`, which does not
/// advance the stream. Returns `[untouched half, child, child]`.
pub fn divide(mesh: &mut Mesh, panel: PolyId, stream: &mut SeedStream) -> Result<Vec<PolyId>> {
    let first = (stream.next_hashed() * 2.0).trunc() as u32;
    let direction = SplitDirection::from_index(first);
    let (a, b) = split(mesh, panel, direction)?;

    let resplit_seed = stream.state().wrapping_mul(RESPLIT_SEED_MULTIPLIER);
    let pick = (hashed_uniform(resplit_seed) * 2.0).trunc() as usize;
    let (chosen, untouched) = if pick == 0 { (a, b) } else { (b, a) };

    let (c, d) = split(mesh, chosen, direction.opposite())?;
    Ok(vec![untouched, c, d])
}
