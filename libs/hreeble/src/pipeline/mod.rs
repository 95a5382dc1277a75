//! # Cook Pass
//!
//! Runs the whole generator over a snapshot of source panels:
//!
//! ```text
//! source ─┬─ quad ──── divide ──┐
//!         └─ triangle ──────────┴─ extrude each panel ─ caps
//! caps ─── element_density × (pick kind → make → transform → build)
//! ```
//!
//! Superseded polygons are only queued while the pass runs; one
//! [`Mesh::destroy_queued`] at the end removes them all, so handles taken
//! before or during the pass stay valid until then.
//!
//! ## Seeds
//!
//! Panel heights and subdivision choices draw from one stream started at
//! `seed` and shared by every source. Each decal derives its own seed from the
//! cap's polygon index and its slot on that cap, so decals do not depend on
//! how many draws the panel stream made before them.

use std::sync::atomic::{AtomicBool, Ordering};

use ::config::constants::{
    CONVEX_MAX_SIDES, DECAL_SEED_MULTIPLIER, ELEMENTS_FRONT_GROUP, ELEMENTS_GROUP,
    FLIP_SEED_OFFSET, PANEL_SEED_MULTIPLIER,
};

use crate::config::HreebleParams;
use crate::core::vec2::Vec2;
use crate::decal::OutputGroups;
use crate::error::Result;
use crate::mesh::{Mesh, PolyId, Surface};
use crate::ops::extrude::extrude;
use crate::ops::subdivide::divide;
use crate::rand::{rand_bool, rand_choice, SeedStream};
use crate::shapes::{make_decal, Direction, ShapeKind};

// =============================================================================
// INTERRUPTION
// =============================================================================

/// Host-side cancellation signal, polled once before each source panel.
pub trait Interrupt {
    /// True when the pass should stop.
    fn interrupted(&self) -> bool;
}

/// Never interrupts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverInterrupt;

impl Interrupt for NeverInterrupt {
    fn interrupted(&self) -> bool {
        false
    }
}

impl Interrupt for AtomicBool {
    fn interrupted(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<F> Interrupt for F
where
    F: Fn() -> bool,
{
    fn interrupted(&self) -> bool {
        self()
    }
}

// =============================================================================
// REPORT
// =============================================================================

/// Summary of one cook pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CookReport {
    /// Sources that went through the pass.
    pub sources_processed: usize,
    /// Sources left alone because of their vertex count.
    pub sources_skipped: usize,
    /// Panels produced by subdivision or passed through.
    pub panels: usize,
    /// Surfaces that received decals.
    pub caps: usize,
    /// Decals built.
    pub decals: usize,
    /// Polygons removed by the final compaction.
    pub polygons_deleted: usize,
    /// Points removed by the final compaction.
    pub points_deleted: usize,
    /// The interrupt fired before every source was processed.
    pub interrupted: bool,
}

// =============================================================================
// GENERATOR
// =============================================================================

/// A configured generator.
///
/// # Examples
/// ```
/// use hreeble::{Hreeble, HreebleParams, Mesh, NeverInterrupt};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let ids: Vec<_> = [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y]
///     .into_iter()
///     .map(|p| mesh.append_point(p))
///     .collect();
/// mesh.build_polygon(&ids, None)?;
///
/// let report = Hreeble::new(HreebleParams::default())?.cook_all(&mut mesh, &NeverInterrupt)?;
/// assert_eq!(report.caps, 3);
/// # Ok::<(), hreeble::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Hreeble {
    params: HreebleParams,
    shapes: Vec<ShapeKind>,
}

impl Hreeble {
    /// Validates `params` and prepares the enabled shape list.
    pub fn new(params: HreebleParams) -> Result<Self> {
        params.validate()?;
        let shapes = params.element_shapes.enabled_kinds();
        Ok(Self { params, shapes })
    }

    /// Parameters in use.
    pub fn params(&self) -> &HreebleParams {
        &self.params
    }

    /// Cooks every live polygon of `mesh`.
    pub fn cook_all<I>(&self, mesh: &mut Mesh, interrupt: &I) -> Result<CookReport>
    where
        I: Interrupt + ?Sized,
    {
        let sources = mesh.live_polygons();
        self.cook(mesh, &sources, interrupt)
    }

    /// Cooks `sources` in order.
    ///
    /// The interrupt is polled before each source; work on a source is never
    /// abandoned halfway. Queued polygons are destroyed at the end even when
    /// the pass stops early, which renumbers every handle in the mesh.
    ///
    /// # Errors
    ///
    /// Fails on stale or already queued source handles. Queued deletions are
    /// left pending in that case.
    pub fn cook<I>(&self, mesh: &mut Mesh, sources: &[PolyId], interrupt: &I) -> Result<CookReport>
    where
        I: Interrupt + ?Sized,
    {
        let params = &self.params;
        let mut report = CookReport::default();

        let sources = if params.convex_geometry {
            mesh.convex(sources, CONVEX_MAX_SIDES)?
        } else {
            sources.to_vec()
        };

        if self.shapes.is_empty() && !params.generate_panels {
            log::debug!("no shapes enabled and panel generation off; nothing to cook");
            return Ok(finish(mesh, report));
        }

        let groups = if params.create_output_groups {
            OutputGroups {
                elements: Some(mesh.new_group(ELEMENTS_GROUP)),
                elements_front: Some(mesh.new_group(ELEMENTS_FRONT_GROUP)),
            }
        } else {
            OutputGroups::default()
        };

        let mut stream = SeedStream::new(params.seed);
        for &source in &sources {
            if interrupt.interrupted() {
                log::debug!("cook interrupted before polygon {}", source.0);
                report.interrupted = true;
                break;
            }

            let count = mesh.vertex_count(source)?;
            if !(3..=4).contains(&count) {
                log::warn!(
                    "skipping polygon {}: {count} vertices, only triangles and quads are decorated",
                    source.0
                );
                report.sources_skipped += 1;
                continue;
            }

            let caps = if params.generate_panels {
                let panels = if count == 4 {
                    divide(mesh, source, &mut stream)?
                } else {
                    vec![source]
                };
                report.panels += panels.len();
                let mut caps = Vec::with_capacity(panels.len());
                for panel in panels {
                    let height = stream.next_fit(params.panel_height);
                    caps.push(extrude(mesh, panel, height, params.panel_inset)?.cap);
                }
                caps
            } else {
                vec![source]
            };
            log::debug!("polygon {}: {} cap(s)", source.0, caps.len());

            if !self.shapes.is_empty() {
                for &cap in &caps {
                    report.decals += self.decorate(mesh, cap, groups)?;
                }
            }
            report.caps += caps.len();
            report.sources_processed += 1;
        }

        Ok(finish(mesh, report))
    }

    /// Places `element_density` decals on `cap`; returns how many were built.
    fn decorate(&self, mesh: &mut Mesh, cap: PolyId, groups: OutputGroups) -> Result<usize> {
        let params = &self.params;
        let surface = mesh.surface(cap)?;
        let normal = surface.compute_normal();
        let triangular = surface.vertex_count() == 3;

        for slot in 0..params.element_density {
            let seed = params
                .seed
                .wrapping_add(cap.0.wrapping_mul(PANEL_SEED_MULTIPLIER))
                .wrapping_add(slot.wrapping_mul(DECAL_SEED_MULTIPLIER));
            let kind = if triangular {
                ShapeKind::Triangle
            } else {
                *rand_choice(&self.shapes, seed)?
            };

            let mut stream = SeedStream::new(seed);
            let height = stream.next_fit(params.element_height);
            let s = stream.next_uniform();
            let t = stream.next_uniform();
            let scale = stream.next_fit(params.element_scale);
            let direction = Direction::from_flag(rand_bool(stream.state()));
            let flip = rand_bool(stream.state().wrapping_add(FLIP_SEED_OFFSET));

            let mut decal = make_decal(kind, direction).with_groups(groups);
            let placement = decal.transform(Vec2::new(s, t), scale, flip);
            log::trace!("decal {slot} on polygon {}: {kind:?} {placement:?}", cap.0);
            decal.build(mesh, cap, normal, height)?;
        }
        Ok(params.element_density as usize)
    }
}

/// Runs the single end-of-pass compaction and records it.
fn finish(mesh: &mut Mesh, mut report: CookReport) -> CookReport {
    let compaction = mesh.destroy_queued();
    report.polygons_deleted = compaction.polygons_removed;
    report.points_deleted = compaction.points_removed;
    log::debug!("cook finished: {report:?}");
    report
}
