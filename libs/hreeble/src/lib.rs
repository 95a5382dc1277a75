//! # Hreeble
//!
//! Deterministic greeble generator for flat polygon panels.
//!
//! Quads are subdivided into three panels, every panel is extruded with an
//! inward bevel, and small parametric decals (stripes, T/R outlines, squares,
//! triangles) are placed on each extruded cap and extruded in turn. Every
//! random choice is a pure function of the integer seed in
//! [`HreebleParams`], so the same input mesh and parameters always produce
//! the same output.
//!
//! ## Architecture
//!
//! ```text
//! rand ──────────────┐
//! shapes → decal ────┼─→ pipeline
//! mesh → ops ────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use hreeble::{Hreeble, HreebleParams, Mesh, NeverInterrupt};
//! use glam::DVec3;
//!
//! let mut mesh = Mesh::new();
//! let corners = [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y];
//! let ids: Vec<_> = corners.into_iter().map(|p| mesh.append_point(p)).collect();
//! mesh.build_polygon(&ids, None)?;
//!
//! let params = HreebleParams::from_json(r#"{ "seed": 42, "element_density": 2 }"#)?;
//! let report = Hreeble::new(params)?.cook_all(&mut mesh, &NeverInterrupt)?;
//! assert_eq!(report.decals, 6);
//! # Ok::<(), hreeble::Error>(())
//! ```

pub mod config;
pub mod core;
pub mod decal;
pub mod error;
pub mod mesh;
pub mod ops;
pub mod pipeline;
pub mod rand;
pub mod shapes;

pub use crate::config::{HreebleParams, ShapeMask, ValueRange};
pub use crate::core::vec2::Vec2;
pub use crate::core::vec3::Vec3;
pub use decal::{BBox2D, Decal, DecalPolygons, OutputGroups, Part, Placement};
pub use error::{Error, Result};
pub use mesh::{Compaction, GroupId, Mesh, PanelSurface, PointId, PolyId, Polygon, Surface};
pub use ops::extrude::{extrude, Extrusion};
pub use ops::subdivide::{divide, split, SplitDirection};
pub use pipeline::{CookReport, Hreeble, Interrupt, NeverInterrupt};
pub use shapes::{make_decal, Direction, ShapeBehavior, ShapeKind};
