//! # Error Types
//!
//! Error types for panel and decal operations. Geometry construction is
//! deterministic, so every error is a precondition violation rather than a
//! transient condition.
//!
//! ## Error Policy
//!
//! - NO fallback geometry when a precondition fails
//! - All failures return explicit errors
//! - Errors include the offending handle or value

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building panels and decals.
///
/// ## Example
///
/// ```rust
/// use hreeble::{Error, Mesh};
///
/// let mut mesh = Mesh::new();
/// let a = mesh.append_point(glam::DVec3::ZERO);
/// let b = mesh.append_point(glam::DVec3::X);
/// match mesh.build_polygon(&[a, b], None) {
///     Err(Error::DegeneratePart { points }) => assert_eq!(points, 2),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Generic geometric precondition violation.
    #[error("Invalid geometry: {message}")]
    InvalidGeometry {
        /// What was wrong with the input.
        message: String,
    },

    /// A polyline or polygon with fewer than three points.
    #[error("Degenerate polygon: {points} point(s), at least 3 required")]
    DegeneratePart {
        /// Number of points supplied.
        points: usize,
    },

    /// A polygon with a vertex count the operation cannot handle.
    #[error("Polygon {polygon} has {count} vertices, expected {expected}")]
    UnsupportedVertexCount {
        /// Raw polygon handle.
        polygon: u32,
        /// Actual vertex count.
        count: usize,
        /// Human-readable accepted counts.
        expected: &'static str,
    },

    /// A point, polygon or group handle that does not exist in the mesh.
    #[error("Stale handle: {0}")]
    StaleHandle(String),

    /// An operation received a polygon already queued for destruction.
    #[error("Polygon {0} is pending deletion")]
    PendingDeletion(u32),

    /// A random choice was requested from an empty set.
    #[error("Cannot choose from an empty set")]
    EmptyChoice,

    /// Cook parameters failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Parameters could not be parsed.
    #[error("Invalid parameter document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Writing exported geometry failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for hreeble operations.
pub type Result<T> = std::result::Result<T, Error>;

// =============================================================================
// TESTS
// =============================================================================
