//! Centralized configuration values shared across the hreeble crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons on parameter-space and world-space
/// values.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1.0e-9;

/// Shortest edge, in world units, that still carries a texture-coordinate
/// offset correction. Shorter edges are treated as degenerate.
///
/// # Examples
/// ```
/// use config::constants::{DEGENERATE_EDGE_LENGTH, EPSILON};
/// assert!(DEGENERATE_EDGE_LENGTH >= EPSILON);
/// ```
pub const DEGENERATE_EDGE_LENGTH: f64 = 1.0e-7;

// =============================================================================
// SEED DERIVATION CONSTANTS
// =============================================================================

/// Multiplier applied to the cap polygon index when deriving a decal seed.
///
/// # Examples
/// ```
/// use config::constants::PANEL_SEED_MULTIPLIER;
/// assert_eq!(PANEL_SEED_MULTIPLIER, 130145);
/// ```
pub const PANEL_SEED_MULTIPLIER: u32 = 130_145;

/// Multiplier applied to the decal index when deriving a decal seed.
///
/// # Examples
/// ```
/// use config::constants::DECAL_SEED_MULTIPLIER;
/// assert_eq!(DECAL_SEED_MULTIPLIER, 12987);
/// ```
pub const DECAL_SEED_MULTIPLIER: u32 = 12_987;

/// Offset added to a decal seed before drawing its flip decision.
///
/// # Examples
/// ```
/// use config::constants::FLIP_SEED_OFFSET;
/// assert_eq!(FLIP_SEED_OFFSET, 11234);
/// ```
pub const FLIP_SEED_OFFSET: u32 = 11_234;

/// Multiplier producing the seed that picks which half is split a second time.
///
/// # Examples
/// ```
/// use config::constants::RESPLIT_SEED_MULTIPLIER;
/// assert_eq!(RESPLIT_SEED_MULTIPLIER, 1999);
/// ```
pub const RESPLIT_SEED_MULTIPLIER: u32 = 1_999;

// =============================================================================
// SHAPE CATALOG CONSTANTS
// =============================================================================

/// Width of a single stripe in unit-square parameter space.
///
/// # Examples
/// ```
/// use config::constants::STRIPE_WIDTH;
/// assert_eq!(STRIPE_WIDTH, 0.1);
/// ```
pub const STRIPE_WIDTH: f64 = 0.1;

/// Spacing between parallel stripes: stripe `i` is offset by `i * STRIPE_SPACING`.
///
/// # Examples
/// ```
/// use config::constants::{STRIPE_SPACING, STRIPE_WIDTH};
/// assert!(STRIPE_SPACING > STRIPE_WIDTH);
/// ```
pub const STRIPE_SPACING: f64 = 1.0 / 8.0;

// =============================================================================
// PLACEMENT CONSTANTS
// =============================================================================

/// Overshoot factor applied to the boundary correction vector.
///
/// # Examples
/// ```
/// use config::constants::BOUNDARY_OVERSHOOT;
/// assert!(BOUNDARY_OVERSHOOT > 1.0);
/// ```
pub const BOUNDARY_OVERSHOOT: f64 = 1.2;

/// Lower bound of the hard clamp applied when the overshoot move still leaves
/// a decal outside the unit square.
///
/// # Examples
/// ```
/// use config::constants::{CLAMP_MAX, CLAMP_MIN};
/// assert!(CLAMP_MIN < CLAMP_MAX);
/// ```
pub const CLAMP_MIN: f64 = 0.01;

/// Upper bound of the hard clamp.
pub const CLAMP_MAX: f64 = 0.99;

// =============================================================================
// DEFAULT COOK PARAMETERS
// =============================================================================

/// Default base seed.
pub const DEFAULT_SEED: u32 = 12_345;

/// Default inward bevel of extruded panels.
pub const DEFAULT_PANEL_INSET: f64 = 0.01;

/// Default `[min, max]` panel extrusion height.
pub const DEFAULT_PANEL_HEIGHT: [f64; 2] = [0.001, 0.1];

/// Default number of decals placed on each cap.
pub const DEFAULT_ELEMENT_DENSITY: u32 = 1;

/// Default `[min, max]` decal scale.
pub const DEFAULT_ELEMENT_SCALE: [f64; 2] = [0.5, 1.0];

/// Default `[min, max]` decal extrusion height.
pub const DEFAULT_ELEMENT_HEIGHT: [f64; 2] = [0.02, 0.1];

/// Default enabled-shape bitmask (bit 2: triple stripe).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_ELEMENT_SHAPES;
/// assert_eq!(DEFAULT_ELEMENT_SHAPES.count_ones(), 1);
/// ```
pub const DEFAULT_ELEMENT_SHAPES: u32 = 4;

/// Largest polygon side count kept intact by the convex preprocessing pass.
pub const CONVEX_MAX_SIDES: usize = 4;

/// Name of the group collecting every decal polygon.
pub const ELEMENTS_GROUP: &str = "elements";

/// Name of the group collecting the outward-facing decal caps.
pub const ELEMENTS_FRONT_GROUP: &str = "elements_front";
