//! # Config Crate
//!
//! Centralized configuration constants for the hreeble panel generator.
//! Seed multipliers, catalog dimensions, placement heuristics and the default
//! cook parameters are defined here so the geometry crate never carries
//! scattered literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_SEED, PANEL_SEED_MULTIPLIER};
//!
//! // Decal seeds are derived from the base seed and the cap index.
//! let cap_index: u32 = 3;
//! let seed = DEFAULT_SEED.wrapping_add(cap_index.wrapping_mul(PANEL_SEED_MULTIPLIER));
//! assert_eq!(seed, 12345 + 3 * 130145);
//!
//! // Use EPSILON for floating-point comparisons
//! let is_zero = 1e-12_f64.abs() < EPSILON;
//! assert!(is_zero);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Bit-Reproducible**: Seed arithmetic constants must never change
//! - **Operator Compatible**: Defaults match the operator's parameter defaults

pub mod constants;
