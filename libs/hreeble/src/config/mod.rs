//! Cook parameters.
//!
//! [`HreebleParams`] is the parameter object a host hands to the pipeline.
//! Defaults come from the shared `config` crate so the operator defaults live
//! in one place; the struct deserializes from JSON with every field optional.

use ::config::constants::{
    DEFAULT_ELEMENT_DENSITY, DEFAULT_ELEMENT_HEIGHT, DEFAULT_ELEMENT_SCALE,
    DEFAULT_ELEMENT_SHAPES, DEFAULT_PANEL_HEIGHT, DEFAULT_PANEL_INSET, DEFAULT_SEED,
};
use serde::{Deserialize, Serialize};

use crate::core::vec2::fit01;
use crate::error::{Error, Result};
use crate::shapes::ShapeKind;

/// Closed `[min, max]` interval sampled by mapping a unit value onto it.
///
/// # Examples
/// ```
/// use hreeble::config::ValueRange;
/// let range = ValueRange::new(0.5, 1.0);
/// assert_eq!(range.fit(0.5), 0.75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Value returned for a unit input of 0.
    pub min: f64,
    /// Value returned for a unit input of 1.
    pub max: f64,
}

impl ValueRange {
    /// Creates a range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Maps `unit` in `[0, 1]` onto the range.
    #[inline]
    pub fn fit(&self, unit: f64) -> f64 {
        fit01(unit, self.min, self.max)
    }

    fn check(&self, name: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::InvalidConfig(format!("{name} must be finite")));
        }
        if self.min > self.max {
            return Err(Error::InvalidConfig(format!(
                "{name} min {} exceeds max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl From<[f64; 2]> for ValueRange {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

/// Bitmask of enabled decal shapes.
///
/// Bit `i` enables the i-th entry of [`ShapeKind::SELECTABLE`].
///
/// # Examples
/// ```
/// use hreeble::config::ShapeMask;
/// use hreeble::shapes::ShapeKind;
///
/// let mask = ShapeMask::from_kinds(&[ShapeKind::Square, ShapeKind::TShape]);
/// assert_eq!(mask.enabled_kinds(), vec![ShapeKind::TShape, ShapeKind::Square]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeMask(pub u32);

impl ShapeMask {
    /// No shapes enabled.
    pub const NONE: Self = Self(0);

    /// Builds a mask enabling `kinds`; kinds that are not selectable are ignored.
    pub fn from_kinds(kinds: &[ShapeKind]) -> Self {
        Self(kinds.iter().filter_map(|k| k.mask_bit()).fold(0, |acc, bit| acc | bit))
    }

    /// Enabled kinds in catalog order.
    pub fn enabled_kinds(&self) -> Vec<ShapeKind> {
        ShapeKind::SELECTABLE
            .iter()
            .copied()
            .filter(|kind| kind.mask_bit().is_some_and(|bit| self.0 & bit != 0))
            .collect()
    }

    /// True when no selectable kind is enabled.
    pub fn is_empty(&self) -> bool {
        self.enabled_kinds().is_empty()
    }
}

/// Parameters of one cook pass.
///
/// # Examples
/// ```
/// use hreeble::HreebleParams;
///
/// let params = HreebleParams::from_json(r#"{ "seed": 7, "element_density": 3 }"#).unwrap();
/// assert_eq!(params.seed, 7);
/// assert_eq!(params.element_density, 3);
/// assert!(params.generate_panels);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HreebleParams {
    /// Base seed; the only source of entropy.
    pub seed: u32,
    /// Subdivide and extrude source panels before placing decals.
    pub generate_panels: bool,
    /// Inward bevel distance of extruded panel caps.
    pub panel_inset: f64,
    /// Range of panel extrusion heights.
    pub panel_height: ValueRange,
    /// Decals placed on each cap.
    pub element_density: u32,
    /// Range of decal scale factors.
    pub element_scale: ValueRange,
    /// Range of decal extrusion heights.
    pub element_height: ValueRange,
    /// Enabled decal shapes.
    pub element_shapes: ShapeMask,
    /// Split polygons with more than four sides before processing.
    pub convex_geometry: bool,
    /// Collect decal polygons into the `elements` and `elements_front` groups.
    pub create_output_groups: bool,
}

impl Default for HreebleParams {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            generate_panels: true,
            panel_inset: DEFAULT_PANEL_INSET,
            panel_height: DEFAULT_PANEL_HEIGHT.into(),
            element_density: DEFAULT_ELEMENT_DENSITY,
            element_scale: DEFAULT_ELEMENT_SCALE.into(),
            element_height: DEFAULT_ELEMENT_HEIGHT.into(),
            element_shapes: ShapeMask(DEFAULT_ELEMENT_SHAPES),
            convex_geometry: true,
            create_output_groups: false,
        }
    }
}

impl HreebleParams {
    /// Parses parameters from a JSON document; missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed JSON and [`Error::InvalidConfig`]
    /// when the parsed values fail [`validate`](Self::validate).
    pub fn from_json(source: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(source)?;
        params.validate()?;
        Ok(params)
    }

    /// Checks ranges and scalars for values the pipeline cannot use.
    pub fn validate(&self) -> Result<()> {
        self.panel_height.check("panel_height")?;
        self.element_scale.check("element_scale")?;
        self.element_height.check("element_height")?;
        for (name, range) in [
            ("panel_height", self.panel_height),
            ("element_height", self.element_height),
            ("element_scale", self.element_scale),
        ] {
            if range.min < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be non-negative: {}",
                    range.min
                )));
            }
        }
        if !self.panel_inset.is_finite() || self.panel_inset < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "panel_inset must be a non-negative number: {}",
                self.panel_inset
            )));
        }
        if !self.element_shapes.is_empty() && self.element_density == 0 {
            return Err(Error::InvalidConfig(
                "element_density must be >= 1 when shapes are enabled".into(),
            ));
        }
        Ok(())
    }
}
