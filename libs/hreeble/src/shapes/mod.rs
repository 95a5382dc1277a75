//! Shape catalog.
//!
//! Canonical decal outlines in unit-square parameter space, keyed by
//! [`ShapeKind`] and a [`Direction`] flag. Kind-dependent transform behavior
//! (flip eligibility, move targeting) lives in one table, [`ShapeBehavior`],
//! instead of being branched on inside the transform.

use ::config::constants::{STRIPE_SPACING, STRIPE_WIDTH};

use crate::core::vec2::{fit01, Vec2};
use crate::decal::{Decal, Part};

/// Decal shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// One thin rectangle.
    SingleStripe,
    /// Two parallel thin rectangles.
    DoubleStripe,
    /// Three parallel thin rectangles.
    TripleStripe,
    /// Eight-vertex T outline.
    TShape,
    /// Six-vertex L outline.
    RShape,
    /// Quarter-size square.
    Square,
    /// Right triangle, used on three-sided caps only.
    Triangle,
}

/// Axis selector for direction-dependent outlines and flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Along the first parameter (s / x).
    S,
    /// Along the second parameter (t / y).
    T,
}

impl Direction {
    /// Maps the binary direction flag: `false` is `S`, `true` is `T`.
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            Direction::T
        } else {
            Direction::S
        }
    }

    /// Component index of this axis.
    pub fn axis(self) -> usize {
        match self {
            Direction::S => 0,
            Direction::T => 1,
        }
    }
}

/// Per-kind transform behavior.
#[derive(Debug, Clone, Copy)]
pub struct ShapeBehavior {
    /// Whether a requested flip mirrors this kind.
    pub flippable: bool,
    /// Maps a requested pivot to the pivot actually used by the move step.
    pub move_target: fn(Vec2) -> Vec2,
}

fn target_as_requested(target: Vec2) -> Vec2 {
    target
}

/// Re-fits each component into `[0, 1 - other]` so the hypotenuse stays
/// inside the unit square. Both components read the requested target.
fn target_under_hypotenuse(target: Vec2) -> Vec2 {
    Vec2::new(
        fit01(target.x, 0.0, 1.0 - target.y),
        fit01(target.y, 0.0, 1.0 - target.x),
    )
}

const PLAIN: ShapeBehavior = ShapeBehavior {
    flippable: false,
    move_target: target_as_requested,
};

const MIRRORED: ShapeBehavior = ShapeBehavior {
    flippable: true,
    move_target: target_as_requested,
};

const TRIANGULAR: ShapeBehavior = ShapeBehavior {
    flippable: false,
    move_target: target_under_hypotenuse,
};

impl ShapeKind {
    /// Kinds a shape mask can enable, in mask-bit order.
    pub const SELECTABLE: [ShapeKind; 6] = [
        ShapeKind::SingleStripe,
        ShapeKind::DoubleStripe,
        ShapeKind::TripleStripe,
        ShapeKind::TShape,
        ShapeKind::RShape,
        ShapeKind::Square,
    ];

    /// Mask bit enabling this kind, `None` for kinds the mask cannot select.
    pub fn mask_bit(self) -> Option<u32> {
        Self::SELECTABLE
            .iter()
            .position(|&kind| kind == self)
            .map(|i| 1 << i)
    }

    /// Transform behavior of this kind.
    pub fn behavior(self) -> &'static ShapeBehavior {
        match self {
            ShapeKind::TShape | ShapeKind::RShape => &MIRRORED,
            ShapeKind::Triangle => &TRIANGULAR,
            ShapeKind::SingleStripe
            | ShapeKind::DoubleStripe
            | ShapeKind::TripleStripe
            | ShapeKind::Square => &PLAIN,
        }
    }

    fn stripe_count(self) -> Option<usize> {
        match self {
            ShapeKind::SingleStripe => Some(1),
            ShapeKind::DoubleStripe => Some(2),
            ShapeKind::TripleStripe => Some(3),
            _ => None,
        }
    }
}

fn outline(coords: &[(f64, f64)]) -> Vec<Vec2> {
    coords.iter().map(|&(s, t)| Vec2::new(s, t)).collect()
}

fn stripe_parts(count: usize, direction: Direction) -> Vec<Part> {
    let base = match direction {
        Direction::S => outline(&[(0.0, 0.0), (0.0, 1.0), (STRIPE_WIDTH, 1.0), (STRIPE_WIDTH, 0.0)]),
        Direction::T => outline(&[(0.0, 0.0), (0.0, STRIPE_WIDTH), (1.0, STRIPE_WIDTH), (1.0, 0.0)]),
    };
    let axis = direction.axis();
    (0..count)
        .map(|i| {
            let step = i as f64 * STRIPE_SPACING;
            let points = base
                .iter()
                .map(|&pt| {
                    let mut moved = pt;
                    moved[axis] += step;
                    moved
                })
                .collect();
            Part::from_points_unchecked(points)
        })
        .collect()
}

fn single_part(kind: ShapeKind, direction: Direction) -> Part {
    let points = match (kind, direction) {
        (ShapeKind::TShape, Direction::S) => outline(&[
            (0.0, 0.0),
            (0.0, 0.99),
            (0.33, 0.99),
            (0.33, 0.66),
            (0.66, 0.66),
            (0.66, 0.33),
            (0.33, 0.33),
            (0.33, 0.0),
        ]),
        (ShapeKind::TShape, Direction::T) => outline(&[
            (0.0, 0.0),
            (0.0, 0.33),
            (0.33, 0.33),
            (0.33, 0.66),
            (0.66, 0.66),
            (0.66, 0.33),
            (0.99, 0.33),
            (0.99, 0.0),
        ]),
        (ShapeKind::RShape, Direction::S) => outline(&[
            (0.0, 0.0),
            (0.0, 0.66),
            (0.33, 0.66),
            (0.33, 0.33),
            (0.99, 0.33),
            (0.99, 0.0),
        ]),
        (ShapeKind::RShape, Direction::T) => outline(&[
            (0.0, 0.0),
            (0.0, 0.99),
            (0.66, 0.99),
            (0.66, 0.66),
            (0.33, 0.66),
            (0.33, 0.0),
        ]),
        (ShapeKind::Triangle, _) => outline(&[(0.0, 0.0), (0.0, 0.5), (0.5, 0.0)]),
        // Square; stripes never reach here.
        _ => outline(&[(0.0, 0.0), (0.0, 0.5), (0.5, 0.5), (0.5, 0.0)]),
    };
    Part::from_points_unchecked(points)
}

/// Instantiates the canonical outline of `kind` facing `direction`.
///
/// Every returned point lies in the unit square.
///
/// # Examples
/// ```
/// use hreeble::shapes::{make_decal, Direction, ShapeKind};
///
/// let decal = make_decal(ShapeKind::DoubleStripe, Direction::S);
/// assert_eq!(decal.parts().len(), 2);
/// assert_eq!(decal.num_points(), 8);
/// ```
pub fn make_decal(kind: ShapeKind, direction: Direction) -> Decal {
    let parts = match kind.stripe_count() {
        Some(count) => stripe_parts(count, direction),
        None => vec![single_part(kind, direction)],
    };
    Decal::from_parts_unchecked(kind, direction, parts)
}

#[cfg(test)]
mod tests;
