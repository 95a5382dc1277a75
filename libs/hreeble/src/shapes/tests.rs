use super::*;
use approx::assert_relative_eq;

const ALL_KINDS: [ShapeKind; 7] = [
    ShapeKind::SingleStripe,
    ShapeKind::DoubleStripe,
    ShapeKind::TripleStripe,
    ShapeKind::TShape,
    ShapeKind::RShape,
    ShapeKind::Square,
    ShapeKind::Triangle,
];

#[test]
fn catalog_lies_in_unit_square() {
    for kind in ALL_KINDS {
        for direction in [Direction::S, Direction::T] {
            let decal = make_decal(kind, direction);
            for part in decal.parts() {
                assert!(part.points().len() >= 3);
                for pt in part.points() {
                    assert!(
                        (0.0..=1.0).contains(&pt.x) && (0.0..=1.0).contains(&pt.y),
                        "{kind:?}/{direction:?} point {pt} outside unit square"
                    );
                }
            }
        }
    }
}

#[test]
fn stripe_counts() {
    assert_eq!(make_decal(ShapeKind::SingleStripe, Direction::S).parts().len(), 1);
    assert_eq!(make_decal(ShapeKind::DoubleStripe, Direction::T).parts().len(), 2);
    assert_eq!(make_decal(ShapeKind::TripleStripe, Direction::S).parts().len(), 3);
}

#[test]
fn stripes_step_along_direction_axis() {
    let decal = make_decal(ShapeKind::TripleStripe, Direction::T);
    let third = &decal.parts()[2];
    let expected = [(0.0, 0.25), (0.0, 0.35), (1.0, 0.35), (1.0, 0.25)];
    for (pt, (s, t)) in third.points().iter().zip(expected) {
        assert_relative_eq!(pt.x, s);
        assert_relative_eq!(pt.y, t);
    }

    let decal = make_decal(ShapeKind::DoubleStripe, Direction::S);
    let second = &decal.parts()[1];
    assert_relative_eq!(second.points()[0].x, 0.125);
    assert_relative_eq!(second.points()[2].x, 0.225);
}

#[test]
fn tshape_and_rshape_vertex_counts() {
    for direction in [Direction::S, Direction::T] {
        assert_eq!(make_decal(ShapeKind::TShape, direction).num_points(), 8);
        assert_eq!(make_decal(ShapeKind::RShape, direction).num_points(), 6);
    }
    let t = make_decal(ShapeKind::TShape, Direction::S);
    assert_eq!(t.parts()[0].points()[1], Vec2::new(0.0, 0.99));
    let r = make_decal(ShapeKind::RShape, Direction::T);
    assert_eq!(r.parts()[0].points()[2], Vec2::new(0.66, 0.99));
}

#[test]
fn square_and_triangle_ignore_direction() {
    for kind in [ShapeKind::Square, ShapeKind::Triangle] {
        let s = make_decal(kind, Direction::S);
        let t = make_decal(kind, Direction::T);
        assert_eq!(s.parts()[0].points(), t.parts()[0].points());
    }
    let square = make_decal(ShapeKind::Square, Direction::S);
    let bbox = square.bbox();
    assert_eq!(bbox.min, Vec2::ZERO);
    assert_eq!(bbox.max, Vec2::splat(0.5));
}

#[test]
fn behavior_table() {
    assert!(ShapeKind::TShape.behavior().flippable);
    assert!(ShapeKind::RShape.behavior().flippable);
    assert!(!ShapeKind::Square.behavior().flippable);
    assert!(!ShapeKind::Triangle.behavior().flippable);

    let target = Vec2::new(0.8, 0.6);
    assert_eq!((ShapeKind::Square.behavior().move_target)(target), target);
    let fitted = (ShapeKind::Triangle.behavior().move_target)(target);
    assert_relative_eq!(fitted.x, 0.8 * 0.4);
    assert_relative_eq!(fitted.y, 0.6 * 0.2);
}

#[test]
fn mask_bits() {
    assert_eq!(ShapeKind::SingleStripe.mask_bit(), Some(1));
    assert_eq!(ShapeKind::Square.mask_bit(), Some(32));
    assert_eq!(ShapeKind::Triangle.mask_bit(), None);
}

#[test]
fn direction_flag() {
    assert_eq!(Direction::from_flag(false).axis(), 0);
    assert_eq!(Direction::from_flag(true).axis(), 1);
}
