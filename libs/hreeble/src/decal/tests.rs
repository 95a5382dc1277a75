//! # Decal Tests
//!
//! Covers the flip → move → scale → boundary-correction pipeline and the
//! bounding-box helpers it relies on, then building onto a panel.

use super::*;
use crate::core::vec3::Vec3;
use crate::mesh::{Mesh, PointId, PolyId};
use crate::rand::SeedStream;
use crate::shapes::make_decal;
use approx::assert_abs_diff_eq;

const ALL_KINDS: [ShapeKind; 7] = [
    ShapeKind::SingleStripe,
    ShapeKind::DoubleStripe,
    ShapeKind::TripleStripe,
    ShapeKind::TShape,
    ShapeKind::RShape,
    ShapeKind::Square,
    ShapeKind::Triangle,
];

fn square_part(min: f64, max: f64) -> Part {
    Part::new(vec![
        Vec2::new(min, min),
        Vec2::new(min, max),
        Vec2::new(max, max),
        Vec2::new(max, min),
    ])
    .unwrap()
}

fn all_points(decal: &Decal) -> Vec<Vec2> {
    decal.parts().iter().flat_map(|p| p.points().to_vec()).collect()
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

#[test]
fn part_rejects_fewer_than_three_points() {
    let err = Part::new(vec![Vec2::ZERO, Vec2::X]).unwrap_err();
    assert!(matches!(err, Error::DegeneratePart { points: 2 }));
}

#[test]
fn decal_rejects_empty_parts() {
    assert!(Decal::new(ShapeKind::Square, Direction::S, vec![]).is_err());
}

// =============================================================================
// BBOX / PIVOT
// =============================================================================

#[test]
fn bbox_covers_all_parts() {
    let decal = make_decal(ShapeKind::TripleStripe, Direction::S);
    let bbox = decal.bbox();
    assert_abs_diff_eq!(bbox.min.x, 0.0);
    assert_abs_diff_eq!(bbox.max.x, 0.35, epsilon = 1e-12);
    assert_abs_diff_eq!(bbox.max.y, 1.0);
}

#[test]
fn bbox_handles_all_negative_points() {
    let decal = Decal::new(ShapeKind::Square, Direction::S, vec![square_part(-0.6, -0.2)]).unwrap();
    let bbox = decal.bbox();
    assert_eq!(bbox.min, Vec2::splat(-0.6));
    assert_eq!(bbox.max, Vec2::splat(-0.2));
}

#[test]
fn bbox_tracks_mutation() {
    let mut decal = make_decal(ShapeKind::Square, Direction::S);
    decal.move_by(Vec2::new(0.25, 0.1));
    assert_eq!(decal.bbox().min, Vec2::new(0.25, 0.1));
}

#[test]
fn pivot_is_mean_of_points() {
    let triangle = make_decal(ShapeKind::Triangle, Direction::S);
    assert_abs_diff_eq!(triangle.pivot().x, 1.0 / 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(triangle.pivot().y, 1.0 / 6.0, epsilon = 1e-12);
}

// =============================================================================
// BOUNDS INTERSECTION
// =============================================================================

#[test]
fn bounds_intersection_zero_inside() {
    let decal = make_decal(ShapeKind::Square, Direction::S);
    assert_eq!(decal.bounds_intersection(), Vec2::ZERO);
}

#[test]
fn bounds_intersection_pushes_min_to_zero_and_max_to_one() {
    let decal = Decal::new(ShapeKind::Square, Direction::S, vec![square_part(-0.2, 0.3)]).unwrap();
    let offset = decal.bounds_intersection();
    assert_abs_diff_eq!(offset.x, 0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(offset.y, 0.2, epsilon = 1e-12);

    let decal = Decal::new(ShapeKind::Square, Direction::S, vec![square_part(0.8, 1.3)]).unwrap();
    let offset = decal.bounds_intersection();
    assert_abs_diff_eq!(offset.x, -0.3, epsilon = 1e-12);
}

#[test]
fn bounds_intersection_cancels_when_both_sides_overflow() {
    let decal = Decal::new(ShapeKind::Square, Direction::S, vec![square_part(-0.1, 1.1)]).unwrap();
    let offset = decal.bounds_intersection();
    assert_abs_diff_eq!(offset.x, 0.0, epsilon = 1e-12);
}

// =============================================================================
// TRANSFORM
// =============================================================================

#[test]
fn transform_identity_is_noop() {
    // Triangles re-fit every target, so only the other kinds are fixed points.
    for kind in ALL_KINDS.into_iter().filter(|&k| k != ShapeKind::Triangle) {
        let mut decal = make_decal(kind, Direction::T);
        let before = all_points(&decal);
        let pivot = decal.pivot();
        let placement = decal.transform(pivot, 1.0, false);
        assert_eq!(placement, Placement::Inside, "{kind:?}");
        for (a, b) in before.iter().zip(all_points(&decal)) {
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-12);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-12);
        }
    }
}

#[test]
fn flip_mirrors_and_reverses_tshape() {
    let mut decal = make_decal(ShapeKind::TShape, Direction::S);
    let before = all_points(&decal);
    decal.flip();
    let after = all_points(&decal);
    let n = before.len();
    for i in 0..n {
        let original = before[n - 1 - i];
        assert_abs_diff_eq!(after[i].x, 1.0 - original.x, epsilon = 1e-12);
        assert_abs_diff_eq!(after[i].y, original.y, epsilon = 1e-12);
    }
}

#[test]
fn flip_ignored_for_square() {
    let mut decal = make_decal(ShapeKind::Square, Direction::S);
    let before = all_points(&decal);
    decal.flip();
    assert_eq!(before, all_points(&decal));
}

#[test]
fn move_places_pivot_at_target() {
    let mut decal = make_decal(ShapeKind::Square, Direction::S);
    let placement = decal.transform(Vec2::new(0.5, 0.5), 1.0, false);
    assert_eq!(placement, Placement::Inside);
    assert_abs_diff_eq!(decal.pivot().x, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(decal.bbox().min.x, 0.25, epsilon = 1e-12);
}

#[test]
fn scale_about_pivot() {
    let mut decal = make_decal(ShapeKind::Square, Direction::S);
    decal.transform(Vec2::new(0.5, 0.5), 0.5, false);
    let bbox = decal.bbox();
    assert_abs_diff_eq!(bbox.min.x, 0.375, epsilon = 1e-12);
    assert_abs_diff_eq!(bbox.max.y, 0.625, epsilon = 1e-12);
}

#[test]
fn triangle_target_is_refit_under_hypotenuse() {
    let mut decal = make_decal(ShapeKind::Triangle, Direction::S);
    decal.transform(Vec2::new(0.9, 0.9), 0.2, false);
    let pivot = decal.pivot();
    assert_abs_diff_eq!(pivot.x, 0.9 * 0.1, epsilon = 1e-12);
    assert_abs_diff_eq!(pivot.y, 0.9 * 0.1, epsilon = 1e-12);
}

#[test]
fn overshoot_shift_brings_decal_inside() {
    let mut decal = make_decal(ShapeKind::Square, Direction::S);
    // Pivot at 0.95 puts the max edge at 1.2; the shift moves it by -0.24.
    let placement = decal.transform(Vec2::new(0.95, 0.5), 1.0, false);
    assert_eq!(placement, Placement::Shifted);
    let bbox = decal.bbox();
    assert_abs_diff_eq!(bbox.max.x, 0.96, epsilon = 1e-12);
    assert!(bbox.within(0.0, 1.0, 1e-12));
}

#[test]
fn symmetric_overflow_is_clamped() {
    // Opposite corrections cancel, so only the bbox check catches this case.
    let mut decal = Decal::new(ShapeKind::Square, Direction::S, vec![square_part(-0.1, 1.1)]).unwrap();
    let pivot = decal.pivot();
    assert_eq!(decal.transform(pivot, 1.0, false), Placement::Clamped);
    assert_eq!(decal.bbox().min, Vec2::splat(0.01));
    assert_eq!(decal.bbox().max, Vec2::splat(0.99));
}

#[test]
fn oversized_decal_gets_clamped() {
    let mut decal = make_decal(ShapeKind::Square, Direction::S);
    let placement = decal.transform(Vec2::new(0.5, 0.5), 3.0, false);
    assert_eq!(placement, Placement::Clamped);
    assert!(decal.bbox().within(0.01, 0.99, 1e-12));
}

#[test]
fn transform_always_ends_in_unit_square() {
    let mut stream = SeedStream::new(4242);
    for kind in ALL_KINDS {
        for _ in 0..200 {
            let direction = Direction::from_flag(stream.next_uniform() > 0.5);
            let mut decal = make_decal(kind, direction);
            let target = Vec2::new(stream.next_uniform(), stream.next_uniform());
            let scale = 0.1 + stream.next_uniform() * 1.5;
            let flip = stream.next_uniform() > 0.5;
            let placement = decal.transform(target, scale, flip);
            let bbox = decal.bbox();
            match placement {
                Placement::Clamped => assert!(bbox.within(0.01, 0.99, 1e-9)),
                _ => assert!(bbox.within(0.0, 1.0, 1e-9), "{kind:?} {bbox:?}"),
            }
        }
    }
}

// =============================================================================
// BUILD
// =============================================================================

/// Counter-clockwise unit square in the XY plane, normal +Z.
fn panel(mesh: &mut Mesh, with_uvs: bool) -> PolyId {
    let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    let ids: Vec<_> = corners
        .iter()
        .map(|&(x, y)| mesh.append_point(Vec3::new(x, y, 0.0)))
        .collect();
    let uvs: Vec<Vec2> = corners.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
    mesh.build_polygon(&ids, with_uvs.then_some(&uvs[..])).unwrap()
}

#[test]
fn build_square_emits_walls_and_cap() {
    let mut mesh = Mesh::new();
    let panel = panel(&mut mesh, false);
    let out = make_decal(ShapeKind::Square, Direction::S)
        .build(&mut mesh, panel, Vec3::Z, 0.1)
        .unwrap();

    assert_eq!(out.walls.len(), 4);
    assert_eq!(out.caps.len(), 1);
    assert_eq!(out.len(), 5);
    assert_eq!(mesh.point_count(), 4 + 8);

    // Interleaved block: base_i = 4 + 2i, top_i = 5 + 2i.
    let wall = mesh.polygon(out.walls[0]).unwrap().points().to_vec();
    assert_eq!(wall, vec![PointId(4), PointId(6), PointId(7), PointId(5)]);
    assert_eq!(mesh.position(PointId(6)).unwrap(), Vec3::new(0.0, 0.5, 0.0));
    assert_abs_diff_eq!(mesh.position(PointId(7)).unwrap().z, 0.1);

    for p in mesh.polygon_positions(out.caps[0]).unwrap() {
        assert_abs_diff_eq!(p.z, 0.1);
    }
    assert!(!mesh.is_pending(panel));
}

#[test]
fn build_emits_one_cap_per_part() {
    let mut mesh = Mesh::new();
    let panel = panel(&mut mesh, false);
    let out = make_decal(ShapeKind::TripleStripe, Direction::T)
        .build(&mut mesh, panel, Vec3::Z, 0.05)
        .unwrap();
    assert_eq!(out.walls.len(), 12);
    assert_eq!(out.caps.len(), 3);
}

#[test]
fn build_fills_output_groups() {
    let mut mesh = Mesh::new();
    let panel = panel(&mut mesh, false);
    let groups = OutputGroups {
        elements: Some(mesh.new_group("elements")),
        elements_front: Some(mesh.new_group("elements_front")),
    };
    let out = make_decal(ShapeKind::Square, Direction::S)
        .with_groups(groups)
        .build(&mut mesh, panel, Vec3::Z, 0.1)
        .unwrap();

    let elements = mesh.group_by_name("elements").unwrap();
    assert_eq!(elements.len(), 5);
    assert!(elements.contains(&out.caps[0]));
    assert_eq!(mesh.group_by_name("elements_front").unwrap(), &out.caps[..]);
}

#[test]
fn build_shifts_top_uvs_away_from_panel_center() {
    let mut mesh = Mesh::new();
    let panel = panel(&mut mesh, true);
    let out = make_decal(ShapeKind::Square, Direction::S)
        .build(&mut mesh, panel, Vec3::Z, 0.1)
        .unwrap();

    // First wall runs along s = 0 from t = 0 to t = 0.5; the panel center
    // projects onto it at (0, 0.5), so the top pair moves toward -s.
    let uvs = mesh.polygon(out.walls[0]).unwrap().uvs().unwrap().to_vec();
    assert_eq!(uvs[0], Vec2::new(0.0, 0.0));
    assert_eq!(uvs[1], Vec2::new(0.0, 0.5));
    assert_abs_diff_eq!(uvs[2].x, -0.1, epsilon = 1e-12);
    assert_abs_diff_eq!(uvs[2].y, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(uvs[3].x, -0.1, epsilon = 1e-12);
    assert_abs_diff_eq!(uvs[3].y, 0.0, epsilon = 1e-12);

    let cap_uvs = mesh.polygon(out.caps[0]).unwrap().uvs().unwrap().to_vec();
    assert_eq!(cap_uvs[2], Vec2::new(0.5, 0.5));
}

#[test]
fn build_skips_uv_shift_for_flat_decal() {
    let mut mesh = Mesh::new();
    let panel = panel(&mut mesh, true);
    let out = make_decal(ShapeKind::Square, Direction::S)
        .build(&mut mesh, panel, Vec3::Z, 0.0)
        .unwrap();
    let uvs = mesh.polygon(out.walls[1]).unwrap().uvs().unwrap().to_vec();
    assert_eq!(uvs[2], uvs[1]);
    assert_eq!(uvs[3], uvs[0]);
}

#[test]
fn build_collapsed_decal_keeps_finite_uvs() {
    let mut mesh = Mesh::new();
    let panel = panel(&mut mesh, true);
    let mut decal = make_decal(ShapeKind::Square, Direction::S);
    decal.scale(0.0);
    let out = decal.build(&mut mesh, panel, Vec3::Z, 0.1).unwrap();

    // Every wall edge has zero length, so the top pair is not shifted.
    for &wall in &out.walls {
        let uvs = mesh.polygon(wall).unwrap().uvs().unwrap().to_vec();
        assert!(uvs.iter().all(|uv| uv.is_finite()));
        assert_eq!(uvs[2], uvs[1]);
        assert_eq!(uvs[3], uvs[0]);
    }
}

#[test]
fn build_on_zero_area_panel_copies_uvs() {
    let mut mesh = Mesh::new();
    let ids: Vec<_> = (0..4)
        .map(|i| mesh.append_point(Vec3::new(f64::from(i), 0.0, 0.0)))
        .collect();
    let uvs = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
    let panel = mesh.build_polygon(&ids, Some(&uvs)).unwrap();
    let out = make_decal(ShapeKind::Square, Direction::S)
        .build(&mut mesh, panel, Vec3::Z, 0.1)
        .unwrap();

    // Collinear corners give no area to scale the uv strip by.
    assert_eq!(out.walls.len(), 4);
    for &wall in &out.walls {
        let uvs = mesh.polygon(wall).unwrap().uvs().unwrap().to_vec();
        assert!(uvs.iter().all(|uv| uv.is_finite()));
        assert_eq!(uvs[2], uvs[1]);
        assert_eq!(uvs[3], uvs[0]);
    }
}

#[test]
fn build_rejects_queued_panel() {
    let mut mesh = Mesh::new();
    let panel = panel(&mut mesh, false);
    mesh.queue_destroy(panel).unwrap();
    let result = make_decal(ShapeKind::Square, Direction::S).build(&mut mesh, panel, Vec3::Z, 0.1);
    assert!(matches!(result, Err(Error::PendingDeletion(_))));
}
