use super::*;
use nalgebra::vector;
use proptest::prelude::*;

fn unit_square() -> Polygon {
    Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
}

#[test]
fn unit_square_measures() {
    let sq = unit_square();
    assert!((sq.area() - 1.0).abs() < 1e-12);
    assert!((sq.perimeter() - 4.0).abs() < 1e-12);
    let c = sq.centroid().unwrap();
    assert!((c - vector![0.5, 0.5]).norm() < 1e-12);
}

#[test]
fn centroid_is_vertex_mean_not_area_centroid() {
    // Extra collinear vertices pull the vertex mean but leave the area centroid.
    let poly = Polygon::from_xy(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (3.0, 0.0),
        (3.0, 1.0),
        (0.0, 1.0),
    ]);
    let c = poly.centroid().unwrap();
    assert!((c.x - 1.5).abs() < 1e-12);
    assert!((c.y - 2.0 / 6.0).abs() < 1e-12);
    assert!(centroid(&[]).is_none());
}

#[test]
fn degenerate_rings_measure_zero() {
    assert_eq!(polygon_area(&[vector![0.0, 0.0], vector![1.0, 1.0]]), 0.0);
    assert_eq!(polygon_perimeter(&[vector![1.0, 1.0]]), 0.0);
    assert!(!point_in_polygon(vector![0.0, 0.0], &[vector![0.0, 0.0]]));
}

#[test]
fn half_open_rule_on_axis_aligned_edges() {
    let sq = unit_square();
    // Lower-left corner: lower endpoints inclusive.
    assert!(sq.contains(vector![0.0, 0.0]));
    // Top edge and right edge: excluded.
    assert!(!sq.contains(vector![0.5, 1.0]));
    assert!(!sq.contains(vector![1.0, 0.5]));
    // A ray through the vertex at y = 1 of an L-shape is counted once.
    let l_shape = Polygon::from_xy(&[
        (0.0, 0.0),
        (2.0, 0.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (1.0, 2.0),
        (0.0, 2.0),
    ]);
    assert!(l_shape.contains(vector![0.5, 1.0]));
    assert!(!l_shape.contains(vector![1.5, 1.5]));
}

#[test]
fn inclusive_containment_accepts_boundary() {
    let sq = unit_square();
    assert!(sq.contains_inclusive(vector![1.0, 1.0]));
    assert!(sq.contains_inclusive(vector![0.5, 1.0]));
    assert!(!sq.contains_inclusive(vector![1.0 + 1e-6, 0.5]));
    let line = Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0)]);
    assert!(!line.contains_inclusive(vector![0.5, 0.0]));
}

#[test]
fn crossing_requires_strict_straddle() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 1.0];
    assert!(segments_intersect(a, b, vector![0.0, 1.0], vector![1.0, 0.0]));
    // Touching at an endpoint is not a crossing.
    assert!(!segments_intersect(a, b, vector![1.0, 1.0], vector![2.0, 0.0]));
    // T-junction: endpoint lies on the other segment.
    assert!(!segments_intersect(
        vector![0.5, 0.5],
        vector![0.5, 2.0],
        vector![0.0, 0.5],
        vector![1.0, 0.5]
    ));
    // Collinear overlap is a documented non-crossing.
    assert!(!segments_intersect(
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![1.0, 0.0],
        vector![3.0, 0.0]
    ));
    assert_eq!(orientation(a, vector![1.0, 0.0], vector![1.0, 1.0]), 1);
    assert_eq!(orientation(a, vector![1.0, 0.0], vector![1.0, -1.0]), -1);
    assert_eq!(orientation(a, vector![1.0, 0.0], vector![2.0, 0.0]), 0);
}

#[test]
fn largest_skips_degenerate_and_keeps_first_on_tie() {
    let set = PolygonSet::new(vec![
        Polygon::from_xy(&[(0.0, 0.0), (100.0, 100.0)]),
        unit_square(),
        unit_square().translated(5.0, 0.0),
        Polygon::from_xy(&[(0.0, 0.0), (0.5, 0.0), (0.0, 0.5)]),
    ]);
    assert_eq!(set.largest_index(), Some(1));
    assert_eq!(set.qualifying().count(), 3);
    assert!(PolygonSet::new(vec![Polygon::from_xy(&[(0.0, 0.0)])])
        .largest()
        .is_none());
}

#[test]
fn bounds_and_stats() {
    let poly = Polygon::from_xy(&[(1.0, -2.0), (4.0, 0.0), (2.0, 3.0)]);
    let b = poly.bounds().unwrap();
    assert_eq!(b.min, vector![1.0, -2.0]);
    assert_eq!(b.max, vector![4.0, 3.0]);
    assert!((b.width() - 3.0).abs() < 1e-12 && (b.height() - 5.0).abs() < 1e-12);
    let s = poly.stats();
    assert_eq!(s.vertices, 3);
    assert!((s.area - poly.area()).abs() < 1e-12);
    assert!(Polygon::default().bounds().is_none());
}

fn convex_ring() -> impl Strategy<Value = Vec<Point>> {
    // Points on a jittered circle, sorted by angle, are a convex ring.
    (3usize..12, 0.5f64..5.0, -10.0f64..10.0, -10.0f64..10.0).prop_flat_map(|(n, r, cx, cy)| {
        prop::collection::vec(0.0f64..std::f64::consts::TAU, n).prop_map(move |mut angles| {
            angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
            angles.dedup_by(|a, b| (*a - *b).abs() < 1e-3);
            angles
                .into_iter()
                .map(|t| vector![cx + r * t.cos(), cy + r * t.sin()])
                .collect()
        })
    })
}

proptest! {
    #[test]
    fn area_invariant_under_rotation_and_reversal(ring in convex_ring(), k in 0usize..12) {
        prop_assume!(ring.len() >= 3);
        let a = polygon_area(&ring);
        let mut rotated = ring.clone();
        rotated.rotate_left(k % ring.len());
        let mut reversed = ring.clone();
        reversed.reverse();
        prop_assert!(a >= 0.0);
        prop_assert!((polygon_area(&rotated) - a).abs() < 1e-9);
        prop_assert!((polygon_area(&reversed) - a).abs() < 1e-9);
    }

    #[test]
    fn centroid_inside_convex_and_far_points_outside(ring in convex_ring()) {
        prop_assume!(ring.len() >= 3 && polygon_area(&ring) > 1e-3);
        let c = centroid(&ring).unwrap();
        prop_assert!(point_in_polygon(c, &ring));
        let b = Bounds2::of(&ring).unwrap();
        prop_assert!(!point_in_polygon(b.max + vector![1.0, 1.0], &ring));
        prop_assert!(!point_in_polygon(b.min - vector![100.0, 0.0], &ring));
    }

    #[test]
    fn intersection_symmetric_under_segment_swap(
        c in prop::array::uniform8(-5.0f64..5.0)
    ) {
        let p1 = vector![c[0], c[1]];
        let p2 = vector![c[2], c[3]];
        let p3 = vector![c[4], c[5]];
        let p4 = vector![c[6], c[7]];
        prop_assert_eq!(segments_intersect(p1, p2, p3, p4), segments_intersect(p3, p4, p1, p2));
        prop_assert_eq!(segments_intersect(p1, p2, p3, p4), segments_intersect(p2, p1, p4, p3));
    }
}
