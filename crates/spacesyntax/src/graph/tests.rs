use super::*;
use crate::geom2::{Point, Polygon, PolygonSet, Segment};
use crate::lines::{build_connectivity_lines, LineKind, LineSet};
use crate::sampling::sample_grid;
use nalgebra::vector;

fn lines(pairs: &[((f64, f64), (f64, f64))]) -> LineSet {
    LineSet::new(
        LineKind::Connectivity,
        pairs
            .iter()
            .map(|&((ax, ay), (bx, by))| Segment::new(vector![ax, ay], vector![bx, by]))
            .collect(),
    )
}

fn path3() -> Graph {
    Graph::from_lines(&lines(&[((0.0, 0.0), (1.0, 0.0)), ((1.0, 0.0), (2.0, 0.0))]))
}

#[test]
fn keys_merge_float_duplicates_and_drop_loops() {
    let g = Graph::from_lines(&lines(&[
        ((0.0, 0.0), (0.1 + 0.2, 0.0)),
        ((0.3, 0.0), (0.0, 0.0)),
        ((0.3, 0.0), (0.300_000_1, 0.0)),
    ]));
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 1);
    let id = g.id_at(vector![0.3, 0.0]).unwrap();
    assert_eq!(g.degree(id), 1);
    assert_eq!(g.nodes[id.0], NodeKey { x: 300, y: 0 });
    assert_eq!(g.point(id), vector![0.3, 0.0]);
    assert!(g.id_at(vector![5.0, 5.0]).is_none());
}

#[test]
fn empty_lines_make_empty_graph() {
    let g = Graph::from_lines(&LineSet::empty(LineKind::Connectivity));
    assert!(g.is_empty());
    assert_eq!(mean_degree(&g), 0.0);
    assert_eq!(mean_integration(&g), 0.0);
    assert_eq!(mean_clustering(&g), 0.0);
    assert_eq!(mean_normalized_betweenness(&g), 0.0);
}

#[test]
fn path_depths_and_integration() {
    let g = path3();
    let md = mean_depths(&g);
    assert_eq!(md, vec![Some(1.5), Some(1.0), Some(1.5)]);
    assert!((mean_integration(&g) - 7.0 / 9.0).abs() < 1e-12);
    assert!((mean_degree(&g) - 4.0 / 3.0).abs() < 1e-12);
    assert_eq!(bfs_depths(&g, NodeId(0)), vec![Some(0), Some(1), Some(2)]);
}

#[test]
fn betweenness_path_and_star() {
    let g = path3();
    assert_eq!(brandes_betweenness(&g), vec![0.0, 2.0, 0.0]);
    assert!((mean_normalized_betweenness(&g) - 2.0 / 3.0).abs() < 1e-12);

    let star = Graph::from_lines(&lines(&[
        ((0.0, 0.0), (1.0, 0.0)),
        ((0.0, 0.0), (-1.0, 0.0)),
        ((0.0, 0.0), (0.0, 1.0)),
    ]));
    let center = star.id_at(vector![0.0, 0.0]).unwrap();
    let bc = brandes_betweenness(&star);
    assert!((bc[center.0] - 6.0).abs() < 1e-12);
    assert!((mean_normalized_betweenness(&star) - 0.5).abs() < 1e-12);

    // Two shortest paths share the load on a 4-cycle.
    let cycle = Graph::from_lines(&lines(&[
        ((0.0, 0.0), (1.0, 0.0)),
        ((1.0, 0.0), (1.0, 1.0)),
        ((1.0, 1.0), (0.0, 1.0)),
        ((0.0, 1.0), (0.0, 0.0)),
    ]));
    assert!(brandes_betweenness(&cycle).iter().all(|b| (b - 1.0).abs() < 1e-12));
}

#[test]
fn two_nodes_have_no_betweenness() {
    let g = Graph::from_lines(&lines(&[((0.0, 0.0), (1.0, 0.0))]));
    assert_eq!(mean_normalized_betweenness(&g), 0.0);
}

#[test]
fn clustering_triangle_with_pendant() {
    let g = Graph::from_lines(&lines(&[
        ((0.0, 0.0), (1.0, 0.0)),
        ((1.0, 0.0), (0.5, 1.0)),
        ((0.5, 1.0), (0.0, 0.0)),
        ((0.5, 1.0), (0.5, 2.0)),
    ]));
    let c = g.id_at(vector![0.5, 1.0]).unwrap();
    let d = g.id_at(vector![0.5, 2.0]).unwrap();
    let local = local_clustering(&g);
    assert!((local[c.0] - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(local[d.0], 0.0);
    assert!((mean_clustering(&g) - 7.0 / 12.0).abs() < 1e-12);
}

#[test]
fn disjoint_rooms_stay_separate() {
    let a = Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let b = a.translated(11.0, 0.0);
    let plan = PolygonSet::new(vec![a.clone(), b.clone()]);
    let mut pts = sample_grid(&a, 0.5);
    pts.extend(sample_grid(&b, 0.5));
    let con = build_connectivity_lines(&pts, &plan, 0.75);
    assert!(con.iter().all(|s| (s.a.x < 5.0) == (s.b.x < 5.0)));
    let g = Graph::from_lines(&con);
    assert_eq!(g.node_count(), 18);
    let left = g.id_at(vector![0.0, 0.0]).unwrap();
    let reached = bfs_depths(&g, left).iter().filter(|d| d.is_some()).count();
    assert_eq!(reached, 9);
    // Both rooms are identical, so every node's mean depth has a twin.
    let md: Vec<f64> = mean_depths(&g).into_iter().flatten().collect();
    assert_eq!(md.len(), 18);
    let (l, r) = md.split_at(9);
    for (x, y) in l.iter().zip(r) {
        assert!((x - y).abs() < 1e-12);
    }

    // Betweenness never credits a node for the unreachable twin room.
    let single = Graph::from_lines(&build_connectivity_lines(&sample_grid(&a, 0.5), &plan, 0.75));
    let room_bc = brandes_betweenness(&single);
    let room_sum: f64 = room_bc.iter().sum();
    assert!(room_sum > 0.0);
    let bc = brandes_betweenness(&g);
    let (bl, br) = bc.split_at(9);
    for ((x, y), z) in bl.iter().zip(br).zip(&room_bc) {
        assert!((x - z).abs() < 1e-12 && (y - z).abs() < 1e-12);
    }
    // Normalization spans the whole 18-node graph.
    let expected = 2.0 * room_sum / (17.0 * 16.0 / 2.0) / 18.0;
    assert!((mean_normalized_betweenness(&g) - expected).abs() < 1e-12);
}

#[test]
fn inverse_distance_weights() {
    let ls = lines(&[((0.0, 0.0), (1.0, 0.0)), ((0.0, 0.0), (0.0, 0.5))]);
    let expected = (1.0 / 1.001 + 1.0 / 0.501) / 2.0;
    assert!((mean_inverse_distance(&ls, 0.001) - expected).abs() < 1e-12);
    assert_eq!(mean_inverse_distance(&LineSet::empty(LineKind::Connectivity), 0.001), 0.0);
}

#[test]
fn isovist_open_room_and_near_wall() {
    let room = PolygonSet::new(vec![Polygon::from_xy(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0),
    ])]);
    assert_eq!(isovist_openness(vector![5.0, 5.0], &room, 16, 1.5), 1.0);
    // Seven of sixteen rays point far enough towards -x to cross the wall at x = 0.
    assert_eq!(isovist_openness(vector![0.5, 5.0], &room, 16, 1.5), 9.0 / 16.0);
    assert_eq!(isovist_openness(Point::new(5.0, 5.0), &room, 0, 1.5), 0.0);

    let g = Graph::from_lines(&lines(&[((5.0, 5.0), (0.5, 5.0))]));
    let iso = node_isovists(&g, &room, 16, 1.5);
    assert_eq!(iso, vec![9.0 / 16.0, 1.0]);
}
