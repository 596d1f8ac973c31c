//! Pure planar predicates and polygon measures.
//!
//! All functions take vertex slices so they can be used on borrowed rings
//! without constructing a `Polygon`. None of them allocate.

use super::types::Point;

/// Ray-casting parity test.
///
/// A horizontal ray from `p` towards +x toggles membership at every edge whose
/// y-extent straddles `p.y` under the half-open rule `(yi > y) != (yj > y)`;
/// the lower endpoint of an edge is inclusive and the upper one exclusive, so a
/// ray through a shared vertex is counted once and horizontal edges never count.
///
/// Points exactly on the boundary may land on either side; callers that need
/// boundary points use [`point_on_boundary`] as well.
pub fn point_in_polygon(p: Point, vertices: &[Point]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Squared distance from `p` to the closed segment `[a, b]`.
#[inline]
pub fn point_to_segment_distance_sq(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq == 0.0 {
        return (p - a).norm_squared();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm_squared()
}

/// True if `p` lies within `eps` of any edge of the ring.
pub fn point_on_boundary(p: Point, vertices: &[Point], eps: f64) -> bool {
    let n = vertices.len();
    if n < 2 {
        return false;
    }
    let eps_sq = eps * eps;
    (0..n).any(|i| point_to_segment_distance_sq(p, vertices[i], vertices[(i + 1) % n]) <= eps_sq)
}

/// Directed orientation of the triple `(a, b, c)`:
/// `sign((c.y - a.y)(b.x - a.x) - (b.y - a.y)(c.x - a.x))`.
///
/// `1` counterclockwise, `-1` clockwise, `0` collinear.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> i8 {
    let v = (c.y - a.y) * (b.x - a.x) - (b.y - a.y) * (c.x - a.x);
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Proper crossing of segments `[p1, p2]` and `[p3, p4]`.
///
/// Both triples must straddle with strictly opposite orientation signs. A zero
/// orientation (an endpoint on the other segment's line) is not a crossing.
///
/// Known limitation: collinear overlapping segments report `false`.
#[inline]
pub fn segments_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let d1 = orientation(p3, p4, p1);
    let d2 = orientation(p3, p4, p2);
    let d3 = orientation(p1, p2, p3);
    let d4 = orientation(p1, p2, p4);
    d1 * d2 < 0 && d3 * d4 < 0
}

/// Shoelace area; non-negative regardless of winding.
pub fn polygon_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        twice += vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y;
    }
    (twice / 2.0).abs()
}

/// Sum of edge lengths including the closing edge.
pub fn polygon_perimeter(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| (vertices[(i + 1) % n] - vertices[i]).norm())
        .sum()
}

/// Vertex centroid (arithmetic mean of the vertices, not the area centroid).
pub fn centroid(vertices: &[Point]) -> Option<Point> {
    if vertices.is_empty() {
        return None;
    }
    let sum = vertices.iter().fold(Point::zeros(), |acc, v| acc + v);
    Some(sum / vertices.len() as f64)
}
