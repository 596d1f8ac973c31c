//! Obstruction oracle: is the straight path between two points crossed by a wall?
//!
//! Every polygon edge in the plan acts as a wall. A segment that coincides with
//! a wall (both endpoints are exactly that edge's endpoints) is a touch, not a
//! crossing, and is exempt.
//!
//! A path can also leave the plan without crossing anything: two boundary
//! samples on the walls of a reflex corner see each other through the exterior
//! notch while touching each wall only at an endpoint. `stays_in_plan` catches
//! that case by its midpoint.

use crate::geom2::{segments_intersect, Point, PolygonSet};

/// True iff `[a, b]` crosses any edge of any qualifying polygon.
///
/// Short-circuits on the first blocking edge. Zero-length polygon edges never
/// block; polygons with fewer than three vertices are not walls.
pub fn is_blocked(a: Point, b: Point, polygons: &PolygonSet) -> bool {
    polygons.qualifying().any(|poly| {
        poly.edges().any(|edge| {
            if edge.is_degenerate() {
                return false;
            }
            let touches = (a == edge.a && b == edge.b) || (a == edge.b && b == edge.a);
            !touches && segments_intersect(a, b, edge.a, edge.b)
        })
    })
}

/// Convenience negation used by the line builders and the isovist kernel.
#[inline]
pub fn is_visible(a: Point, b: Point, polygons: &PolygonSet) -> bool {
    !is_blocked(a, b, polygons)
}

/// True iff the midpoint of `[a, b]` lies inside (or on) a qualifying polygon.
pub fn stays_in_plan(a: Point, b: Point, polygons: &PolygonSet) -> bool {
    let mid = (a + b) / 2.0;
    polygons.qualifying().any(|poly| poly.contains_inclusive(mid))
}
