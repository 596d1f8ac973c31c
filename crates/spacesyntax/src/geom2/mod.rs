//! Planar geometry for floor-plan analysis.
//!
//! Purpose
//! - Provide the value types (`Point`, `Segment`, `Polygon`, `PolygonSet`) and
//!   the pure predicates every later stage is built on: ray-cast containment,
//!   strict segment crossing, shoelace area, perimeter and vertex centroid.
//! - Keep edits of polygons (move, rotate, mirror, scale) as pure functions that
//!   return new polygons; analysis never mutates its inputs.
//!
//! Conventions
//! - Coordinates are meters. Polygons are implicit rings (last vertex connects to
//!   the first) and take part in analysis only with at least three vertices.
//! - Exact coordinate equality is used where the inputs come from a snapped grid
//!   (endpoint-touch exemption); tolerant comparisons go through `EPS` or the
//!   quantized graph keys in `crate::graph`.
//!
//! Code cross-refs: `primitives`, `types`, `transform`.

pub mod primitives;
pub mod transform;
mod types;

pub use primitives::{
    centroid, orientation, point_in_polygon, point_on_boundary, point_to_segment_distance_sq,
    polygon_area, polygon_perimeter, segments_intersect,
};
pub use transform::{multi_centroid, snap_to_grid, Affine2};
pub use types::{Bounds2, Point, Polygon, PolygonSet, PolygonStats, Segment};

/// Tolerance used for boundary membership and degenerate-length checks.
pub const EPS: f64 = 1e-9;

#[cfg(test)]
mod tests;
