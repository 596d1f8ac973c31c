//! Grid sampler: candidate observer points inside a target polygon.
//!
//! The lattice is anchored at the polygon's bounding-box minimum and indexed
//! (`min + i * spacing`) instead of accumulated, so coordinates are reproducible
//! and land exactly on snapped grid values. Both bounding-box ends are
//! inclusive and points on the polygon boundary are kept.

use crate::geom2::{Point, Polygon};

/// Slack on the lattice extent so `max` is reached despite rounding in
/// `(max - min) / spacing`.
const EXTENT_SLACK: f64 = 1e-9;

/// Lattice points inside (or on the boundary of) `polygon`, in x-major order.
///
/// Returns an empty list for polygons with fewer than three vertices and for
/// non-positive or non-finite `spacing`.
pub fn sample_grid(polygon: &Polygon, spacing: f64) -> Vec<Point> {
    if !polygon.is_qualifying() || !(spacing.is_finite() && spacing > 0.0) {
        return Vec::new();
    }
    let Some(bounds) = polygon.bounds() else {
        return Vec::new();
    };
    let nx = steps(bounds.width(), spacing);
    let ny = steps(bounds.height(), spacing);
    let mut points = Vec::new();
    for i in 0..=nx {
        let x = bounds.min.x + i as f64 * spacing;
        for j in 0..=ny {
            let p = Point::new(x, bounds.min.y + j as f64 * spacing);
            if polygon.contains_inclusive(p) {
                points.push(p);
            }
        }
    }
    tracing::debug!(
        spacing,
        lattice = lattice_size(nx, ny),
        kept = points.len(),
        "sample_grid"
    );
    points
}

#[inline]
fn steps(extent: f64, spacing: f64) -> usize {
    (extent / spacing + EXTENT_SLACK).floor().max(0.0) as usize
}

/// Number of lattice sites, saturating for absurdly fine spacings.
#[inline]
fn lattice_size(nx: usize, ny: usize) -> usize {
    nx.saturating_add(1).saturating_mul(ny.saturating_add(1))
}
