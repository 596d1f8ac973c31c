//! Visibility and connectivity line sets over sampled points.
//!
//! All three overlays share one pair loop: every unordered pair `(i < j)` of
//! sample points becomes a line when nothing in the plan blocks it. Connectivity
//! additionally bounds the Euclidean length; the dense "complex connections"
//! overlay is the visibility builder over a finer lattice.
//!
//! Cost is O(n² · edges); callers keep `n` small with coarse spacing.

use serde::Serialize;

use crate::geom2::{Point, PolygonSet, Segment};
use crate::oracle::{is_visible, stays_in_plan};

/// Which overlay a line set represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Visibility,
    Connectivity,
    Complex,
}

impl LineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Visibility => "visibility",
            LineKind::Connectivity => "connectivity",
            LineKind::Complex => "complex",
        }
    }
}

/// Lines between sampled points. Order carries no meaning.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSet {
    pub kind: LineKind,
    pub segments: Vec<Segment>,
}

impl LineSet {
    pub fn new(kind: LineKind, segments: Vec<Segment>) -> Self {
        Self { kind, segments }
    }

    pub fn empty(kind: LineKind) -> Self {
        Self::new(kind, Vec::new())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl<'a> IntoIterator for &'a LineSet {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;
    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Unobstructed pairs, optionally bounded by `max_dist`.
///
/// Pairs with identical coordinates are skipped, and so are pairs whose
/// midpoint falls outside every polygon of the plan (boundary samples at a
/// reflex corner).
pub fn build_lines(
    kind: LineKind,
    points: &[Point],
    polygons: &PolygonSet,
    max_dist: Option<f64>,
) -> LineSet {
    let mut segments = Vec::new();
    let mut degenerate = 0usize;
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            if a == b {
                degenerate += 1;
                continue;
            }
            if let Some(limit) = max_dist {
                if (b - a).norm() > limit {
                    continue;
                }
            }
            if is_visible(a, b, polygons) && stays_in_plan(a, b, polygons) {
                segments.push(Segment::new(a, b));
            }
        }
    }
    if degenerate > 0 {
        tracing::warn!(
            kind = kind.as_str(),
            degenerate,
            "skipped zero-length point pairs"
        );
    }
    tracing::debug!(
        kind = kind.as_str(),
        points = points.len(),
        lines = segments.len(),
        "build_lines"
    );
    LineSet::new(kind, segments)
}

/// Every mutually unobstructed pair.
pub fn build_visibility_lines(points: &[Point], polygons: &PolygonSet) -> LineSet {
    build_lines(LineKind::Visibility, points, polygons, None)
}

/// Unobstructed pairs no farther apart than `max_dist`.
pub fn build_connectivity_lines(points: &[Point], polygons: &PolygonSet, max_dist: f64) -> LineSet {
    build_lines(LineKind::Connectivity, points, polygons, Some(max_dist))
}

/// Dense overlay; same rule as visibility, expected over a finer lattice.
pub fn build_complex_connections(points: &[Point], polygons: &PolygonSet) -> LineSet {
    build_lines(LineKind::Complex, points, polygons, None)
}
