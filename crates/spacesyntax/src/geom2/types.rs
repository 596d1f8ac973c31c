//! Value types for plan geometry.
//!
//! - `Point`: nalgebra column vector in meters.
//! - `Segment`: transient pair of points (intersection tests, line sets).
//! - `Polygon`: implicit ring of vertices, read-only during analysis.
//! - `PolygonSet`: immutable snapshot of every polygon in a plan.

use nalgebra::Vector2;
use serde::Serialize;

use super::primitives::{
    centroid, point_in_polygon, point_on_boundary, polygon_area, polygon_perimeter,
};
use super::EPS;

/// A plan coordinate in meters.
pub type Point = Vector2<f64>;

/// Ordered pair of points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }
    /// Zero-length segments carry no direction and are skipped by every stage.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
    /// Point at parameter `t` (0 → `a`, 1 → `b`).
    #[inline]
    pub fn lerp(&self, t: f64) -> Point {
        self.a * (1.0 - t) + self.b * t
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Point,
    pub max: Point,
}

impl Bounds2 {
    pub fn of(points: &[Point]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
        Some(Self { min, max })
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Closed polygon given by its vertex ring.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn from_xy(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// At least three vertices; anything smaller never takes part in analysis.
    #[inline]
    pub fn is_qualifying(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Edges `(v[i], v[i+1])` including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    pub fn bounds(&self) -> Option<Bounds2> {
        Bounds2::of(&self.vertices)
    }

    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices)
    }

    pub fn perimeter(&self) -> f64 {
        polygon_perimeter(&self.vertices)
    }

    pub fn centroid(&self) -> Option<Point> {
        centroid(&self.vertices)
    }

    /// Strict ray-cast containment.
    pub fn contains(&self, p: Point) -> bool {
        point_in_polygon(p, &self.vertices)
    }

    /// Containment that also accepts points on the boundary (within `EPS`).
    pub fn contains_inclusive(&self, p: Point) -> bool {
        self.is_qualifying()
            && (point_on_boundary(p, &self.vertices, EPS) || point_in_polygon(p, &self.vertices))
    }

    pub fn stats(&self) -> PolygonStats {
        PolygonStats {
            vertices: self.len(),
            perimeter: self.perimeter(),
            area: self.area(),
            centroid: self.centroid().map(|c| (c.x, c.y)),
        }
    }
}

/// Summary shown for a polygon in plan statistics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PolygonStats {
    pub vertices: usize,
    pub perimeter: f64,
    pub area: f64,
    pub centroid: Option<(f64, f64)>,
}

/// Every polygon present at analysis time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolygonSet {
    pub polygons: Vec<Polygon>,
}

impl PolygonSet {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    /// Polygons with at least three vertices.
    pub fn qualifying(&self) -> impl Iterator<Item = &Polygon> + '_ {
        self.polygons.iter().filter(|p| p.is_qualifying())
    }

    /// Index of the qualifying polygon with the largest area. Ties keep the first.
    pub fn largest_index(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, poly) in self.polygons.iter().enumerate() {
            if !poly.is_qualifying() {
                continue;
            }
            let area = poly.area();
            match best {
                Some((_, a)) if area <= a => {}
                _ => best = Some((i, area)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Target polygon of an analysis run.
    pub fn largest(&self) -> Option<&Polygon> {
        self.largest_index().map(|i| &self.polygons[i])
    }
}

impl From<Vec<Polygon>> for PolygonSet {
    fn from(polygons: Vec<Polygon>) -> Self {
        Self::new(polygons)
    }
}

impl<'a> IntoIterator for &'a PolygonSet {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;
    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}
