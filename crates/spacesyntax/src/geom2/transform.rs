//! Plan edits as affine maps.
//!
//! Moving, rotating, mirroring and scaling polygons never touches the input; each
//! edit builds an `Affine2` and maps the vertices into a new `Polygon`.

use nalgebra::{Matrix2, Vector2};

use super::types::{Point, Polygon};

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    #[inline]
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::new(dx, dy),
        }
    }

    /// Linear part `m` applied about `center` instead of the origin.
    #[inline]
    pub fn about(m: Matrix2<f64>, center: Point) -> Self {
        Self {
            m,
            t: center - m * center,
        }
    }

    /// Counterclockwise rotation by `degrees` about `center`.
    pub fn rotation_about(center: Point, degrees: f64) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self::about(Matrix2::new(c, -s, s, c), center)
    }

    /// Axis-aligned scaling about `center`.
    pub fn scaling_about(center: Point, sx: f64, sy: f64) -> Self {
        Self::about(Matrix2::new(sx, 0.0, 0.0, sy), center)
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        self.m * p + self.t
    }

    pub fn apply_polygon(&self, poly: &Polygon) -> Polygon {
        Polygon::new(poly.vertices.iter().map(|&v| self.apply(v)).collect())
    }
}

impl Polygon {
    pub fn translated(&self, dx: f64, dy: f64) -> Polygon {
        Affine2::translation(dx, dy).apply_polygon(self)
    }

    pub fn rotated_about(&self, center: Point, degrees: f64) -> Polygon {
        Affine2::rotation_about(center, degrees).apply_polygon(self)
    }

    /// Reflection across the vertical line `x = axis_x`.
    pub fn mirrored_x(&self, axis_x: f64) -> Polygon {
        Affine2::scaling_about(Point::new(axis_x, 0.0), -1.0, 1.0).apply_polygon(self)
    }

    /// Reflection across the horizontal line `y = axis_y`.
    pub fn mirrored_y(&self, axis_y: f64) -> Polygon {
        Affine2::scaling_about(Point::new(0.0, axis_y), 1.0, -1.0).apply_polygon(self)
    }

    /// Grows each axis by the relative amounts `sx`, `sy` about the vertex
    /// centroid: a factor of `1 + s`, so `0.0` leaves the polygon unchanged.
    pub fn scaled_about_centroid(&self, sx: f64, sy: f64) -> Polygon {
        match self.centroid() {
            Some(c) => Affine2::scaling_about(c, 1.0 + sx, 1.0 + sy).apply_polygon(self),
            None => self.clone(),
        }
    }
}

/// Rounds both coordinates to the nearest multiple of `grid`.
#[inline]
pub fn snap_to_grid(p: Point, grid: f64) -> Point {
    if !(grid.is_finite() && grid > 0.0) {
        return p;
    }
    p.map(|v| (v / grid).round() * grid)
}

/// Vertex centroid over every vertex of every polygon in the group.
pub fn multi_centroid<'a>(polygons: impl IntoIterator<Item = &'a Polygon>) -> Option<Point> {
    let mut sum = Point::zeros();
    let mut count = 0usize;
    for poly in polygons {
        for v in &poly.vertices {
            sum += v;
            count += 1;
        }
    }
    (count > 0).then(|| sum / count as f64)
}
