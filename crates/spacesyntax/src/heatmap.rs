//! Heat field: how often visibility lines pass over each cell of the target polygon.
//!
//! Cells are floor-aligned squares of side `spacing`, identified by integer
//! lattice indices so keys never depend on float formatting. Only cells whose
//! center lies inside the target polygon are registered; samples landing in any
//! other cell are dropped.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::geom2::{Point, Polygon};
use crate::lines::LineSet;

/// Lattice index of a cell: origin is `(ix * spacing, iy * spacing)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CellKey {
    pub ix: i64,
    pub iy: i64,
}

impl CellKey {
    #[inline]
    pub fn containing(p: Point, spacing: f64) -> Self {
        Self {
            ix: (p.x / spacing).floor() as i64,
            iy: (p.y / spacing).floor() as i64,
        }
    }
}

/// One registered cell as handed to renderers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeatCell {
    pub x: f64,
    pub y: f64,
    pub count: u32,
    pub percentage: f64,
}

/// Crossing counts of every registered cell.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatField {
    spacing: f64,
    counts: BTreeMap<CellKey, u32>,
    max_count: u32,
}

impl HeatField {
    /// Field with no registered cells.
    pub fn empty(spacing: f64) -> Self {
        Self {
            spacing,
            counts: BTreeMap::new(),
            max_count: 1,
        }
    }

    #[inline]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Largest count over all cells, never below 1.
    #[inline]
    pub fn max_count(&self) -> u32 {
        self.max_count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `None` for cells that were never registered.
    pub fn count(&self, key: CellKey) -> Option<u32> {
        self.counts.get(&key).copied()
    }

    pub fn count_at(&self, p: Point) -> Option<u32> {
        self.count(CellKey::containing(p, self.spacing))
    }

    /// Share of the busiest cell, in percent.
    pub fn percentage(&self, key: CellKey) -> Option<f64> {
        self.count(key)
            .map(|c| c as f64 / self.max_count as f64 * 100.0)
    }

    pub fn origin(&self, key: CellKey) -> Point {
        Point::new(key.ix as f64 * self.spacing, key.iy as f64 * self.spacing)
    }

    pub fn center(&self, key: CellKey) -> Point {
        self.origin(key) + Point::repeat(self.spacing / 2.0)
    }

    /// Registered cells in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (CellKey, u32)> + '_ {
        self.counts.iter().map(|(&k, &c)| (k, c))
    }

    pub fn cells(&self) -> Vec<HeatCell> {
        self.iter()
            .map(|(key, count)| {
                let o = self.origin(key);
                HeatCell {
                    x: o.x,
                    y: o.y,
                    count,
                    percentage: count as f64 / self.max_count as f64 * 100.0,
                }
            })
            .collect()
    }
}

/// Register the cells of `main` at `spacing`, then count visibility-line samples.
///
/// Each line is sampled at `ceil(length / (spacing / 2))` equal steps, both ends
/// included. Zero-length lines are skipped. A non-positive `spacing` yields an
/// empty field.
pub fn build_heat_field(main: &Polygon, lines: &LineSet, spacing: f64) -> HeatField {
    let mut field = HeatField::empty(spacing);
    if !(spacing.is_finite() && spacing > 0.0) {
        tracing::warn!(spacing, "heat field spacing must be positive");
        return field;
    }
    let Some(bounds) = main.bounds().filter(|_| main.is_qualifying()) else {
        return field;
    };

    let ix0 = (bounds.min.x / spacing).floor() as i64;
    let iy0 = (bounds.min.y / spacing).floor() as i64;
    let ix1 = ((bounds.max.x + spacing) / spacing).floor() as i64;
    let iy1 = ((bounds.max.y + spacing) / spacing).floor() as i64;
    for ix in ix0..=ix1 {
        for iy in iy0..=iy1 {
            let key = CellKey { ix, iy };
            if main.contains(field.center(key)) {
                field.counts.insert(key, 0);
            }
        }
    }

    let step = spacing / 2.0;
    let mut skipped = 0usize;
    for seg in lines {
        if seg.is_degenerate() {
            skipped += 1;
            continue;
        }
        let samples = (seg.length() / step).ceil() as usize;
        for i in 0..=samples {
            let p = seg.lerp(i as f64 / samples as f64);
            if let Some(c) = field.counts.get_mut(&CellKey::containing(p, spacing)) {
                *c += 1;
            }
        }
    }
    if skipped > 0 {
        tracing::warn!(skipped, "skipped zero-length visibility lines");
    }

    field.max_count = field.counts.values().copied().max().unwrap_or(0).max(1);
    tracing::debug!(
        cells = field.len(),
        lines = lines.len(),
        max_count = field.max_count,
        "build_heat_field"
    );
    field
}
