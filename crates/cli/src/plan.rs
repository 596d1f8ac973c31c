//! `.ssn` plan files.
//!
//! The drawing front end saves `{"allPolygons": [[{"x":..,"y":..}, ..], ..]}`
//! plus a `transform` view block. Only the polygons matter for analysis; other
//! keys are accepted and ignored.

use anyhow::{Context, Result};
use serde::Deserialize;
use spacesyntax::geom2::{Point, Polygon, PolygonSet};
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
struct Vertex {
    x: f64,
    y: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlanFile {
    all_polygons: Vec<Vec<Vertex>>,
}

pub fn parse_plan(bytes: &[u8]) -> Result<PolygonSet> {
    let file: PlanFile = serde_json::from_slice(bytes).context("parsing plan JSON")?;
    let polygons = file
        .all_polygons
        .into_iter()
        .map(|ring| Polygon::new(ring.into_iter().map(|v| Point::new(v.x, v.y)).collect()))
        .collect::<Vec<_>>();
    Ok(PolygonSet::new(polygons))
}

pub fn load_plan(path: &Path) -> Result<PolygonSet> {
    let bytes = fs::read(path).with_context(|| format!("reading plan {}", path.display()))?;
    let plan = parse_plan(&bytes).with_context(|| format!("in {}", path.display()))?;
    tracing::debug!(path = %path.display(), polygons = plan.len(), "plan loaded");
    Ok(plan)
}
