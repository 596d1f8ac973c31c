//! Entry points for the drawing front end.
//!
//! Each call is a one-shot pure transformation: a `PolygonSet` snapshot goes in,
//! a fresh value comes out, and nothing is cached between calls. Calls that need
//! a target polygon pick the largest qualifying one and refuse to run without
//! it.

use crate::cfg::{check_max_dist, AnalysisCfg, ScoreCfg};
use crate::error::{check_spacing, AnalysisError};
use crate::geom2::{Polygon, PolygonSet};
use crate::heatmap::{build_heat_field, HeatField};
use crate::lines::{
    build_complex_connections, build_connectivity_lines, build_visibility_lines, LineSet,
};
use crate::sampling::sample_grid;
use crate::score::{score_report, ScoreReport};

/// Largest qualifying polygon, or the precondition error.
pub fn target_polygon(polygons: &PolygonSet) -> Result<&Polygon, AnalysisError> {
    polygons.largest().ok_or(AnalysisError::NoQualifyingPolygon)
}

/// Visibility lines over the target polygon sampled at `spacing`.
pub fn analyze_visibility(polygons: &PolygonSet, spacing: f64) -> Result<LineSet, AnalysisError> {
    let spacing = check_spacing("visibility_spacing", spacing)?;
    let target = target_polygon(polygons)?;
    let points = sample_grid(target, spacing);
    Ok(build_visibility_lines(&points, polygons))
}

/// Connectivity lines: visibility restricted to pairs within `max_dist`.
pub fn analyze_connectivity(
    polygons: &PolygonSet,
    spacing: f64,
    max_dist: f64,
) -> Result<LineSet, AnalysisError> {
    let spacing = check_spacing("connectivity_spacing", spacing)?;
    let max_dist = check_max_dist(max_dist)?;
    let target = target_polygon(polygons)?;
    let points = sample_grid(target, spacing);
    Ok(build_connectivity_lines(&points, polygons, max_dist))
}

/// Dense overlay over a fine lattice.
pub fn analyze_complex_connections(
    polygons: &PolygonSet,
    spacing: f64,
) -> Result<LineSet, AnalysisError> {
    let spacing = check_spacing("complex_spacing", spacing)?;
    let target = target_polygon(polygons)?;
    let points = sample_grid(target, spacing);
    Ok(build_complex_connections(&points, polygons))
}

/// Heat field of `visibility` over `main`.
pub fn build_heatmap(
    main: &Polygon,
    visibility: &LineSet,
    cell_spacing: f64,
) -> Result<HeatField, AnalysisError> {
    let cell_spacing = check_spacing("heat_cell_spacing", cell_spacing)?;
    if !main.is_qualifying() {
        return Err(AnalysisError::NoQualifyingPolygon);
    }
    Ok(build_heat_field(main, visibility, cell_spacing))
}

/// Score report with the default calibration.
pub fn compute_score_report(
    connectivity: &LineSet,
    field: &HeatField,
    polygons: &PolygonSet,
) -> ScoreReport {
    score_report(connectivity, field, polygons, &ScoreCfg::default())
}

/// Everything one analysis run produces.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisBundle {
    /// Index of the target polygon inside the input set.
    pub target: usize,
    pub visibility: LineSet,
    pub connectivity: LineSet,
    pub heat: HeatField,
    pub report: ScoreReport,
}

/// Full pipeline: sample, build both line sets, aggregate the heat field, score.
pub fn run_analysis(
    polygons: &PolygonSet,
    cfg: &AnalysisCfg,
) -> Result<AnalysisBundle, AnalysisError> {
    cfg.validate()?;
    let target = polygons
        .largest_index()
        .ok_or(AnalysisError::NoQualifyingPolygon)?;
    let main = &polygons.polygons[target];
    let _span = tracing::debug_span!("run_analysis", target, polygons = polygons.len()).entered();

    let visibility = build_visibility_lines(&sample_grid(main, cfg.visibility_spacing), polygons);
    let connectivity = build_connectivity_lines(
        &sample_grid(main, cfg.connectivity_spacing),
        polygons,
        cfg.connectivity_max_dist,
    );
    let heat = build_heat_field(main, &visibility, cfg.heat_cell_spacing);
    let report = score_report(&connectivity, &heat, polygons, &cfg.score);
    tracing::info!(
        visibility = visibility.len(),
        connectivity = connectivity.len(),
        cells = heat.len(),
        total = report.total,
        "analysis complete"
    );
    Ok(AnalysisBundle {
        target,
        visibility,
        connectivity,
        heat,
        report,
    })
}
