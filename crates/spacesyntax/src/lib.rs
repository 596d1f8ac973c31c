//! Space-syntax analysis of 2D floor plans.
//!
//! A plan is a set of simple polygons in meters. The largest qualifying polygon
//! is sampled on a square lattice; every polygon edge acts as a wall. From the
//! samples the crate builds visibility and connectivity line sets, a visibility
//! heat field, and a seven-metric configuration score.
//!
//! Layout
//! - `geom2`: points, segments, polygons, predicates and affine edits.
//! - `oracle`: the wall-obstruction test every line builder shares.
//! - `sampling`, `lines`, `heatmap`: the analysis products.
//! - `graph`, `score`: the connectivity graph, its kernels and the report.
//! - `api`: one-shot entry points and the full `run_analysis` pipeline.
//!
//! All operations are pure and deterministic: the same polygons and parameters
//! give bit-identical results.

pub mod api;
pub mod cfg;
pub mod error;
pub mod geom2;
pub mod graph;
pub mod heatmap;
pub mod lines;
pub mod oracle;
pub mod sampling;
pub mod score;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use api::{
    analyze_complex_connections, analyze_connectivity, analyze_visibility, build_heatmap,
    compute_score_report, run_analysis, AnalysisBundle,
};
pub use cfg::{AnalysisCfg, ScoreCfg, ScoreWeights};
pub use error::AnalysisError;
pub use geom2::{Point, Polygon, PolygonSet};

/// Common exports for callers driving a full analysis.
pub mod prelude {
    pub use crate::api::{
        analyze_complex_connections, analyze_connectivity, analyze_visibility, build_heatmap,
        compute_score_report, run_analysis, target_polygon, AnalysisBundle,
    };
    pub use crate::cfg::{AnalysisCfg, ScoreCfg, ScoreWeights, KEY_DECIMALS};
    pub use crate::error::AnalysisError;
    pub use crate::geom2::{Bounds2, Point, Polygon, PolygonSet, PolygonStats, Segment};
    pub use crate::heatmap::{HeatCell, HeatField};
    pub use crate::lines::{LineKind, LineSet};
    pub use crate::score::{Band, Metric, MetricScore, ScoreReport};
}
