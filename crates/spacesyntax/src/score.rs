//! Seven-metric configuration score.
//!
//! Each metric is mapped onto [0, 100] with the calibration constants in
//! `ScoreCfg` and capped at 100. The composite total is the weighted sum,
//! rounded to the nearest integer. Every value gets a qualitative band.

use serde::Serialize;

use crate::cfg::ScoreCfg;
use crate::geom2::PolygonSet;
use crate::graph::{
    mean_clustering, mean_degree, mean_integration, mean_inverse_distance,
    mean_normalized_betweenness, node_isovists, Graph,
};
use crate::heatmap::HeatField;
use crate::lines::LineSet;

/// Qualitative reading of a 0..100 score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Band {
    VeryPoor,
    Poor,
    Moderate,
    Good,
    Excellent,
}

impl Band {
    pub fn of(score: f64) -> Self {
        if score >= 80.0 {
            Band::Excellent
        } else if score >= 60.0 {
            Band::Good
        } else if score >= 40.0 {
            Band::Moderate
        } else if score >= 20.0 {
            Band::Poor
        } else {
            Band::VeryPoor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Band::Excellent => "Excellent",
            Band::Good => "Good",
            Band::Moderate => "Moderate",
            Band::Poor => "Poor",
            Band::VeryPoor => "Very Poor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Band::Excellent => "Excellent – highly integrated layout",
            Band::Good => "Good – mostly open and accessible",
            Band::Moderate => "Moderate – partially connected",
            Band::Poor => "Poor – visual or spatial limitations",
            Band::VeryPoor => "Very Poor – fragmented layout",
        }
    }
}

/// The seven reported metrics, in report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Visibility,
    Connectivity,
    Integration,
    Clustering,
    Betweenness,
    WeightedConnectivity,
    Isovist,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::Visibility,
        Metric::Connectivity,
        Metric::Integration,
        Metric::Clustering,
        Metric::Betweenness,
        Metric::WeightedConnectivity,
        Metric::Isovist,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Visibility => "Visibility",
            Metric::Connectivity => "Connectivity",
            Metric::Integration => "Integration",
            Metric::Clustering => "Clustering",
            Metric::Betweenness => "Betweenness",
            Metric::WeightedConnectivity => "Weighted Conn.",
            Metric::Isovist => "Isovist Score",
        }
    }

    pub fn definition(&self) -> &'static str {
        match self {
            Metric::Visibility => "How visually accessible the space is overall.",
            Metric::Connectivity => "How many neighbouring points are directly reachable.",
            Metric::Integration => "How easily one can reach other spaces (few steps).",
            Metric::Clustering => "How interconnected each point's neighbours are.",
            Metric::Betweenness => "How central a point is on shortest paths.",
            Metric::WeightedConnectivity => "Connection strength, penalizing distance.",
            Metric::Isovist => "How much can be seen from a point (360°).",
        }
    }

    pub fn weight(&self, cfg: &ScoreCfg) -> f64 {
        let w = &cfg.weights;
        match self {
            Metric::Visibility => w.visibility,
            Metric::Connectivity => w.connectivity,
            Metric::Integration => w.integration,
            Metric::Clustering => w.clustering,
            Metric::Betweenness => w.betweenness,
            Metric::WeightedConnectivity => w.weighted_connectivity,
            Metric::Isovist => w.isovist,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MetricScore {
    pub metric: Metric,
    pub value: f64,
    pub band: Band,
}

/// Seven banded metrics plus the rounded composite.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoreReport {
    pub metrics: Vec<MetricScore>,
    pub total: f64,
    pub total_band: Band,
}

impl ScoreReport {
    /// Report for a plan with no usable graph: every metric 0, "Very Poor".
    pub fn zero() -> Self {
        Self::from_values([0.0; 7], &ScoreCfg::default())
    }

    fn from_values(values: [f64; 7], cfg: &ScoreCfg) -> Self {
        let metrics: Vec<MetricScore> = Metric::ALL
            .iter()
            .zip(values)
            .map(|(&metric, value)| MetricScore {
                metric,
                value,
                band: Band::of(value),
            })
            .collect();
        let total = metrics
            .iter()
            .map(|m| m.value * m.metric.weight(cfg))
            .sum::<f64>()
            .round();
        Self {
            metrics,
            total,
            total_band: Band::of(total),
        }
    }

    pub fn get(&self, metric: Metric) -> f64 {
        self.metrics
            .iter()
            .find(|m| m.metric == metric)
            .map_or(0.0, |m| m.value)
    }
}

#[inline]
fn cap(v: f64) -> f64 {
    v.min(100.0)
}

/// Average over registered cells of `min(share * scale * boost, 100)`.
pub fn visibility_score(field: &HeatField, cfg: &ScoreCfg) -> f64 {
    if field.is_empty() {
        return 0.0;
    }
    let max = field.max_count() as f64;
    let sum: f64 = field
        .iter()
        .map(|(_, count)| cap(count as f64 / max * cfg.visibility_scale * cfg.visibility_boost))
        .sum();
    sum / field.len() as f64
}

pub fn connectivity_score(g: &Graph, cfg: &ScoreCfg) -> f64 {
    cap(mean_degree(g) / cfg.connectivity_max_degree * 100.0 * cfg.connectivity_damping)
}

pub fn integration_score(g: &Graph, cfg: &ScoreCfg) -> f64 {
    cap(mean_integration(g) * cfg.integration_scale)
}

pub fn clustering_score(g: &Graph, cfg: &ScoreCfg) -> f64 {
    cap(mean_clustering(g) * cfg.clustering_scale)
}

pub fn betweenness_score(g: &Graph, cfg: &ScoreCfg) -> f64 {
    cap(mean_normalized_betweenness(g) * cfg.betweenness_scale)
}

pub fn weighted_connectivity_score(lines: &LineSet, cfg: &ScoreCfg) -> f64 {
    cap(mean_inverse_distance(lines, cfg.weighted_epsilon) * cfg.weighted_scale)
}

/// Mean isovist openness of the graph nodes, in percent.
pub fn isovist_score(g: &Graph, polygons: &PolygonSet, cfg: &ScoreCfg) -> f64 {
    if g.is_empty() {
        return 0.0;
    }
    let iso = node_isovists(g, polygons, cfg.isovist_rays, cfg.isovist_radius);
    iso.iter().sum::<f64>() / iso.len() as f64 * 100.0
}

/// Score the connectivity graph of a plan.
///
/// An empty line set or an empty heat field gives `ScoreReport::zero()`.
pub fn score_report(
    connectivity: &LineSet,
    field: &HeatField,
    polygons: &PolygonSet,
    cfg: &ScoreCfg,
) -> ScoreReport {
    if connectivity.is_empty() || field.is_empty() {
        tracing::debug!(
            lines = connectivity.len(),
            cells = field.len(),
            "nothing to score"
        );
        return ScoreReport::zero();
    }
    let g = Graph::from_lines(connectivity);
    if g.is_empty() {
        return ScoreReport::zero();
    }
    let values = [
        visibility_score(field, cfg),
        connectivity_score(&g, cfg),
        integration_score(&g, cfg),
        clustering_score(&g, cfg),
        betweenness_score(&g, cfg),
        weighted_connectivity_score(connectivity, cfg),
        isovist_score(&g, polygons, cfg),
    ];
    let report = ScoreReport::from_values(values, cfg);
    tracing::debug!(total = report.total, "score_report");
    report
}
