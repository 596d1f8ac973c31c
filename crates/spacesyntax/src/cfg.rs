//! Analysis configuration.
//!
//! Policy
//! - Defaults reproduce the calibrated behavior of the drawing tool: 0.5 m grids
//!   for visibility and connectivity graphs, 0.1 m grids for the dense overlay
//!   and heat field, 0.75 m connectivity reach.
//! - Score multipliers are calibration constants, not derived quantities. They
//!   are kept configurable so they can be rebalanced without touching kernels.

use serde::{Deserialize, Serialize};

use crate::error::{check_spacing, AnalysisError};

/// Decimal places used to quantize graph node coordinates.
///
/// Shared by graph construction and every lookup into the graph.
pub const KEY_DECIMALS: u32 = 3;

/// Whole-pipeline configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisCfg {
    pub visibility_spacing: f64,
    pub connectivity_spacing: f64,
    pub connectivity_max_dist: f64,
    pub complex_spacing: f64,
    pub heat_cell_spacing: f64,
    pub score: ScoreCfg,
}

impl Default for AnalysisCfg {
    fn default() -> Self {
        Self {
            visibility_spacing: 0.5,
            connectivity_spacing: 0.5,
            connectivity_max_dist: 0.75,
            complex_spacing: 0.1,
            heat_cell_spacing: 0.1,
            score: ScoreCfg::default(),
        }
    }
}

impl AnalysisCfg {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        check_spacing("visibility_spacing", self.visibility_spacing)?;
        check_spacing("connectivity_spacing", self.connectivity_spacing)?;
        check_spacing("complex_spacing", self.complex_spacing)?;
        check_spacing("heat_cell_spacing", self.heat_cell_spacing)?;
        check_max_dist(self.connectivity_max_dist)?;
        self.score.validate()
    }
}

pub(crate) fn check_max_dist(max_dist: f64) -> Result<f64, AnalysisError> {
    if max_dist.is_nan() || max_dist < 0.0 {
        return Err(AnalysisError::invalid(
            "connectivity_max_dist",
            format!("{max_dist} is not a non-negative distance"),
        ));
    }
    Ok(max_dist)
}

/// Composite weights of the seven metrics. Must sum to 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub visibility: f64,
    pub connectivity: f64,
    pub integration: f64,
    pub clustering: f64,
    pub betweenness: f64,
    pub weighted_connectivity: f64,
    pub isovist: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            visibility: 0.20,
            connectivity: 0.20,
            integration: 0.20,
            clustering: 0.20,
            betweenness: 0.10,
            weighted_connectivity: 0.05,
            isovist: 0.05,
        }
    }
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.visibility
            + self.connectivity
            + self.integration
            + self.clustering
            + self.betweenness
            + self.weighted_connectivity
            + self.isovist
    }
}

/// Calibration constants of the score pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreCfg {
    /// Per-cell share of the busiest cell is multiplied by this, then by
    /// `visibility_boost`, then capped at 100.
    pub visibility_scale: f64,
    pub visibility_boost: f64,
    /// Practical upper bound on node degree in a 0.5 m lattice.
    pub connectivity_max_degree: f64,
    pub connectivity_damping: f64,
    pub integration_scale: f64,
    pub clustering_scale: f64,
    pub betweenness_scale: f64,
    /// Added to edge lengths before inverting.
    pub weighted_epsilon: f64,
    pub weighted_scale: f64,
    pub isovist_rays: usize,
    pub isovist_radius: f64,
    pub weights: ScoreWeights,
}

impl Default for ScoreCfg {
    fn default() -> Self {
        Self {
            visibility_scale: 100.0 * 2.0,
            visibility_boost: 5.0,
            connectivity_max_degree: 7.5,
            connectivity_damping: 0.9,
            integration_scale: 400.0 * 3.0,
            clustering_scale: 100.0 * 1.5,
            betweenness_scale: 500.0 * 5.0,
            weighted_epsilon: 0.001,
            weighted_scale: 45.0,
            isovist_rays: 16,
            isovist_radius: 1.5,
            weights: ScoreWeights::default(),
        }
    }
}

impl ScoreCfg {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.isovist_rays == 0 {
            return Err(AnalysisError::invalid("isovist_rays", "need at least one ray"));
        }
        if !(self.isovist_radius.is_finite() && self.isovist_radius > 0.0) {
            return Err(AnalysisError::invalid(
                "isovist_radius",
                format!("{} is not a positive radius", self.isovist_radius),
            ));
        }
        if !(self.connectivity_max_degree > 0.0) {
            return Err(AnalysisError::invalid(
                "connectivity_max_degree",
                "must be positive",
            ));
        }
        if !(self.weighted_epsilon > 0.0) {
            return Err(AnalysisError::invalid("weighted_epsilon", "must be positive"));
        }
        let scales = [
            ("visibility_scale", self.visibility_scale),
            ("visibility_boost", self.visibility_boost),
            ("connectivity_damping", self.connectivity_damping),
            ("integration_scale", self.integration_scale),
            ("clustering_scale", self.clustering_scale),
            ("betweenness_scale", self.betweenness_scale),
            ("weighted_scale", self.weighted_scale),
        ];
        for (name, v) in scales {
            if !(v.is_finite() && v >= 0.0) {
                return Err(AnalysisError::invalid(
                    name,
                    format!("{v} is not a finite non-negative multiplier"),
                ));
            }
        }
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(AnalysisError::invalid(
                "weights",
                format!("composite weights sum to {sum}, expected 1"),
            ));
        }
        Ok(())
    }
}
