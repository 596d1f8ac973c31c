//! Connectivity graph and its metric kernels.
//!
//! Purpose
//! - Turn a connectivity line set into an undirected graph keyed by quantized
//!   coordinates (`NodeKey`, `KEY_DECIMALS` places), merging float duplicates of
//!   one lattice point.
//! - Provide the raw kernels of the score report: mean degree, BFS integration,
//!   clustering, Brandes betweenness, inverse-distance weighting and isovist
//!   ray casting.
//!
//! Layout
//! - `types.rs` holds keys and the graph; `metrics.rs` the kernels.

mod metrics;
mod types;

pub use metrics::{
    bfs_depths, brandes_betweenness, isovist_openness, local_clustering, mean_clustering,
    mean_degree, mean_depths, mean_integration, mean_inverse_distance,
    mean_normalized_betweenness, node_isovists,
};
pub use types::{Graph, NodeId, NodeKey};

#[cfg(test)]
mod tests;
