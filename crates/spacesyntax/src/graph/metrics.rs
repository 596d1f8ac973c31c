//! Graph kernels behind the configuration scores.
//!
//! Each kernel returns raw, unscaled values; calibration and capping live in
//! `crate::score`. All traversals are unweighted (one hop per edge).

use std::collections::VecDeque;

use crate::geom2::{Point, PolygonSet};
use crate::lines::LineSet;
use crate::oracle::is_visible;

use super::types::{Graph, NodeId};

/// Mean node degree; 0 for an empty graph.
pub fn mean_degree(g: &Graph) -> f64 {
    if g.is_empty() {
        return 0.0;
    }
    let total: usize = g.adj.iter().map(Vec::len).sum();
    total as f64 / g.node_count() as f64
}

/// BFS hop distance from `source` to every node; `None` where unreachable.
pub fn bfs_depths(g: &Graph, source: NodeId) -> Vec<Option<usize>> {
    let mut depth = vec![None; g.node_count()];
    let mut queue = VecDeque::new();
    depth[source.0] = Some(0);
    queue.push_back(source.0);
    while let Some(v) = queue.pop_front() {
        let d = depth[v].unwrap_or(0);
        for &w in &g.adj[v] {
            if depth[w].is_none() {
                depth[w] = Some(d + 1);
                queue.push_back(w);
            }
        }
    }
    depth
}

/// Mean depth from each node to the nodes it can reach.
///
/// `None` for isolated nodes. Traversals never leave the node's component.
pub fn mean_depths(g: &Graph) -> Vec<Option<f64>> {
    (0..g.node_count())
        .map(|s| {
            let (sum, reached) = bfs_depths(g, NodeId(s))
                .into_iter()
                .enumerate()
                .filter(|&(v, _)| v != s)
                .filter_map(|(_, d)| d)
                .fold((0usize, 0usize), |(sum, n), d| (sum + d, n + 1));
            (reached > 0).then(|| sum as f64 / reached as f64)
        })
        .collect()
}

/// Average of `1 / mean_depth` over nodes with at least one reachable node.
pub fn mean_integration(g: &Graph) -> f64 {
    let (sum, n) = mean_depths(g)
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, n), md| (sum + 1.0 / md, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

/// Local clustering coefficient per node (0 for degree below 2).
pub fn local_clustering(g: &Graph) -> Vec<f64> {
    g.adj
        .iter()
        .map(|nbrs| {
            let k = nbrs.len();
            if k < 2 {
                return 0.0;
            }
            let mut links = 0usize;
            for (i, &a) in nbrs.iter().enumerate() {
                for &b in &nbrs[i + 1..] {
                    if g.has_edge(a, b) {
                        links += 1;
                    }
                }
            }
            links as f64 / (k * (k - 1) / 2) as f64
        })
        .collect()
}

/// Clustering coefficient averaged over all nodes.
pub fn mean_clustering(g: &Graph) -> f64 {
    if g.is_empty() {
        return 0.0;
    }
    local_clustering(g).iter().sum::<f64>() / g.node_count() as f64
}

/// Brandes betweenness, accumulated over every ordered source.
///
/// On an undirected graph each unordered pair contributes from both ends, so
/// raw values are twice the textbook pair count.
pub fn brandes_betweenness(g: &Graph) -> Vec<f64> {
    let n = g.node_count();
    let mut bc = vec![0.0; n];
    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut sigma = vec![0.0f64; n];
    let mut dist = vec![-1i64; n];
    let mut delta = vec![0.0f64; n];
    let mut queue = VecDeque::with_capacity(n);

    for s in 0..n {
        order.clear();
        for p in preds.iter_mut() {
            p.clear();
        }
        sigma.fill(0.0);
        dist.fill(-1);
        delta.fill(0.0);
        sigma[s] = 1.0;
        dist[s] = 0;
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            order.push(v);
            for &w in &g.adj[v] {
                if dist[w] < 0 {
                    dist[w] = dist[v] + 1;
                    queue.push_back(w);
                }
                if dist[w] == dist[v] + 1 {
                    sigma[w] += sigma[v];
                    preds[w].push(v);
                }
            }
        }

        while let Some(w) = order.pop() {
            for &v in &preds[w] {
                delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
            }
            if w != s {
                bc[w] += delta[w];
            }
        }
    }
    bc
}

/// Mean of raw betweenness normalized by `(n-1)(n-2)/2`; 0 for `n <= 2`.
pub fn mean_normalized_betweenness(g: &Graph) -> f64 {
    let n = g.node_count();
    if n <= 2 {
        return 0.0;
    }
    let max_pairs = ((n - 1) * (n - 2)) as f64 / 2.0;
    brandes_betweenness(g).iter().map(|b| b / max_pairs).sum::<f64>() / n as f64
}

/// Mean of `1 / (length + epsilon)` over the lines; 0 for an empty set.
pub fn mean_inverse_distance(lines: &LineSet, epsilon: f64) -> f64 {
    if lines.is_empty() {
        return 0.0;
    }
    lines
        .iter()
        .map(|s| 1.0 / (s.length() + epsilon))
        .sum::<f64>()
        / lines.len() as f64
}

/// Share of `rays` equally spaced directions (starting along +x) in which the
/// point sees `radius` meters without crossing a wall.
pub fn isovist_openness(p: Point, polygons: &PolygonSet, rays: usize, radius: f64) -> f64 {
    if rays == 0 {
        return 0.0;
    }
    let open = (0..rays)
        .filter(|&i| {
            let angle = i as f64 / rays as f64 * std::f64::consts::TAU;
            let end = p + Point::new(angle.cos(), angle.sin()) * radius;
            is_visible(p, end, polygons)
        })
        .count();
    open as f64 / rays as f64
}

/// Isovist openness of every graph node.
pub fn node_isovists(g: &Graph, polygons: &PolygonSet, rays: usize, radius: f64) -> Vec<f64> {
    (0..g.node_count())
        .map(|i| isovist_openness(g.point(NodeId(i)), polygons, rays, radius))
        .collect()
}
