//! Node keys and the undirected adjacency graph built from a line set.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::cfg::KEY_DECIMALS;
use crate::geom2::Point;
use crate::lines::LineSet;

/// Grid point quantized to `KEY_DECIMALS` decimal places.
///
/// Floating duplicates of one lattice point (e.g. `0.30000000000000004` and
/// `0.3`) map to the same key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeKey {
    pub x: i64,
    pub y: i64,
}

impl NodeKey {
    #[inline]
    fn scale() -> f64 {
        10f64.powi(KEY_DECIMALS as i32)
    }

    #[inline]
    pub fn from_point(p: Point) -> Self {
        let s = Self::scale();
        Self {
            x: (p.x * s).round() as i64,
            y: (p.y * s).round() as i64,
        }
    }

    /// Representative coordinate of the key.
    #[inline]
    pub fn to_point(self) -> Point {
        let s = Self::scale();
        Point::new(self.x as f64 / s, self.y as f64 / s)
    }
}

/// Index of a node inside a `Graph`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

/// Undirected simple graph: no self-loops, parallel edges collapsed.
///
/// Nodes are stored in ascending key order and adjacency lists are sorted, so
/// every traversal visits nodes in the same order on every run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    pub nodes: Vec<NodeKey>,
    pub adj: Vec<Vec<usize>>,
}

impl Graph {
    pub fn from_lines(lines: &LineSet) -> Self {
        let mut map: BTreeMap<NodeKey, BTreeSet<NodeKey>> = BTreeMap::new();
        let mut loops = 0usize;
        for seg in lines {
            let ka = NodeKey::from_point(seg.a);
            let kb = NodeKey::from_point(seg.b);
            if ka == kb {
                loops += 1;
                continue;
            }
            map.entry(ka).or_default().insert(kb);
            map.entry(kb).or_default().insert(ka);
        }
        if loops > 0 {
            tracing::warn!(loops, "dropped lines collapsing onto a single node");
        }
        let nodes: Vec<NodeKey> = map.keys().copied().collect();
        let adj = map
            .values()
            .map(|nbrs| {
                nbrs.iter()
                    // keys come from `map`, so the search always hits
                    .filter_map(|k| nodes.binary_search(k).ok())
                    .collect()
            })
            .collect();
        let graph = Self { nodes, adj };
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph_from_lines"
        );
        graph
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn id_of(&self, key: NodeKey) -> Option<NodeId> {
        self.nodes.binary_search(&key).ok().map(NodeId)
    }

    /// Lookup by coordinate, quantized the same way as construction.
    pub fn id_at(&self, p: Point) -> Option<NodeId> {
        self.id_of(NodeKey::from_point(p))
    }

    #[inline]
    pub fn degree(&self, id: NodeId) -> usize {
        self.adj[id.0].len()
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.adj[a].binary_search(&b).is_ok()
    }

    pub fn point(&self, id: NodeId) -> Point {
        self.nodes[id.0].to_point()
    }
}
