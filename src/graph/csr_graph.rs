//! compressed sparse row graph representation
//!
//! Same trait surface as `AdjacencyGraph` with all neighborhoods packed into a
//! single flat array. Exists to show that scoring is representation-agnostic.

use std::collections::HashMap;

use crate::graph::{AdjacencyGraph, Graph, NodeId};

pub struct CsrGraph {
    ids: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    offsets: Vec<usize>,
    edges: Vec<NodeId>,
}

impl CsrGraph {
    /// returns the number of nodes in the graph
    pub fn n(&self) -> usize {
        self.ids.len()
    }

    /// number of undirected edges
    pub fn total_edges(&self) -> usize {
        self.edges.len() / 2
    }

    fn index_of(&self, v: NodeId) -> usize {
        *self
            .index
            .get(&v)
            .unwrap_or_else(|| panic!("node {v} is not in the graph"))
    }
}

impl From<&AdjacencyGraph> for CsrGraph {
    fn from(graph: &AdjacencyGraph) -> CsrGraph {
        let ids = graph.node_ids().to_vec();
        let index: HashMap<NodeId, usize> =
            ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        let mut offsets = Vec::with_capacity(ids.len() + 1);
        let mut edges = Vec::new();
        offsets.push(0);
        for neighborhood in graph.neighborhoods() {
            edges.extend_from_slice(neighborhood);
            offsets.push(edges.len());
        }

        CsrGraph {
            ids,
            index,
            offsets,
            edges,
        }
    }
}

impl From<AdjacencyGraph> for CsrGraph {
    fn from(graph: AdjacencyGraph) -> CsrGraph {
        CsrGraph::from(&graph)
    }
}

impl Graph for CsrGraph {
    fn node_ids(&self) -> &[NodeId] {
        &self.ids
    }

    fn neighbors(&self, v: NodeId) -> &[NodeId] {
        let i = self.index_of(v);
        &self.edges[self.offsets[i]..self.offsets[i + 1]]
    }

    fn contains(&self, v: NodeId) -> bool {
        self.index.contains_key(&v)
    }
}
