//! a graph implementation using per-node adjacency vectors
//!
//! Node ids come straight from the input edge list and need not be dense, so
//! the graph keeps a sorted id table and maps ids to internal indices.

use std::collections::{BTreeSet, HashMap};

use crate::graph::{Graph, NodeId};

pub struct AdjacencyGraph {
    ids: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    neighborhoods: Vec<Vec<NodeId>>,
}

impl AdjacencyGraph {
    /// builds a graph from undirected edges; isolated nodes can be added via `from_parts`
    pub fn from_edges(edges: &[(NodeId, NodeId)]) -> AdjacencyGraph {
        AdjacencyGraph::from_parts(std::iter::empty(), edges)
    }

    /// builds a graph from a node set and undirected edges
    ///
    /// The node set is the union of `nodes` and every edge endpoint. Edges are
    /// symmetrized, duplicate edges collapse, and self-loops are dropped.
    pub fn from_parts(
        nodes: impl IntoIterator<Item = NodeId>,
        edges: &[(NodeId, NodeId)],
    ) -> AdjacencyGraph {
        let mut id_set: BTreeSet<NodeId> = nodes.into_iter().collect();
        for &(u, v) in edges {
            id_set.insert(u);
            id_set.insert(v);
        }

        let ids: Vec<NodeId> = id_set.into_iter().collect();
        let index: HashMap<NodeId, usize> =
            ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

        let mut neighborhoods: Vec<Vec<NodeId>> = vec![Vec::new(); ids.len()];
        for &(u, v) in edges {
            if u == v {
                continue;
            }
            neighborhoods[index[&u]].push(v);
            neighborhoods[index[&v]].push(u);
        }
        for neighborhood in neighborhoods.iter_mut() {
            neighborhood.sort_unstable();
            neighborhood.dedup();
        }

        AdjacencyGraph {
            ids,
            index,
            neighborhoods,
        }
    }

    /// returns the number of nodes in the graph
    pub fn n(&self) -> usize {
        self.ids.len()
    }

    /// number of undirected edges
    pub fn total_edges(&self) -> usize {
        self.neighborhoods.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    /// maximum degree of the graph
    pub fn max_degree(&self) -> usize {
        self.neighborhoods
            .iter()
            .map(|n| n.len())
            .max()
            .unwrap_or(0)
    }

    fn index_of(&self, v: NodeId) -> usize {
        *self
            .index
            .get(&v)
            .unwrap_or_else(|| panic!("node {v} is not in the graph"))
    }

    pub(crate) fn neighborhoods(&self) -> &[Vec<NodeId>] {
        &self.neighborhoods
    }
}

impl Graph for AdjacencyGraph {
    fn node_ids(&self) -> &[NodeId] {
        &self.ids
    }

    fn neighbors(&self, v: NodeId) -> &[NodeId] {
        &self.neighborhoods[self.index_of(v)]
    }

    fn contains(&self, v: NodeId) -> bool {
        self.index.contains_key(&v)
    }
}
