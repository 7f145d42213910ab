//! Traits for graph interfaces

pub type NodeId = u32;

/// Read-only view of an undirected simple graph.
///
/// Implementations must keep each neighbor slice sorted ascending and free of
/// duplicates and self-loops, and must report edges symmetrically:
/// `has_edge(a, b) == has_edge(b, a)`.
pub trait Graph {
    /// all node ids in the graph, sorted ascending
    fn node_ids(&self) -> &[NodeId];

    /// the neighbors of a node, sorted ascending
    ///
    /// Panics if `v` is not in the graph; callers validate with `contains`.
    fn neighbors(&self, v: NodeId) -> &[NodeId];

    fn contains(&self, v: NodeId) -> bool;

    /// undirected degree of a node
    fn degree(&self, v: NodeId) -> usize {
        self.neighbors(v).len()
    }

    fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }
}
