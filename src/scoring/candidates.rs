//! shared candidate filter

use crate::graph::{Graph, NodeId};
use crate::scoring::ScoreError;

/// Returns every node eligible for recommendation to `query`: all nodes minus
/// the query node itself and the nodes already adjacent to it.
///
/// Candidates come back in node-id order (the enumeration order of the graph);
/// the ranking step decides the final order.
pub fn eligible_candidates<G: Graph>(
    graph: &G,
    query: NodeId,
) -> Result<Vec<NodeId>, ScoreError> {
    if !graph.contains(query) {
        return Err(ScoreError::InvalidQueryNode(query));
    }

    Ok(graph
        .node_ids()
        .iter()
        .copied()
        .filter(|&c| c != query && !graph.has_edge(query, c))
        .collect())
}
