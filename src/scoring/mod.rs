//! Link-prediction scoring over a read-only graph
//!
//! Two heuristics share a candidate filter and a single ranking step, so both
//! methods order and truncate their results identically.

mod candidates;
mod rank;

pub mod adamic_adar;
pub mod common_neighbours;

#[cfg(test)]
mod tests;

pub use adamic_adar::adamic_adar;
pub use candidates::eligible_candidates;
pub use common_neighbours::common_neighbours;
pub use rank::rank;

use crate::graph::{Graph, NodeId};

/// one recommendation: a candidate node and its similarity to the query node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    pub candidate: NodeId,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    CommonNeighbours,
    AdamicAdar,
}

impl Method {
    /// display name used in result table headers
    pub fn name(&self) -> &'static str {
        match self {
            Method::CommonNeighbours => "Common Neighbors",
            Method::AdamicAdar => "Adamic & Adar Score",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("query node {0} is not in the graph")]
    InvalidQueryNode(NodeId),
}

/// Scores every eligible candidate for `query` with the selected method and
/// returns the top `n_rec` recommendations, ordered by score descending with
/// ties broken by ascending node id.
pub fn score<G: Graph>(
    graph: &G,
    query: NodeId,
    method: Method,
    n_rec: usize,
) -> Result<Vec<Recommendation>, ScoreError> {
    match method {
        Method::CommonNeighbours => common_neighbours(graph, query, n_rec),
        Method::AdamicAdar => adamic_adar(graph, query, n_rec),
    }
}
