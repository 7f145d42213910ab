//! Common Neighbours link prediction

use crate::graph::{Graph, NodeId};
use crate::scoring::{eligible_candidates, rank, Recommendation, ScoreError};

/// counts shared elements of two sorted neighbor slices with a two-pointer merge
fn intersection_size(a: &[NodeId], b: &[NodeId]) -> usize {
    let mut count = 0;
    let mut i = 0;
    let mut j = 0;
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}

/// Recommends friends for `query` by counting common neighbors.
///
/// Every eligible candidate is scored, including those with no common
/// neighbors (score 0); only the query node and its existing neighbors are
/// excluded.
pub fn common_neighbours<G: Graph>(
    graph: &G,
    query: NodeId,
    n_rec: usize,
) -> Result<Vec<Recommendation>, ScoreError> {
    let candidates = eligible_candidates(graph, query)?;
    let query_neighbors = graph.neighbors(query);

    let scores = candidates
        .into_iter()
        .map(|candidate| Recommendation {
            candidate,
            score: intersection_size(query_neighbors, graph.neighbors(candidate)) as f64,
        })
        .collect();

    Ok(rank(scores, n_rec))
}
