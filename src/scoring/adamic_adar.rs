//! Adamic-Adar link prediction

use crate::graph::{Graph, NodeId};
use crate::scoring::{eligible_candidates, rank, Recommendation, ScoreError};

/// collects shared elements of two sorted neighbor slices
fn intersection(a: &[NodeId], b: &[NodeId]) -> Vec<NodeId> {
    let mut shared = Vec::new();
    let mut i = 0;
    let mut j = 0;
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                shared.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    shared
}

/// Recommends friends for `query` by the Adamic-Adar score: each common
/// neighbor `n` contributes `1 / log2(degree(n))`, so rare shared connections
/// weigh more than popular ones.
///
/// A common neighbor with degree <= 1 is skipped (contributes 0): log2(1) = 0
/// has no usable reciprocal, and in a simple graph such a neighbor cannot
/// occur anyway since it must be adjacent to both endpoints. Candidates with
/// no common neighbors score 0 and are kept.
pub fn adamic_adar<G: Graph>(
    graph: &G,
    query: NodeId,
    n_rec: usize,
) -> Result<Vec<Recommendation>, ScoreError> {
    let candidates = eligible_candidates(graph, query)?;
    let query_neighbors = graph.neighbors(query);

    let scores = candidates
        .into_iter()
        .map(|candidate| {
            let score = intersection(query_neighbors, graph.neighbors(candidate))
                .into_iter()
                .map(|shared| graph.degree(shared))
                .filter(|&degree| degree > 1)
                .map(|degree| 1.0 / (degree as f64).log2())
                .sum();
            Recommendation { candidate, score }
        })
        .collect();

    Ok(rank(scores, n_rec))
}
