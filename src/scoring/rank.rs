//! shared ordering and truncation of scored candidates

use crate::scoring::Recommendation;

/// Sorts recommendations by score descending, breaking ties by ascending
/// candidate id, and keeps the first `n_rec`.
///
/// Both scoring methods go through this function so their tie-break semantics
/// are identical. Fewer than `n_rec` entries are returned as-is; `n_rec` of
/// zero yields an empty list.
pub fn rank(mut scores: Vec<Recommendation>, n_rec: usize) -> Vec<Recommendation> {
    if n_rec == 0 {
        return Vec::new();
    }

    scores.sort_unstable_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.candidate.cmp(&b.candidate))
    });
    scores.truncate(n_rec);
    scores
}
