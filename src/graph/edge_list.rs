//! loads a graph from a whitespace-delimited edge list file
//!
//! File format: one `u v` pair per line, space separated, `#` comment lines
//! and blank lines skipped. The same format snap writes for projected graphs.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::graph::{AdjacencyGraph, NodeId};

/// reads an edge list file into an undirected simple graph
pub fn load_edge_list(path: &Path) -> Result<AdjacencyGraph> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_path(path)
        .with_context(|| format!("could not open edge list {}", path.display()))?;

    let mut edges: Vec<(NodeId, NodeId)> = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("bad record on line {}", line + 1))?;

        // runs of spaces produce empty fields, so take the non-empty ones
        let mut fields = record.iter().filter(|f| !f.is_empty());
        let (u, v) = match (fields.next(), fields.next()) {
            (Some(u), Some(v)) => (u, v),
            (None, _) => continue, // blank line
            _ => bail!("line {}: expected two node ids", line + 1),
        };

        let u: NodeId = u
            .parse()
            .with_context(|| format!("line {}: invalid node id {:?}", line + 1, u))?;
        let v: NodeId = v
            .parse()
            .with_context(|| format!("line {}: invalid node id {:?}", line + 1, v))?;
        edges.push((u, v));
    }

    Ok(AdjacencyGraph::from_edges(&edges))
}
