use std::env::args;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use friendrec::graph::edge_list::load_edge_list;
use friendrec::graph::NodeId;
use friendrec::scoring::{score, Method, Recommendation};
use friendrec::util::table::render_table;

/// driver settings, passed explicitly instead of living in a global
struct Settings {
    graph_path: PathBuf,
    query_nodes: Vec<NodeId>,
    n_rec: usize,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            graph_path: PathBuf::from("contact-high-school-proj-graph.txt"),
            query_nodes: vec![14, 35, 107, 200],
            n_rec: 10,
        }
    }
}

fn main() -> Result<()> {
    let mut settings = Settings::default();
    if let Some(path) = args().nth(1) {
        settings.graph_path = PathBuf::from(path);
    }

    let start = Instant::now();
    let graph = load_edge_list(&settings.graph_path)?;
    let elapsed = start.elapsed();
    println!(
        "read graph in {}.{:03} seconds",
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );

    // compute everything first, render afterwards
    let start = Instant::now();
    let mut reports: Vec<(NodeId, Method, Vec<Recommendation>)> = Vec::new();
    for &node in &settings.query_nodes {
        println!("Recommendations for Node: {} ...", node);
        for method in [Method::CommonNeighbours, Method::AdamicAdar] {
            let recs = score(&graph, node, method, settings.n_rec)?;
            reports.push((node, method, recs));
        }
    }
    let elapsed = start.elapsed();
    println!(
        "scored {} queries in {}.{:03} seconds",
        reports.len(),
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );

    for (node, method, recs) in &reports {
        print!("{}", render_table(*node, method.name(), recs));
    }

    Ok(())
}
