use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::process;
use std::time::Instant;

use itertools::Itertools;

use friendrec::graph::edge_list::load_edge_list;
use friendrec::graph::Graph;

fn main() {
    // Get the filename from command-line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <edge_list_file>", args[0]);
        process::exit(1);
    }

    let graph_file = &args[1];
    println!("Reading graph from file: {}", graph_file);

    // Measure the time it takes to read the graph
    let start = Instant::now();
    let graph = match load_edge_list(Path::new(graph_file)) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error reading edge list: {}", e);
            process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    println!("Graph loaded in {:.3} seconds", elapsed.as_secs_f64());
    println!("Number of nodes: {}", graph.n());
    println!("Number of undirected edges: {}", graph.total_edges());

    let mut min_degree = usize::MAX;
    let mut degree_distribution = HashMap::new();

    for &node in graph.node_ids() {
        let degree = graph.degree(node);
        min_degree = min_degree.min(degree);
        *degree_distribution.entry(degree).or_insert(0) += 1;
    }

    println!(
        "Average degree: {:.2}",
        2.0 * graph.total_edges() as f64 / graph.n() as f64
    );
    println!("Minimum degree: {}", min_degree);
    println!("Maximum degree: {}", graph.max_degree());

    // Show degree distribution (limit to 10 most common degrees)
    println!("\nDegree distribution (top 10):");
    let mut distribution: Vec<_> = degree_distribution.into_iter().collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1)); // Sort by frequency (descending)

    for (i, (degree, count)) in distribution.iter().take(10).enumerate() {
        println!(
            "  {}: {} nodes with degree {} ({:.2}%)",
            i + 1,
            count,
            degree,
            (*count as f64 / graph.n() as f64) * 100.0
        );
    }

    // Sample some nodes and their neighborhoods
    println!("\nSample of neighborhoods:");
    for &node in graph.node_ids().iter().take(5) {
        println!(
            "  {} -> [{}]",
            node,
            graph.neighbors(node).iter().join(", ")
        );
    }
}
