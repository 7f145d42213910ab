use clap::{Arg, Command};
use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rayon::prelude::*;

use friendrec::graph::edge_list::load_edge_list;
use friendrec::graph::{Graph, NodeId};
use friendrec::scoring::{score, Method};
use friendrec::util::table::render_table;

fn main() -> Result<()> {
    let matches = Command::new("recommend")
        .about("Computes friend recommendations for a set of query nodes")
        .arg(
            Arg::new("graph")
                .long("graph")
                .short('g')
                .value_name("FILE")
                .help("Edge list file")
                .required(true),
        )
        .arg(
            Arg::new("nodes")
                .long("nodes")
                .short('n')
                .value_name("IDS")
                .help("Comma-separated query node ids"),
        )
        .arg(
            Arg::new("num_recs")
                .long("num-recs")
                .short('k')
                .value_name("COUNT")
                .help("Number of recommendations per node")
                .default_value("10"),
        )
        .arg(
            Arg::new("method")
                .long("method")
                .short('m')
                .value_parser(["common-neighbours", "adamic-adar", "both"])
                .default_value("both"),
        )
        .arg(
            Arg::new("sample")
                .long("sample")
                .value_name("COUNT")
                .help("Query COUNT random nodes instead of an explicit list"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed for --sample")
                .default_value("42"),
        )
        .get_matches();

    let graph_path = matches.get_one::<String>("graph").unwrap();
    let n_rec = matches.get_one::<String>("num_recs").unwrap().parse::<usize>()?;
    let methods: Vec<Method> = match matches.get_one::<String>("method").unwrap().as_str() {
        "common-neighbours" => vec![Method::CommonNeighbours],
        "adamic-adar" => vec![Method::AdamicAdar],
        _ => vec![Method::CommonNeighbours, Method::AdamicAdar],
    };

    let start = Instant::now();
    let graph = load_edge_list(Path::new(graph_path))?;
    let elapsed = start.elapsed();
    println!(
        "read graph with {} nodes and {} edges in {}.{:03} seconds",
        graph.n(),
        graph.total_edges(),
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );

    let nodes: Vec<NodeId> = if let Some(count) = matches.get_one::<String>("sample") {
        let count = count.parse::<usize>()?;
        let seed = matches.get_one::<String>("seed").unwrap().parse::<u64>()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut sampled: Vec<NodeId> = graph
            .node_ids()
            .choose_multiple(&mut rng, count)
            .copied()
            .collect();
        sampled.sort_unstable();
        sampled
    } else if let Some(list) = matches.get_one::<String>("nodes") {
        list.split(',')
            .map(|id| {
                id.trim()
                    .parse::<NodeId>()
                    .with_context(|| format!("invalid node id {:?}", id))
            })
            .collect::<Result<Vec<NodeId>>>()?
    } else {
        bail!("either --nodes or --sample is required");
    };

    // compute all recommendations in parallel, then render sequentially
    let start = Instant::now();
    let graph_ref = &graph;
    let results: Vec<_> = nodes
        .par_iter()
        .flat_map_iter(|&node| {
            methods
                .iter()
                .map(move |&method| (node, method, score(graph_ref, node, method, n_rec)))
        })
        .collect();
    let elapsed = start.elapsed();
    println!(
        "scored {} queries in {}.{:03} seconds",
        results.len(),
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );

    let mut failures = 0;
    for (node, method, result) in &results {
        match result {
            Ok(recs) => print!("{}", render_table(*node, method.name(), recs)),
            Err(e) => {
                eprintln!("skipping node {}: {}", node, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} queries failed", failures);
    }
    Ok(())
}
