use clap::{Arg, Command};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;

use friendrec::graph::edge_list::load_edge_list;
use friendrec::graph::{Graph, NodeId};
use friendrec::scoring::{score, Method, Recommendation, ScoreError};

fn main() -> Result<()> {
    let matches = Command::new("rank_all")
        .about("Computes top-N recommendations for every node and writes them to CSV")
        .arg(
            Arg::new("graph")
                .long("graph")
                .short('g')
                .value_name("FILE")
                .help("Edge list file")
                .required(true),
        )
        .arg(
            Arg::new("num_recs")
                .long("num-recs")
                .short('k')
                .value_name("COUNT")
                .default_value("10"),
        )
        .arg(
            Arg::new("method")
                .long("method")
                .short('m')
                .value_parser(["common-neighbours", "adamic-adar"])
                .default_value("adamic-adar"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .default_value("outputs/recommendations.csv"),
        )
        .get_matches();

    let graph_path = matches.get_one::<String>("graph").unwrap();
    let n_rec = matches.get_one::<String>("num_recs").unwrap().parse::<usize>()?;
    let method = match matches.get_one::<String>("method").unwrap().as_str() {
        "common-neighbours" => Method::CommonNeighbours,
        _ => Method::AdamicAdar,
    };
    let output_path = PathBuf::from(matches.get_one::<String>("output").unwrap());

    let graph = load_edge_list(Path::new(graph_path))?;
    println!(
        "loaded graph with {} nodes and {} edges",
        graph.n(),
        graph.total_edges()
    );

    let pb = ProgressBar::new(graph.n() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} {wide_bar:.green/gray} {pos}/{len} [{elapsed_precise}]({eta})")
            .unwrap()
            .progress_chars("█▓░"),
    );
    pb.set_message(format!("Scoring with {}", method.name()));

    let start = Instant::now();
    let graph_ref = &graph;
    let results: Vec<(NodeId, Result<Vec<Recommendation>, ScoreError>)> = graph
        .node_ids()
        .par_iter()
        .progress_with(pb)
        .map(|&node| (node, score(graph_ref, node, method, n_rec)))
        .collect();
    let elapsed = start.elapsed();
    println!(
        "scored {} nodes in {}.{:03} seconds",
        results.len(),
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(&output_path)?;
    writer.write_record(["node", "rank", "candidate", "score"])?;
    for (node, result) in results {
        for (rank, rec) in result?.iter().enumerate() {
            writer.write_record([
                node.to_string(),
                (rank + 1).to_string(),
                rec.candidate.to_string(),
                rec.score.to_string(),
            ])?;
        }
    }
    writer.flush()?;
    println!("Saved CSV to {}", output_path.display());

    Ok(())
}
