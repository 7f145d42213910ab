//! console table rendering for recommendation lists
//!
//! Presentation only; the scorers return data and never print. Output matches
//! the single-line box-drawing tables of the original report format, with Rank
//! and NodeID right-justified and Score left-justified.

use itertools::Itertools;

use crate::graph::NodeId;
use crate::scoring::Recommendation;

const HEADER: [&str; 3] = ["Rank", "NodeID", "Score"];

/// renders one recommendation list as a header line plus an ascii table
pub fn render_table(node: NodeId, method: &str, recs: &[Recommendation]) -> String {
    let rows: Vec<[String; 3]> = recs
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            [
                (i + 1).to_string(),
                rec.candidate.to_string(),
                rec.score.to_string(),
            ]
        })
        .collect();

    let mut widths = [HEADER[0].len(), HEADER[1].len(), HEADER[2].len()];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = format!("\n{} - Recommendations for Node: {}\n", method, node);
    out.push_str(&border(&widths, '┌', '┬', '┐'));
    out.push_str(&format_row(&widths, &HEADER.map(String::from)));
    out.push_str(&border(&widths, '├', '┼', '┤'));
    for row in &rows {
        out.push_str(&format_row(&widths, row));
    }
    out.push_str(&border(&widths, '└', '┴', '┘'));
    out
}

fn border(widths: &[usize; 3], left: char, mid: char, right: char) -> String {
    let bars = widths.iter().map(|w| "─".repeat(w + 2)).join(&mid.to_string());
    format!("{left}{bars}{right}\n")
}

fn format_row(widths: &[usize; 3], cells: &[String; 3]) -> String {
    // Rank and NodeID right-justified, Score left-justified
    format!(
        "│ {:>rank$} │ {:>node$} │ {:<score$} │\n",
        cells[0],
        cells[1],
        cells[2],
        rank = widths[0],
        node = widths[1],
        score = widths[2],
    )
}
