// SPDX-License-Identifier: MIT OR Apache-2.0
//! Plain-text rendering of algorithm results.

use std::fmt::{Display, Write as _};

use graph_algorithms::{DistanceMatrix, MstResult, PathOutcome};

pub fn format_distance(d: f64) -> String {
    if d.is_infinite() {
        "inf".to_string()
    } else {
        format!("{d}")
    }
}

pub fn mst_table<V: Display>(result: &MstResult<V>, directed: bool) -> String {
    let arrow = if directed { "->" } else { "--" };
    let mut out = String::new();
    for edge in &result.edges {
        let _ = writeln!(out, "{} {arrow} {}  {}", edge.start, edge.end, edge.weight);
    }
    let _ = write!(
        out,
        "total weight: {} ({} edges, {} trees)",
        result.total_weight,
        result.edge_count(),
        result.tree_count
    );
    out
}

pub fn path_table<V: Display>(outcome: &PathOutcome<V>, start: &V, goal: &V) -> String {
    match outcome {
        PathOutcome::Found(path) => {
            let hops: Vec<String> = path.vertices.iter().map(ToString::to_string).collect();
            format!("cost: {}\npath: {}", path.cost, hops.join(" -> "))
        },
        PathOutcome::Unreachable => format!("unreachable: no path from {start} to {goal}"),
    }
}

pub fn matrix_table<V: Display>(matrix: &DistanceMatrix<V>) -> String {
    let labels: Vec<String> = matrix.vertices.iter().map(ToString::to_string).collect();
    let cells: Vec<Vec<String>> = matrix
        .distances
        .iter()
        .map(|row| row.iter().map(|&d| format_distance(d)).collect())
        .collect();

    let width = labels
        .iter()
        .chain(cells.iter().flatten())
        .map(String::len)
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = write!(out, "{:width$}", "");
    for label in &labels {
        let _ = write!(out, " {label:>width$}");
    }
    for (label, row) in labels.iter().zip(&cells) {
        let _ = write!(out, "\n{label:width$}");
        for cell in row {
            let _ = write!(out, " {cell:>width$}");
        }
    }
    out
}
