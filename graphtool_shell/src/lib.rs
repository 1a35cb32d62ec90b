// SPDX-License-Identifier: MIT OR Apache-2.0
//! graphtool shell: loads an edge-list graph and runs one algorithm on it.

pub mod cli;
mod output;

use std::path::Path;

use graph_algorithms::{
    all_shortest_paths, diameter, dijkstra, minimum_spanning_tree, Graph, GraphConfig, GraphError,
    MstAlgorithm,
};
use thiserror::Error;
use tracing::{info, instrument};

use crate::cli::{Cli, Command, OutputFormat};

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShellError>;

/// Environment configuration with command-line flags applied on top.
///
/// # Errors
///
/// Returns an error if the environment or the flags hold invalid values.
pub fn resolve_config(cli: &Cli) -> Result<GraphConfig> {
    let mut config = GraphConfig::from_env()?;
    if cli.directed {
        config = config.directed(true);
    }
    if let Some(weight) = cli.default_weight {
        config = config.default_weight(weight);
    }
    config.validate()?;
    Ok(config)
}

/// Read and parse an edge-list file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line is malformed.
pub fn load_graph(path: &Path, config: &GraphConfig) -> Result<Graph<String>> {
    let input = std::fs::read_to_string(path).map_err(GraphError::from)?;
    let graph = Graph::parse_edge_list(&input, config)?;
    Ok(graph)
}

/// Run the command described by `cli` and render its result.
///
/// # Errors
///
/// Returns an error if loading fails, a vertex is unknown, or the algorithm
/// name is not recognised.
pub fn run(cli: &Cli) -> Result<String> {
    let config = resolve_config(cli)?;
    let graph = load_graph(&cli.file, &config)?;
    execute(&graph, &cli.command, cli.output_format, &config)
}

/// Run `command` against an already loaded graph.
///
/// # Errors
///
/// Returns an error if a vertex is unknown or the algorithm name is not recognised.
#[instrument(skip(graph, config))]
pub fn execute(
    graph: &Graph<String>,
    command: &Command,
    format: OutputFormat,
    config: &GraphConfig,
) -> Result<String> {
    let json = format == OutputFormat::Json;

    let rendered = match command {
        Command::Mst { algorithm } => {
            let algorithm = match algorithm {
                Some(name) => name.parse::<MstAlgorithm>()?,
                None => config.mst_algorithm,
            };
            let result = minimum_spanning_tree(graph, algorithm);
            info!(%algorithm, edges = result.edge_count(), "spanning forest ready");
            if json {
                serde_json::to_string_pretty(&result)?
            } else {
                output::mst_table(&result, graph.is_directed())
            }
        },
        Command::Path { start, goal } => {
            let result = dijkstra(graph, start, goal)?;
            if json {
                serde_json::to_string_pretty(&result)?
            } else {
                output::path_table(&result.outcome, start, goal)
            }
        },
        Command::AllPairs => {
            let matrix = all_shortest_paths(graph);
            if json {
                serde_json::to_string_pretty(&matrix)?
            } else {
                output::matrix_table(&matrix)
            }
        },
        Command::Diameter => {
            let d = diameter(graph);
            if json {
                serde_json::json!({ "diameter": d }).to_string()
            } else {
                format!("diameter: {}", output::format_distance(d))
            }
        },
    };

    Ok(rendered)
}
