// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for graph algorithms.

use thiserror::Error;

/// Error type for graph algorithm operations.
///
/// An unreachable goal is not an error: shortest-path searches report it as
/// [`PathOutcome::Unreachable`](crate::PathOutcome::Unreachable).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An argument was outside the supported set (e.g. an unknown algorithm name).
    #[error("invalid {argument}: {message}")]
    InvalidArgument {
        argument: &'static str,
        message: String,
    },

    /// A referenced vertex does not exist in the graph.
    #[error("vertex not found: {0}")]
    NotFound(String),

    /// Edge-list input could not be parsed.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Reading graph input failed.
    #[error("io error: {0}")]
    Io(String),

    /// Environment configuration was malformed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GraphError {
    pub(crate) fn vertex_not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        Self::NotFound(format!("{vertex:?}"))
    }
}

impl From<std::io::Error> for GraphError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// Result type alias for graph algorithm operations.
pub type Result<T> = std::result::Result<T, GraphError>;
