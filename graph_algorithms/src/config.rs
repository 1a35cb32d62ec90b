// SPDX-License-Identifier: MIT OR Apache-2.0
//! Configuration for graph loading and algorithm selection.

use crate::{GraphError, MstAlgorithm, Result};

/// Environment variable: treat loaded graphs as directed.
pub const ENV_DIRECTED: &str = "GRAPHTOOL_DIRECTED";
/// Environment variable: weight given to edges listed without one.
pub const ENV_DEFAULT_WEIGHT: &str = "GRAPHTOOL_DEFAULT_WEIGHT";
/// Environment variable: default minimum spanning tree strategy.
pub const ENV_MST_ALGORITHM: &str = "GRAPHTOOL_MST_ALGORITHM";

/// Runtime configuration for graph loading and algorithm defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    /// Whether loaded graphs are directed.
    pub directed: bool,
    /// Weight for edges read without an explicit weight.
    pub default_weight: f64,
    /// Strategy used when no MST algorithm is requested explicitly.
    pub mst_algorithm: MstAlgorithm,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            default_weight: 1.0,
            mst_algorithm: MstAlgorithm::Kruskal,
        }
    }
}

mod env_parse {
    use super::{GraphError, Result};

    /// Accepts "true", "1", "yes", "on" / "false", "0", "no", "off" (case-insensitive).
    pub fn parse_bool(key: &str) -> Option<Result<bool>> {
        std::env::var(key)
            .ok()
            .map(|val| match val.to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(GraphError::Config(format!(
                    "invalid {key}: expected boolean (true/false/1/0/yes/no/on/off)"
                ))),
            })
    }

    pub fn parse_f64(key: &str) -> Option<Result<f64>> {
        std::env::var(key).ok().map(|val| {
            val.parse()
                .map_err(|e| GraphError::Config(format!("invalid {key}: {e}")))
        })
    }

    pub fn parse_string(key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl GraphConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by any `GRAPHTOOL_*` environment variables that are set.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::Config` for unparsable values and
    /// `GraphError::InvalidArgument` for an unknown MST algorithm name.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(result) = env_parse::parse_bool(ENV_DIRECTED) {
            config.directed = result?;
        }
        if let Some(result) = env_parse::parse_f64(ENV_DEFAULT_WEIGHT) {
            config.default_weight = result?;
        }
        if let Some(name) = env_parse::parse_string(ENV_MST_ALGORITHM) {
            config.mst_algorithm = name.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `GraphError::Config` if `default_weight` is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.default_weight.is_finite() || self.default_weight < 0.0 {
            return Err(GraphError::Config(format!(
                "default_weight must be finite and non-negative, got {}",
                self.default_weight
            )));
        }
        Ok(())
    }

    #[must_use]
    pub const fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    #[must_use]
    pub const fn default_weight(mut self, weight: f64) -> Self {
        self.default_weight = weight;
        self
    }

    #[must_use]
    pub const fn mst_algorithm(mut self, algorithm: MstAlgorithm) -> Self {
        self.mst_algorithm = algorithm;
        self
    }
}
