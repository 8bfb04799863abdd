//! Allocator configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DENSE_TABLE_LIMIT, DEFAULT_MAX_TARGET};

/// How the allocator stores per-sum state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStrategy {
    /// Dense below the configured cell limit, sparse above it.
    #[default]
    Auto,
    /// One slot per sum in `[0, target + largest]`.
    Dense,
    /// Hash map holding only reachable sums.
    Sparse,
}

impl FromStr for TableStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dense" => Ok(Self::Dense),
            "sparse" => Ok(Self::Sparse),
            other => Err(format!("unknown table strategy '{other}'")),
        }
    }
}

impl fmt::Display for TableStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Dense => "dense",
            Self::Sparse => "sparse",
        };
        f.write_str(name)
    }
}

/// Configuration for the allocator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AllocatorConfig {
    /// Largest accepted target quantity. Default: 10,000,000.
    pub max_target: Option<u64>,
    /// Table representation. Default: auto.
    pub table_strategy: Option<TableStrategy>,
    /// Cell count above which `auto` picks the sparse table. Default: 50,000,000.
    pub dense_table_limit: Option<u64>,
}

impl AllocatorConfig {
    /// Returns the effective maximum target, defaulting to 10,000,000.
    pub fn effective_max_target(&self) -> u64 {
        self.max_target.unwrap_or(DEFAULT_MAX_TARGET)
    }

    /// Returns the effective table strategy, defaulting to auto.
    pub fn effective_table_strategy(&self) -> TableStrategy {
        self.table_strategy.unwrap_or_default()
    }

    /// Returns the effective dense table limit, defaulting to 50,000,000 cells.
    pub fn effective_dense_table_limit(&self) -> u64 {
        self.dense_table_limit.unwrap_or(DEFAULT_DENSE_TABLE_LIMIT)
    }
}
