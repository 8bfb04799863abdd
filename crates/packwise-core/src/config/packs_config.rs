//! Pack-size configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PACK_SIZES;
use crate::errors::InputError;
use crate::types::PackSizes;

/// Configuration for the initial pack-size registry contents.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PacksConfig {
    /// Pack sizes the registry is seeded with. Default: 250, 500, 1000, 2000, 5000.
    pub default_sizes: Option<Vec<u64>>,
}

impl PacksConfig {
    /// Returns the effective seed sizes as a validated set.
    pub fn effective_sizes(&self) -> Result<PackSizes, InputError> {
        match &self.default_sizes {
            Some(sizes) => PackSizes::new(sizes.iter().copied()),
            None => PackSizes::new(DEFAULT_PACK_SIZES),
        }
    }
}
