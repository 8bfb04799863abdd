//! Configuration system for Packwise.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod allocator_config;
pub mod packs_config;
pub mod packwise_config;

pub use allocator_config::{AllocatorConfig, TableStrategy};
pub use packs_config::PacksConfig;
pub use packwise_config::{CliOverrides, PackwiseConfig};
