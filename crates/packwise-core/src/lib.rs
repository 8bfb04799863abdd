//! # packwise-core
//!
//! Foundation crate for the Packwise allocator.
//! Defines types, errors, config, tracing, constants, and the pack-size registry.
//! `packwise-alloc` depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod registry;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::PackwiseConfig;
pub use errors::{AllocationError, ConfigError, InputError, RegistryError, ServiceError};
pub use registry::{PackSizeRegistry, PackSnapshot};
pub use types::{Allocation, AllocationOutcome, AllocationSummary, PackSizes};
