//! Value types shared between the registry, the allocator, and the service.

pub mod allocation;
pub mod pack_sizes;

pub use allocation::{Allocation, AllocationOutcome, AllocationSummary};
pub use pack_sizes::PackSizes;
