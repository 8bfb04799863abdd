//! Structured span field names used across Packwise.
//!
//! Keeping the names in one place lets log queries rely on them.

/// Requested quantity.
pub const REQUESTED: &str = "requested";

/// Number of distinct pack sizes in the snapshot used.
pub const PACK_SIZE_COUNT: &str = "pack_size_count";

/// Inclusive upper bound of the sum search (`target + largest`).
pub const SEARCH_BOUND: &str = "search_bound";

/// Table representation chosen for one invocation.
pub const TABLE_STRATEGY: &str = "table_strategy";

/// Number of populated cells in the sum table.
pub const TABLE_CELLS: &str = "table_cells";

/// Items shipped beyond the target.
pub const OVERFILL: &str = "overfill";

/// Packs in the winning allocation.
pub const TOTAL_PACKS: &str = "total_packs";

/// Registry snapshot version an invocation ran against.
pub const REGISTRY_VERSION: &str = "registry_version";

/// Wall time of one allocation in microseconds.
pub const ALLOCATION_TIME_US: &str = "allocation_time_us";
