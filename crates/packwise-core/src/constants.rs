//! Shared constants for the Packwise allocator.

/// Packwise version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pack sizes the registry starts with when nothing else is configured.
pub const DEFAULT_PACK_SIZES: [u64; 5] = [250, 500, 1000, 2000, 5000];

/// Largest target quantity accepted by default.
pub const DEFAULT_MAX_TARGET: u64 = 10_000_000;

/// Largest dense table (in cells) `auto` will allocate before switching to sparse.
pub const DEFAULT_DENSE_TABLE_LIMIT: u64 = 50_000_000;

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "PACKWISE_LOG";

/// Filter used when `PACKWISE_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "packwise=info";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "packwise.toml";

/// User-level config directory name (under the home directory).
pub const USER_CONFIG_DIR: &str = ".packwise";
