//! Process-wide pack-size registry handing immutable snapshots to callers.

pub mod pack_registry;

pub use pack_registry::{PackSizeRegistry, PackSnapshot};
