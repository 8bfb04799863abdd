//! # packwise-alloc
//!
//! Minimum-overfill pack allocation.
//!
//! Given a target quantity and a set of pack sizes, picks the combination of
//! packs that ships at least the target with the least excess, using the
//! fewest packs among equally small excesses.

pub mod allocator;
pub mod service;
pub mod table;

pub use allocator::{calculate_packs, Allocator};
pub use service::PackService;
