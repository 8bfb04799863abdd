//! Versioned pack-size registry.

use std::sync::{Arc, RwLock};

use crate::errors::{InputError, RegistryError};
use crate::types::PackSizes;

/// An immutable view of the registry at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSnapshot {
    /// Starts at 1 and increases by one on every replacement.
    pub version: u64,
    pub sizes: PackSizes,
}

/// Holds the current pack-size set.
///
/// Readers take an `Arc<PackSnapshot>` and keep working against it even if
/// the set is replaced concurrently. Writers swap the whole snapshot; a
/// snapshot is never mutated in place.
#[derive(Debug)]
pub struct PackSizeRegistry {
    current: RwLock<Arc<PackSnapshot>>,
}

impl PackSizeRegistry {
    /// Create a registry seeded with `initial` at version 1.
    pub fn new(initial: PackSizes) -> Self {
        Self {
            current: RwLock::new(Arc::new(PackSnapshot {
                version: 1,
                sizes: initial,
            })),
        }
    }

    /// Seed from unchecked values, dropping non-positive sizes and duplicates.
    /// The resulting set may be empty.
    pub fn with_lenient(initial: &[i64]) -> Self {
        Self::new(PackSizes::lenient(initial))
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Result<Arc<PackSnapshot>, RegistryError> {
        let guard = self
            .current
            .read()
            .map_err(|_| RegistryError::LockPoisoned)?;
        Ok(Arc::clone(&guard))
    }

    /// Current version number.
    pub fn version(&self) -> Result<u64, RegistryError> {
        Ok(self.snapshot()?.version)
    }

    /// Replace the pack-size set, returning the new snapshot.
    pub fn replace(&self, sizes: PackSizes) -> Result<Arc<PackSnapshot>, RegistryError> {
        if sizes.is_empty() {
            return Err(InputError::EmptyPackSizes.into());
        }
        let mut guard = self
            .current
            .write()
            .map_err(|_| RegistryError::LockPoisoned)?;
        let next = Arc::new(PackSnapshot {
            version: guard.version + 1,
            sizes,
        });
        *guard = Arc::clone(&next);
        drop(guard);

        ::tracing::info!(
            registry_version = next.version,
            pack_size_count = next.sizes.len(),
            "pack sizes replaced"
        );
        Ok(next)
    }
}

impl Default for PackSizeRegistry {
    fn default() -> Self {
        Self::with_lenient(&crate::constants::DEFAULT_PACK_SIZES.map(|s| s as i64))
    }
}
