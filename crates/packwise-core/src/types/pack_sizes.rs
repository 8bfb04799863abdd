//! Validated, deduplicated pack-size set.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::errors::InputError;

/// Inline capacity; real catalogues rarely carry more than a handful of sizes.
type SizeVec = SmallVec<[u64; 8]>;

/// A set of distinct pack sizes, stored largest first.
///
/// Descending order is only a search heuristic; the allocator's result does
/// not depend on it beyond tie-breaking between equally good allocations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u64>", into = "Vec<u64>")]
pub struct PackSizes {
    sizes: SizeVec,
}

impl PackSizes {
    /// Build a strict pack-size set.
    ///
    /// Rejects an empty input and zero sizes. Duplicates are removed.
    pub fn new<I>(sizes: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = u64>,
    {
        let mut collected: SizeVec = sizes.into_iter().collect();
        if collected.is_empty() {
            return Err(InputError::EmptyPackSizes);
        }
        if collected.contains(&0) {
            return Err(InputError::NonPositivePackSize { size: 0 });
        }
        sort_dedup_desc(&mut collected);
        Ok(Self { sizes: collected })
    }

    /// Build from caller-supplied signed values (e.g. decoded JSON).
    ///
    /// Negative and zero values are rejected rather than dropped.
    pub fn from_signed(sizes: &[i64]) -> Result<Self, InputError> {
        if sizes.is_empty() {
            return Err(InputError::EmptyPackSizes);
        }
        let mut collected = SizeVec::with_capacity(sizes.len());
        for &size in sizes {
            if size <= 0 {
                return Err(InputError::NonPositivePackSize { size });
            }
            collected.push(size as u64);
        }
        sort_dedup_desc(&mut collected);
        Ok(Self { sizes: collected })
    }

    /// Build without validation: non-positive values and duplicates are
    /// silently dropped. The result may be empty.
    pub fn lenient(sizes: &[i64]) -> Self {
        let mut collected: SizeVec = sizes
            .iter()
            .filter(|&&s| s > 0)
            .map(|&s| s as u64)
            .collect();
        sort_dedup_desc(&mut collected);
        Self { sizes: collected }
    }

    /// Largest pack size, if any.
    pub fn largest(&self) -> Option<u64> {
        self.sizes.first().copied()
    }

    /// Smallest pack size, if any.
    pub fn smallest(&self) -> Option<u64> {
        self.sizes.last().copied()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn contains(&self, size: u64) -> bool {
        // Descending order, so search on the reversed comparator.
        self.sizes.binary_search_by(|probe| size.cmp(probe)).is_ok()
    }

    /// Sizes in stored (descending) order.
    pub fn as_slice(&self) -> &[u64] {
        &self.sizes
    }

    /// Iterate sizes largest first.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.sizes.iter().copied()
    }

    /// Sizes smallest first, the order clients are shown.
    pub fn ascending(&self) -> Vec<u64> {
        self.sizes.iter().rev().copied().collect()
    }
}

impl TryFrom<Vec<u64>> for PackSizes {
    type Error = InputError;

    fn try_from(sizes: Vec<u64>) -> Result<Self, Self::Error> {
        Self::new(sizes)
    }
}

impl From<PackSizes> for Vec<u64> {
    fn from(sizes: PackSizes) -> Self {
        sizes.sizes.into_vec()
    }
}

fn sort_dedup_desc(sizes: &mut SizeVec) {
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.dedup();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dedups_and_sorts_descending() {
        let sizes = PackSizes::new([23, 53, 31, 53]).unwrap();
        assert_eq!(sizes.as_slice(), &[53, 31, 23]);
        assert_eq!(sizes.largest(), Some(53));
        assert_eq!(sizes.smallest(), Some(23));
        assert_eq!(sizes.ascending(), vec![23, 31, 53]);
    }

    #[test]
    fn test_new_rejects_empty_and_zero() {
        assert_eq!(PackSizes::new(Vec::<u64>::new()), Err(InputError::EmptyPackSizes));
        assert_eq!(
            PackSizes::new([250, 0]),
            Err(InputError::NonPositivePackSize { size: 0 })
        );
    }

    #[test]
    fn test_from_signed_rejects_negative() {
        assert_eq!(
            PackSizes::from_signed(&[250, -5]),
            Err(InputError::NonPositivePackSize { size: -5 })
        );
        assert_eq!(PackSizes::from_signed(&[]), Err(InputError::EmptyPackSizes));
    }

    #[test]
    fn test_lenient_drops_invalid_values() {
        let sizes = PackSizes::lenient(&[500, -1, 0, 250, 500]);
        assert_eq!(sizes.as_slice(), &[500, 250]);
        assert!(PackSizes::lenient(&[0, -3]).is_empty());
    }

    #[test]
    fn test_contains_uses_descending_order() {
        let sizes = PackSizes::new([250, 1000, 500]).unwrap();
        assert!(sizes.contains(500));
        assert!(!sizes.contains(750));
    }

    #[test]
    fn test_deserialize_validates() {
        let sizes: PackSizes = serde_json::from_str("[500, 250, 250]").unwrap();
        assert_eq!(sizes.as_slice(), &[500, 250]);
        assert!(serde_json::from_str::<PackSizes>("[]").is_err());
        assert!(serde_json::from_str::<PackSizes>("[0]").is_err());
    }
}
