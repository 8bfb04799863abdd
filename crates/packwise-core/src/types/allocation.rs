//! Allocation results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Pack size → number of packs used. Sizes used zero times are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Allocation {
    counts: BTreeMap<u64, u64>,
}

impl Allocation {
    /// An allocation using no packs at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add `count` packs of `size`. Zero counts are ignored.
    pub fn add(&mut self, size: u64, count: u64) {
        if count == 0 {
            return;
        }
        *self.counts.entry(size).or_insert(0) += count;
    }

    /// Number of packs of `size` used (0 when absent).
    pub fn count(&self, size: u64) -> u64 {
        self.counts.get(&size).copied().unwrap_or(0)
    }

    /// Sum of size × count.
    pub fn total_items(&self) -> u64 {
        self.counts.iter().map(|(size, count)| size * count).sum()
    }

    /// Sum of counts.
    pub fn total_packs(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Items shipped beyond `target`; zero when the allocation falls short.
    pub fn overfill(&self, target: u64) -> u64 {
        self.total_items().saturating_sub(target)
    }

    /// Whether the allocation ships at least `target` items.
    pub fn covers(&self, target: u64) -> bool {
        self.total_items() >= target
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(size, count)` pairs, smallest size first.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.counts.iter().map(|(&size, &count)| (size, count))
    }

    pub fn as_map(&self) -> &BTreeMap<u64, u64> {
        &self.counts
    }

    pub fn into_map(self) -> BTreeMap<u64, u64> {
        self.counts
    }
}

impl FromIterator<(u64, u64)> for Allocation {
    fn from_iter<I: IntoIterator<Item = (u64, u64)>>(iter: I) -> Self {
        let mut allocation = Self::empty();
        for (size, count) in iter {
            allocation.add(size, count);
        }
        allocation
    }
}

/// Result of one allocator invocation.
///
/// Infeasibility is a value, not an error, and is distinct from an
/// allocation that happens to be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationOutcome {
    Allocated(Allocation),
    Infeasible,
}

impl AllocationOutcome {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Allocated(_))
    }

    pub fn allocation(&self) -> Option<&Allocation> {
        match self {
            Self::Allocated(allocation) => Some(allocation),
            Self::Infeasible => None,
        }
    }

    pub fn into_allocation(self) -> Option<Allocation> {
        match self {
            Self::Allocated(allocation) => Some(allocation),
            Self::Infeasible => None,
        }
    }
}

/// An allocation together with its derived totals for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSummary {
    pub target: u64,
    pub allocation: Allocation,
    pub total_items: u64,
    pub total_packs: u64,
    pub overfill: u64,
}

impl AllocationSummary {
    pub fn new(target: u64, allocation: Allocation) -> Self {
        let total_items = allocation.total_items();
        let total_packs = allocation.total_packs();
        Self {
            target,
            total_items,
            total_packs,
            overfill: total_items.saturating_sub(target),
            allocation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let allocation: Allocation = [(23, 2), (31, 7), (53, 9429)].into_iter().collect();
        assert_eq!(allocation.total_items(), 500_000);
        assert_eq!(allocation.total_packs(), 9438);
        assert_eq!(allocation.overfill(500_000), 0);
        assert!(allocation.covers(500_000));
    }

    #[test]
    fn test_zero_counts_are_not_stored() {
        let mut allocation = Allocation::empty();
        allocation.add(250, 0);
        assert!(allocation.is_empty());
        allocation.add(250, 1);
        allocation.add(250, 2);
        assert_eq!(allocation.count(250), 3);
        assert_eq!(allocation.count(500), 0);
    }

    #[test]
    fn test_empty_allocation_is_not_infeasible() {
        let outcome = AllocationOutcome::Allocated(Allocation::empty());
        assert!(outcome.is_feasible());
        assert_ne!(outcome, AllocationOutcome::Infeasible);
        assert!(AllocationOutcome::Infeasible.allocation().is_none());
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let allocation: Allocation = [(250, 1), (500, 1)].into_iter().collect();
        let summary = AllocationSummary::new(501, allocation);
        assert_eq!(summary.overfill, 249);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalItems"], 750);
        assert_eq!(json["totalPacks"], 2);
        assert_eq!(json["allocation"]["500"], 1);
    }
}
