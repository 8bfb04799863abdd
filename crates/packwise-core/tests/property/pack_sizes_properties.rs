use packwise_core::types::{Allocation, AllocationSummary, PackSizes};
use proptest::prelude::*;

// ── Sets are strictly descending and lose nothing ───────────────────────

proptest! {
    #[test]
    fn pack_sizes_sorted_distinct_complete(values in prop::collection::vec(1u64..10_000, 1..20)) {
        let sizes = PackSizes::new(values.iter().copied()).unwrap();
        prop_assert!(sizes.as_slice().windows(2).all(|w| w[0] > w[1]));
        for v in &values {
            prop_assert!(sizes.contains(*v));
        }
        prop_assert_eq!(sizes.largest(), values.iter().copied().max());
        prop_assert_eq!(sizes.smallest(), values.iter().copied().min());
    }
}

// ── Lenient and strict agree on valid input ─────────────────────────────

proptest! {
    #[test]
    fn lenient_matches_strict_on_positive_input(values in prop::collection::vec(1i64..10_000, 1..20)) {
        let strict = PackSizes::from_signed(&values).unwrap();
        prop_assert_eq!(PackSizes::lenient(&values), strict);
    }
}

// ── Summary totals are consistent ───────────────────────────────────────

proptest! {
    #[test]
    fn summary_totals_consistent(
        counts in prop::collection::vec((1u64..1_000, 0u64..50), 0..6),
        target in 1u64..10_000,
    ) {
        let allocation: Allocation = counts.iter().copied().collect();
        let summary = AllocationSummary::new(target, allocation.clone());
        prop_assert_eq!(summary.total_items, allocation.total_items());
        prop_assert_eq!(summary.total_packs, allocation.total_packs());
        prop_assert_eq!(summary.overfill, allocation.total_items().saturating_sub(target));
        prop_assert!(allocation.iter().all(|(_, count)| count > 0));
    }
}
