use packwise_alloc::Allocator;
use packwise_core::config::{AllocatorConfig, TableStrategy};
use packwise_core::types::{AllocationOutcome, PackSizes};
use proptest::prelude::*;

fn arb_sizes() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(3u64..=20, 1..=3)
}

fn pack_sizes(values: &[u64]) -> PackSizes {
    PackSizes::new(values.iter().copied()).unwrap()
}

fn with_strategy(strategy: TableStrategy) -> Allocator {
    Allocator::new(&AllocatorConfig {
        table_strategy: Some(strategy),
        ..Default::default()
    })
}

/// Exhaustively enumerate pack counts and return the best
/// `(overfill, total_packs)` covering `target`.
fn brute_force(target: u64, sizes: &[u64]) -> (u64, u64) {
    fn walk(target: u64, sizes: &[u64], items: u64, packs: u64, best: &mut Option<(u64, u64)>) {
        let Some((&size, rest)) = sizes.split_first() else {
            if items >= target {
                let key = (items - target, packs);
                if best.map_or(true, |b| key < b) {
                    *best = Some(key);
                }
            }
            return;
        };
        let max_count = target.div_ceil(size);
        for count in 0..=max_count {
            walk(target, rest, items + size * count, packs + count, best);
        }
    }

    let mut best = None;
    walk(target, sizes, 0, 0, &mut best);
    best.expect("a single size repeated always covers the target")
}

// ── Never short-ships ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn allocation_covers_target(target in 1u64..5_000, sizes in arb_sizes()) {
        let sizes = pack_sizes(&sizes);
        let outcome = Allocator::default().allocate(target, &sizes).unwrap();
        let allocation = outcome.into_allocation().unwrap();
        prop_assert!(allocation.total_items() >= target);
        for (size, count) in allocation.iter() {
            prop_assert!(sizes.contains(size), "unknown size {}", size);
            prop_assert!(count >= 1);
        }
    }
}

// ── Optimal against exhaustive search ────────────────────────────────────

proptest! {
    #[test]
    fn allocation_matches_brute_force(target in 1u64..80, sizes in arb_sizes()) {
        let set = pack_sizes(&sizes);
        let allocation = Allocator::default()
            .allocate(target, &set)
            .unwrap()
            .into_allocation()
            .unwrap();
        let expected = brute_force(target, set.as_slice());
        prop_assert_eq!(
            (allocation.overfill(target), allocation.total_packs()),
            expected
        );
    }
}

// ── Overfill stays below the largest pack ────────────────────────────────

proptest! {
    #[test]
    fn overfill_below_largest_pack(target in 1u64..20_000, sizes in prop::collection::vec(1u64..=500, 1..=5)) {
        let set = pack_sizes(&sizes);
        let allocation = Allocator::default()
            .allocate(target, &set)
            .unwrap()
            .into_allocation()
            .unwrap();
        prop_assert!(allocation.overfill(target) < set.largest().unwrap());
    }
}

// ── Idempotent ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn repeated_calls_agree(target in 1u64..5_000, sizes in arb_sizes()) {
        let set = pack_sizes(&sizes);
        let allocator = Allocator::default();
        let first = allocator.allocate(target, &set).unwrap();
        let second = allocator.allocate(target, &set).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ── Table representations agree ──────────────────────────────────────────

proptest! {
    #[test]
    fn dense_and_sparse_tables_agree(target in 1u64..5_000, sizes in prop::collection::vec(1u64..=300, 1..=4)) {
        let set = pack_sizes(&sizes);
        let dense = with_strategy(TableStrategy::Dense).allocate(target, &set).unwrap();
        let sparse = with_strategy(TableStrategy::Sparse).allocate(target, &set).unwrap();
        prop_assert_eq!(dense, sparse);
    }
}

// ── Input order is irrelevant ────────────────────────────────────────────

proptest! {
    #[test]
    fn size_order_does_not_change_totals(target in 1u64..2_000, mut sizes in arb_sizes()) {
        let allocator = Allocator::default();
        let forward = allocator.allocate_slice(target, &sizes).unwrap();
        sizes.reverse();
        let backward = allocator.allocate_slice(target, &sizes).unwrap();
        prop_assert!(matches!(forward, AllocationOutcome::Allocated(_)));
        prop_assert_eq!(forward, backward);
    }
}
