//! Minimum-overfill allocator.
//!
//! Unbounded-knapsack search over exact sums in `[0, target + largest]`.
//! Any allocation that overshoots by more than the largest pack contains a
//! pack it could drop and still cover the target, so the optimum always
//! lies inside that range.

use std::time::Instant;

use packwise_core::config::{AllocatorConfig, PackwiseConfig, TableStrategy};
use packwise_core::errors::{AllocationError, InputError};
use packwise_core::tracing::metrics;
use packwise_core::types::{Allocation, AllocationOutcome, AllocationSummary, PackSizes};
use tracing::field::Empty;

use crate::table::{Cell, DenseTable, SparseTable, SumTable};

/// Computes allocations minimising `(overfill, total packs)` lexicographically.
///
/// Holds only configuration; every call builds and drops its own table, so
/// one `Allocator` can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Allocator {
    max_target: u64,
    table_strategy: TableStrategy,
    dense_table_limit: u64,
}

impl Allocator {
    pub fn new(config: &AllocatorConfig) -> Self {
        Self {
            max_target: config.effective_max_target(),
            table_strategy: config.effective_table_strategy(),
            dense_table_limit: config.effective_dense_table_limit(),
        }
    }

    pub fn from_config(config: &PackwiseConfig) -> Self {
        Self::new(&config.allocator)
    }

    /// Find the best allocation of `sizes` covering `target`.
    ///
    /// Returns `Err` for a zero or over-limit target. An empty size set is
    /// reported as [`AllocationOutcome::Infeasible`], never a panic.
    pub fn allocate(
        &self,
        target: u64,
        sizes: &PackSizes,
    ) -> Result<AllocationOutcome, InputError> {
        if target == 0 {
            return Err(InputError::NonPositiveTarget { target: 0 });
        }
        if target > self.max_target {
            return Err(InputError::TargetTooLarge {
                target,
                max: self.max_target,
            });
        }
        let Some(largest) = sizes.largest() else {
            tracing::warn!(requested = target, "allocation requested with no pack sizes");
            return Ok(AllocationOutcome::Infeasible);
        };
        let bound = target
            .checked_add(largest)
            .ok_or(InputError::SearchBoundOverflow { target, largest })?;
        let strategy = self.resolve_strategy(bound);

        let span = tracing::debug_span!(
            "allocate",
            requested = target,
            pack_size_count = sizes.len(),
            search_bound = bound,
            table_strategy = %strategy,
            table_cells = Empty,
            overfill = Empty,
            total_packs = Empty,
            allocation_time_us = Empty
        );
        let _entered = span.enter();
        let started = Instant::now();

        let (outcome, cells) = match strategy {
            TableStrategy::Sparse => {
                let mut table = SparseTable::new();
                let outcome = search(&mut table, target, bound, sizes.as_slice());
                (outcome, table.populated())
            }
            TableStrategy::Dense | TableStrategy::Auto => {
                let mut table = DenseTable::with_bound(bound, target, largest)?;
                let outcome = search(&mut table, target, bound, sizes.as_slice());
                (outcome, table.populated())
            }
        };

        span.record(metrics::TABLE_CELLS, cells as u64);
        span.record(
            metrics::ALLOCATION_TIME_US,
            started.elapsed().as_micros() as u64,
        );
        match &outcome {
            AllocationOutcome::Allocated(allocation) => {
                span.record(metrics::OVERFILL, allocation.overfill(target));
                span.record(metrics::TOTAL_PACKS, allocation.total_packs());
                tracing::debug!("allocation found");
            }
            AllocationOutcome::Infeasible => {
                tracing::warn!("no feasible allocation within search bound");
            }
        }

        Ok(outcome)
    }

    /// Like [`allocate`](Self::allocate), for raw caller-supplied sizes.
    ///
    /// Duplicates are removed; an empty slice or a zero size is rejected
    /// up front.
    pub fn allocate_slice(
        &self,
        target: u64,
        sizes: &[u64],
    ) -> Result<AllocationOutcome, InputError> {
        let sizes = PackSizes::new(sizes.iter().copied())?;
        self.allocate(target, &sizes)
    }

    /// Allocate and attach totals, treating infeasibility as an error.
    pub fn summarize(
        &self,
        target: u64,
        sizes: &PackSizes,
    ) -> Result<AllocationSummary, AllocationError> {
        match self.allocate(target, sizes)? {
            AllocationOutcome::Allocated(allocation) => {
                Ok(AllocationSummary::new(target, allocation))
            }
            AllocationOutcome::Infeasible => Err(AllocationError::Infeasible { target }),
        }
    }

    pub(crate) fn resolve_strategy(&self, bound: u64) -> TableStrategy {
        match self.table_strategy {
            TableStrategy::Auto => {
                if bound.saturating_add(1) <= self.dense_table_limit {
                    TableStrategy::Dense
                } else {
                    TableStrategy::Sparse
                }
            }
            fixed => fixed,
        }
    }
}

impl Default for Allocator {
    fn default() -> Self {
        Self::new(&AllocatorConfig::default())
    }
}

/// Allocate with the default configuration.
pub fn calculate_packs(target: u64, sizes: &[u64]) -> Result<AllocationOutcome, InputError> {
    Allocator::default().allocate_slice(target, sizes)
}

/// Fill `table` for every sum in `[0, bound]` and pick the winner.
///
/// `sizes` must be non-empty, positive and distinct.
fn search<T: SumTable>(table: &mut T, target: u64, bound: u64, sizes: &[u64]) -> AllocationOutcome {
    table.set(0, Cell::ORIGIN);

    // Sizes outer, sums inner and ascending: a size can be reused any
    // number of times on the way up.
    for (index, &size) in sizes.iter().enumerate() {
        for sum in size..=bound {
            let Some(prev) = table.get(sum - size) else {
                continue;
            };
            let packs = prev.packs + 1;
            // Overflow at a fixed sum is always `sum - target`, so only the
            // pack count can improve. Ties keep the earlier state.
            let improves = match table.get(sum) {
                None => true,
                Some(current) => packs < current.packs,
            };
            if improves {
                table.set(
                    sum,
                    Cell {
                        packs,
                        last: index as u32,
                    },
                );
            }
        }
    }

    // Overfill grows with the sum, so the first reached sum at or above
    // the target has the smallest overfill and nothing later can tie it.
    let winner = (target..=bound).find(|&sum| table.get(sum).is_some());

    match winner.and_then(|sum| reconstruct(&*table, sum, sizes)) {
        Some(allocation) => AllocationOutcome::Allocated(allocation),
        None => AllocationOutcome::Infeasible,
    }
}

/// Walk backpointers from `sum` to zero, counting packs per size.
fn reconstruct<T: SumTable>(table: &T, mut sum: u64, sizes: &[u64]) -> Option<Allocation> {
    let mut counts = vec![0u64; sizes.len()];
    while sum > 0 {
        let cell = table.get(sum)?;
        let index = cell.last as usize;
        let size = *sizes.get(index)?;
        counts[index] += 1;
        sum -= size;
    }
    Some(sizes.iter().copied().zip(counts).collect())
}
