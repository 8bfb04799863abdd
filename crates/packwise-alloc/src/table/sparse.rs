//! Sparse table: only reached sums are stored.

use rustc_hash::FxHashMap;

use super::{Cell, SumTable};

/// Hash-map-backed table. Worth it when pack sizes share a large common
/// factor, so most sums in range are never reached.
#[derive(Debug, Default)]
pub struct SparseTable {
    cells: FxHashMap<u64, Cell>,
}

impl SparseTable {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SumTable for SparseTable {
    #[inline]
    fn get(&self, sum: u64) -> Option<Cell> {
        self.cells.get(&sum).copied()
    }

    #[inline]
    fn set(&mut self, sum: u64, cell: Cell) {
        self.cells.insert(sum, cell);
    }

    fn populated(&self) -> usize {
        self.cells.len()
    }
}
