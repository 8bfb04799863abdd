//! Dense table: one slot per sum.

use packwise_core::errors::InputError;

use super::{Cell, SumTable};

/// `Vec`-backed table indexed directly by sum.
#[derive(Debug)]
pub struct DenseTable {
    cells: Vec<Option<Cell>>,
    populated: usize,
}

impl DenseTable {
    /// Allocate slots for every sum in `[0, bound]`.
    pub fn with_bound(bound: u64, target: u64, largest: u64) -> Result<Self, InputError> {
        let len = bound
            .checked_add(1)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or(InputError::SearchBoundOverflow { target, largest })?;
        Ok(Self {
            cells: vec![None; len],
            populated: 0,
        })
    }
}

impl SumTable for DenseTable {
    #[inline]
    fn get(&self, sum: u64) -> Option<Cell> {
        self.cells.get(sum as usize).copied().flatten()
    }

    #[inline]
    fn set(&mut self, sum: u64, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(sum as usize) {
            if slot.replace(cell).is_none() {
                self.populated += 1;
            }
        }
    }

    fn populated(&self) -> usize {
        self.populated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut table = DenseTable::with_bound(10, 5, 5).unwrap();
        assert_eq!(table.get(3), None);
        table.set(3, Cell { packs: 1, last: 0 });
        table.set(3, Cell { packs: 1, last: 1 });
        assert_eq!(table.get(3), Some(Cell { packs: 1, last: 1 }));
        assert_eq!(table.populated(), 1);
    }

    #[test]
    fn test_out_of_range_is_unreached() {
        let mut table = DenseTable::with_bound(4, 2, 2).unwrap();
        table.set(9, Cell::ORIGIN);
        assert_eq!(table.get(9), None);
        assert_eq!(table.populated(), 0);
    }

    #[test]
    fn test_bound_overflow_is_rejected() {
        let err = DenseTable::with_bound(u64::MAX, u64::MAX - 1, 1).unwrap_err();
        assert!(matches!(err, InputError::SearchBoundOverflow { .. }));
    }
}
