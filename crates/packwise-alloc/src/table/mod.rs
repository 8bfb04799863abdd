//! Per-sum state tables for the allocation search.
//!
//! Each reachable sum stores a backpointer (which pack size was added last)
//! and the fewest packs known to reach it. The winning pack multiset is
//! rebuilt once by walking backpointers from the chosen sum down to zero.

pub mod dense;
pub mod sparse;

pub use dense::DenseTable;
pub use sparse::SparseTable;

/// Best known way to reach one exact sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Packs used to reach this sum.
    pub packs: u64,
    /// Index (into the descending size slice) of the pack added last.
    /// Unused for sum 0.
    pub last: u32,
}

impl Cell {
    /// State for sum 0: no packs.
    pub const ORIGIN: Cell = Cell { packs: 0, last: 0 };
}

/// Storage for the best [`Cell`] at each sum in `[0, bound]`.
pub trait SumTable {
    /// Best cell for `sum`, or `None` if the sum has not been reached.
    fn get(&self, sum: u64) -> Option<Cell>;

    /// Record `cell` as the best way to reach `sum`.
    fn set(&mut self, sum: u64, cell: Cell);

    /// Number of sums reached so far.
    fn populated(&self) -> usize;
}
