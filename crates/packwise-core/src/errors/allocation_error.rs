//! Allocation errors.

use super::error_code::{self, PackwiseErrorCode};
use super::InputError;

/// Errors produced when an allocation is requested as a hard result.
///
/// The allocator itself reports infeasibility as a value
/// (`AllocationOutcome::Infeasible`); this enum is for callers that need
/// it as an error, such as the pack service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("no feasible allocation for target {target}")]
    Infeasible { target: u64 },
}

impl PackwiseErrorCode for AllocationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Infeasible { .. } => error_code::NO_FEASIBLE_ALLOCATION,
        }
    }
}
