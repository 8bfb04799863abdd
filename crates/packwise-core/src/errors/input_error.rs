//! Input validation errors.

use super::error_code::{self, PackwiseErrorCode};

/// Errors raised when a target or pack-size set violates the allocator's
/// preconditions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("target must be > 0, got {target}")]
    NonPositiveTarget { target: i64 },

    #[error("pack sizes cannot be empty")]
    EmptyPackSizes,

    #[error("pack sizes must be positive, got {size}")]
    NonPositivePackSize { size: i64 },

    #[error("target {target} exceeds the configured maximum of {max}")]
    TargetTooLarge { target: u64, max: u64 },

    #[error("search bound overflows: target {target} + largest pack {largest}")]
    SearchBoundOverflow { target: u64, largest: u64 },

    #[error("malformed request: {message}")]
    MalformedRequest { message: String },
}

impl PackwiseErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedRequest { .. } => error_code::MALFORMED_REQUEST,
            _ => error_code::INVALID_INPUT,
        }
    }
}
