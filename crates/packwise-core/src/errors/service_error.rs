//! Service-level errors aggregating every subsystem.

use super::error_code::PackwiseErrorCode;
use super::{AllocationError, ConfigError, InputError, RegistryError};

/// Errors surfaced by the pack service.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Allocation error: {0}")]
    Allocation(#[from] AllocationError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ServiceError {
    /// True when the caller caused the failure (bad input or an
    /// unprocessable target), false for internal faults.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Input(_) | Self::Allocation(_) => true,
            Self::Registry(RegistryError::Input(_)) => true,
            Self::Registry(RegistryError::LockPoisoned) | Self::Config(_) => false,
        }
    }
}

impl PackwiseErrorCode for ServiceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Allocation(e) => e.error_code(),
            Self::Registry(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
