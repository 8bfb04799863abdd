//! Pack-size registry errors.

use super::error_code::{self, PackwiseErrorCode};
use super::InputError;

/// Errors that can occur while reading or replacing the pack-size registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("pack-size registry lock poisoned")]
    LockPoisoned,
}

impl PackwiseErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::LockPoisoned => error_code::REGISTRY_ERROR,
        }
    }
}
