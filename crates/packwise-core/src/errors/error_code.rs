//! PackwiseErrorCode trait for client-facing error reporting.

/// Trait for mapping Packwise errors to stable error code strings.
/// Every error enum implements this so callers outside the crate can
/// branch on a code instead of parsing messages.
pub trait PackwiseErrorCode {
    /// Returns the error code string (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted client string: `[ERROR_CODE] message`.
    fn client_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const MALFORMED_REQUEST: &str = "MALFORMED_REQUEST";
pub const NO_FEASIBLE_ALLOCATION: &str = "NO_FEASIBLE_ALLOCATION";
pub const REGISTRY_ERROR: &str = "REGISTRY_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
