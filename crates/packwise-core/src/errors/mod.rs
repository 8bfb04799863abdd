//! Error handling for Packwise.
//! One error enum per subsystem, `thiserror` only.

pub mod allocation_error;
pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod registry_error;
pub mod service_error;

pub use allocation_error::AllocationError;
pub use config_error::ConfigError;
pub use error_code::PackwiseErrorCode;
pub use input_error::InputError;
pub use registry_error::RegistryError;
pub use service_error::ServiceError;
