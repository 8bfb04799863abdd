//! Observability for Packwise.
//! `tracing` crate with `EnvFilter`, filter read from `PACKWISE_LOG`.

pub mod metrics;
pub mod setup;

pub use setup::init_tracing;
