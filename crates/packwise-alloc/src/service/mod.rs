//! Transport-agnostic pack service: the registry and allocator behind the
//! request/response shapes clients exchange as JSON.

pub mod pack_service;
pub mod types;

pub use pack_service::PackService;
pub use types::{
    CalculateRequest, CalculateResponse, HealthResponse, PackSizesResponse, SetPacksRequest,
};
