//! Request and response bodies.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use packwise_core::errors::InputError;
use packwise_core::types::Allocation;

/// Replace the registry's pack sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPacksRequest {
    #[serde(default)]
    pub pack_sizes: Vec<i64>,
}

/// Ask for an allocation of `amount` items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// A missing amount decodes as 0 and is then rejected as non-positive.
    #[serde(default)]
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub amount: u64,
    /// Pack sizes the allocation was computed against, largest first.
    pub pack_sizes: Vec<u64>,
    pub allocation: Allocation,
    pub total_items: u64,
    pub total_packs: u64,
    pub overfill: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackSizesResponse {
    pub pack_sizes: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, InputError> {
    serde_json::from_str(body).map_err(|e| InputError::MalformedRequest {
        message: e.to_string(),
    })
}

impl SetPacksRequest {
    pub fn from_json(body: &str) -> Result<Self, InputError> {
        decode(body)
    }
}

impl CalculateRequest {
    pub fn from_json(body: &str) -> Result<Self, InputError> {
        decode(body)
    }
}
