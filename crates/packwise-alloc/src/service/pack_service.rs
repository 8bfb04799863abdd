//! Pack service operations.

use std::sync::Arc;

use packwise_core::config::PackwiseConfig;
use packwise_core::errors::{AllocationError, InputError, ServiceError};
use packwise_core::registry::PackSizeRegistry;
use packwise_core::types::{AllocationOutcome, PackSizes};

use super::types::{
    CalculateRequest, CalculateResponse, HealthResponse, PackSizesResponse, SetPacksRequest,
};
use crate::allocator::Allocator;

/// Validates requests, snapshots the registry, and runs the allocator.
///
/// Cloning is cheap and clones share one registry.
#[derive(Debug, Clone)]
pub struct PackService {
    registry: Arc<PackSizeRegistry>,
    allocator: Allocator,
}

impl PackService {
    pub fn new(registry: Arc<PackSizeRegistry>, allocator: Allocator) -> Self {
        Self {
            registry,
            allocator,
        }
    }

    /// Build a service seeded with the configured default pack sizes.
    pub fn from_config(config: &PackwiseConfig) -> Result<Self, ServiceError> {
        let sizes = config.packs.effective_sizes()?;
        Ok(Self::new(
            Arc::new(PackSizeRegistry::new(sizes)),
            Allocator::from_config(config),
        ))
    }

    pub fn registry(&self) -> &Arc<PackSizeRegistry> {
        &self.registry
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse::ok()
    }

    /// Current pack sizes, smallest first.
    pub fn pack_sizes(&self) -> Result<PackSizesResponse, ServiceError> {
        let snapshot = self.registry.snapshot()?;
        Ok(PackSizesResponse {
            pack_sizes: snapshot.sizes.ascending(),
        })
    }

    /// Replace the pack sizes. Returns the stored set, largest first.
    pub fn set_pack_sizes(
        &self,
        request: &SetPacksRequest,
    ) -> Result<PackSizesResponse, ServiceError> {
        let sizes = PackSizes::from_signed(&request.pack_sizes)?;
        let snapshot = self.registry.replace(sizes)?;
        Ok(PackSizesResponse {
            pack_sizes: snapshot.sizes.as_slice().to_vec(),
        })
    }

    /// Allocate packs for the requested amount against the current sizes.
    pub fn calculate(&self, request: &CalculateRequest) -> Result<CalculateResponse, ServiceError> {
        if request.amount <= 0 {
            return Err(InputError::NonPositiveTarget {
                target: request.amount,
            }
            .into());
        }
        let amount = request.amount as u64;
        let snapshot = self.registry.snapshot()?;

        let span = tracing::debug_span!(
            "calculate",
            requested = amount,
            registry_version = snapshot.version
        );
        let _entered = span.enter();

        let allocation = match self.allocator.allocate(amount, &snapshot.sizes)? {
            AllocationOutcome::Allocated(allocation) => allocation,
            AllocationOutcome::Infeasible => {
                return Err(AllocationError::Infeasible { target: amount }.into());
            }
        };

        let total_items = allocation.total_items();
        let total_packs = allocation.total_packs();
        Ok(CalculateResponse {
            amount,
            pack_sizes: snapshot.sizes.as_slice().to_vec(),
            overfill: total_items - amount,
            allocation,
            total_items,
            total_packs,
        })
    }
}

impl Default for PackService {
    fn default() -> Self {
        Self::new(Arc::new(PackSizeRegistry::default()), Allocator::default())
    }
}
