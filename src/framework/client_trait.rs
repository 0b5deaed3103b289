//! # ActorClient Trait
//!
//! Common read operations for resource-specific clients, built on top of the
//! generic [`ResourceClient`].

use crate::error::ApiError;
use crate::framework::{ActorEntity, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// Implementors only hand out their inner [`ResourceClient`]; `list` and
/// `read` come for free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Every entity, or only those whose id equals `filter`.
    #[tracing::instrument(skip(self))]
    async fn list(&self, filter: Option<String>) -> Result<Vec<T>, ApiError> {
        tracing::debug!("Sending request");
        self.inner().list(filter).await
    }

    /// Fetch an entity by ID, failing with `NotFound` when absent.
    #[tracing::instrument(skip(self))]
    async fn read(&self, id: String) -> Result<T, ApiError> {
        tracing::debug!("Sending request");
        self.inner().read(id).await
    }
}
