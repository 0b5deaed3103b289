//! # Dish Client
//!
//! Provides a high‑level API for interacting with the `Dish` actor.
//! It wraps a `ResourceClient<Dish>` and exposes the write operations;
//! `list` and `read` come from [`ActorClient`].

use crate::error::ApiError;
use crate::framework::{ActorClient, ResourceClient};
use crate::model::Dish;
use crate::pipeline::Request;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

/// Client for interacting with the Dish actor.
#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
}

impl DishClient {
    pub fn new(inner: ResourceClient<Dish>) -> Self {
        Self { inner }
    }

    /// Creates a dish from a `{ "data": { … } }` payload.
    #[instrument(skip(self, payload))]
    pub async fn create_dish(&self, payload: Value) -> Result<Dish, ApiError> {
        debug!("Sending request");
        self.inner.create(Request::new(None, payload)).await
    }

    /// Replaces the mutable fields of dish `id`.
    #[instrument(skip(self, payload))]
    pub async fn update_dish(&self, id: String, payload: Value) -> Result<Dish, ApiError> {
        debug!("Sending request");
        self.inner.update(Request::new(Some(id), payload)).await
    }

    /// Always refused: dishes stay on the menu.
    #[instrument(skip(self))]
    pub async fn delete_dish(&self, id: String) -> Result<(), ApiError> {
        debug!("Sending request");
        self.inner.delete(id).await
    }
}

#[async_trait]
impl ActorClient<Dish> for DishClient {
    fn inner(&self) -> &ResourceClient<Dish> {
        &self.inner
    }
}
