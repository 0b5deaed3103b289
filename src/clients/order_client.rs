//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! Lifecycle rules (legal statuses, delivered orders, pending-only deletion)
//! are enforced by the actor; this client only shapes the requests.

use crate::error::ApiError;
use crate::framework::{ActorClient, ResourceClient};
use crate::model::Order;
use crate::pipeline::Request;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, payload))]
    pub async fn create_order(&self, payload: Value) -> Result<Order, ApiError> {
        debug!("create_order called");
        let order = self.inner.create(Request::new(None, payload)).await?;
        info!(order_id = %order.id, "Order placed");
        Ok(order)
    }

    #[instrument(skip(self, payload))]
    pub async fn update_order(&self, id: String, payload: Value) -> Result<Order, ApiError> {
        debug!("Sending request");
        self.inner.update(Request::new(Some(id), payload)).await
    }

    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: String) -> Result<(), ApiError> {
        debug!("Sending request");
        self.inner.delete(id).await
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }
}
