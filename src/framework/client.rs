//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::error::ApiError;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use crate::pipeline::Request;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only the sender half of the actor's channel, so cloning is cheap and
/// clones can be handed to as many tasks as needed. Every method resolves to
/// the actor's answer, or to [`FrameworkError`] (wrapped in [`ApiError`]) when
/// the actor is gone.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn list(&self, filter: Option<String>) -> Result<Vec<T>, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::List { filter, respond_to }).await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, request: Request) -> Result<T, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Create {
            request,
            respond_to,
        })
        .await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn read(&self, id: String) -> Result<T, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Read { id, respond_to }).await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, request: Request) -> Result<T, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Update {
            request,
            respond_to,
        })
        .await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: String) -> Result<(), ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Delete { id, respond_to }).await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    async fn send(&self, request: ResourceRequest<T>) -> Result<(), FrameworkError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }
}
