//! Generic actor framework for resource management.
//!
//! This module provides the building blocks every resource shares: the
//! [`ActorEntity`] contract, the [`ResourceActor`] that owns a store and runs
//! the validation pipelines, and the [`ResourceClient`] used to reach it.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns one store
//! - [`ResourceClient`] - Type-safe, cloneable handle to an actor
//! - [`IdAllocator`] - Process-wide identifier source
//! - [`FrameworkError`] - Channel failures between client and actor
//!
//! # Testing
//!
//! See [`mock`] for helpers that test client logic without spawning actors.

pub mod actor;
pub mod allocator;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use allocator::IdAllocator;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
