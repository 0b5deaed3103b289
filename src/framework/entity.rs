//! # ActorEntity Trait
//!
//! The contract a resource (dish, order) fulfils to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor). The actor owns the
//! store and the request loop; the entity supplies its DTOs, how a validated
//! DTO becomes (or changes) an entity, and the ordered checks each write
//! operation must pass first.

use crate::pipeline::{checks, Pipeline};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Pipelines
/// Every operation runs its pipeline before the handler touches the store.
/// `read_pipeline` has a default (resolve the path id); `delete_pipeline`
/// defaults to `None`, meaning the resource cannot be deleted at all.
pub trait ActorEntity: Clone + Debug + Serialize + Send + Sync + 'static {
    /// Human-readable kind used in messages and logs, e.g. `"Dish"`.
    const KIND: &'static str;

    /// Typed view of a validated create payload.
    type Create: DeserializeOwned + Debug + Send;

    /// Typed view of a validated update payload.
    type Update: DeserializeOwned + Debug + Send;

    /// The identifier assigned at creation.
    fn id(&self) -> &str;

    /// Builds the entity from an allocator-issued id and the create DTO.
    fn from_create_params(id: String, params: Self::Create) -> Self;

    /// Overwrites the mutable fields in place. The id is never touched.
    fn on_update(&mut self, update: Self::Update);

    /// Checks run before a create.
    fn create_pipeline() -> Pipeline<Self>;

    /// Checks run before an update, including existence resolution.
    fn update_pipeline() -> Pipeline<Self>;

    /// Checks run before a read.
    fn read_pipeline() -> Pipeline<Self> {
        Pipeline::new().then(checks::resolve::<Self>)
    }

    /// Checks run before a delete, or `None` when the kind is not deletable.
    fn delete_pipeline() -> Option<Pipeline<Self>> {
        None
    }
}
