//! Dish-specific resource logic and entity implementation.

pub mod entity;

use crate::clients::DishClient;
use crate::framework::{IdAllocator, ResourceActor};
use crate::model::Dish;

/// Creates a new Dish actor and its client.
pub fn new(buffer_size: usize, ids: IdAllocator) -> (ResourceActor<Dish>, DishClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ids);
    (actor, DishClient::new(generic_client))
}
