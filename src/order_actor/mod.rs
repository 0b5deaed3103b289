//! Order-specific resource logic: the entity implementation and the
//! lifecycle guards that decide which updates and deletions are legal.

pub mod entity;
pub mod guards;

use crate::clients::OrderClient;
use crate::framework::{IdAllocator, ResourceActor};
use crate::model::Order;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize, ids: IdAllocator) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ids);
    (actor, OrderClient::new(generic_client))
}
