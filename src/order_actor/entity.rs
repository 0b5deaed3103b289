//! ActorEntity trait implementation for the Order domain type.
//!
//! This module wires the generic field checks and the lifecycle
//! [`guards`](super::guards) into the create, update and delete pipelines of
//! [`Order`].

use super::guards;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderUpdate};
use crate::pipeline::checks::{self, Has, Text};
use crate::pipeline::Pipeline;

impl ActorEntity for Order {
    const KIND: &'static str = "Order";
    type Create = OrderCreate;
    type Update = OrderUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    /// New orders always start out `pending`.
    fn from_create_params(id: String, params: OrderCreate) -> Self {
        Order::new(id, params)
    }

    /// # Fields Updated
    /// `deliverTo`, `mobileNumber`, `status` and `dishes`; the id stays.
    fn on_update(&mut self, update: OrderUpdate) {
        self.deliver_to = update.deliver_to;
        self.mobile_number = update.mobile_number;
        self.status = update.status;
        self.dishes = update.dishes;
    }

    fn create_pipeline() -> Pipeline<Self> {
        Pipeline::new()
            .then(Has("deliverTo"))
            .then(Has("mobileNumber"))
            .then(Has("dishes"))
            .then(Text("deliverTo"))
            .then(Text("mobileNumber"))
            .then(guards::dishes_not_empty)
            .then(guards::dish_ids_valid)
            .then(guards::quantities_valid)
    }

    fn update_pipeline() -> Pipeline<Self> {
        Pipeline::new()
            .then(checks::resolve::<Order>)
            .then(Has("deliverTo"))
            .then(Has("mobileNumber"))
            .then(Has("status"))
            .then(Has("dishes"))
            .then(Text("deliverTo"))
            .then(Text("mobileNumber"))
            .then(guards::dishes_not_empty)
            .then(guards::dish_ids_valid)
            .then(guards::quantities_valid)
            .then(guards::status_legal)
            .then(guards::not_delivered)
            .then(checks::id_matches_path::<Order>)
    }

    fn delete_pipeline() -> Option<Pipeline<Self>> {
        Some(
            Pipeline::new()
                .then(checks::resolve::<Order>)
                .then(guards::pending_only),
        )
    }
}
