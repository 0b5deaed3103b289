//! ActorEntity trait implementation for the Dish domain type.
//!
//! Dishes can be created, read, listed and updated. There is no delete.

use crate::framework::ActorEntity;
use crate::model::{Dish, DishCreate, DishUpdate};
use crate::pipeline::checks::{self, Has, PositiveWhole, Text};
use crate::pipeline::Pipeline;

/// Presence checks, then content checks, in the order errors should surface.
fn with_field_checks(pipeline: Pipeline<Dish>) -> Pipeline<Dish> {
    pipeline
        .then(Has("name"))
        .then(Has("description"))
        .then(Has("price"))
        .then(Has("image_url"))
        .then(Text("name"))
        .then(Text("description"))
        .then(PositiveWhole("price"))
        .then(Text("image_url"))
}

impl ActorEntity for Dish {
    const KIND: &'static str = "Dish";
    type Create = DishCreate;
    type Update = DishUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create_params(id: String, params: DishCreate) -> Self {
        Dish::new(id, params)
    }

    /// # Fields Updated
    /// `name`, `description`, `price` and `image_url`; the id stays.
    fn on_update(&mut self, update: DishUpdate) {
        self.name = update.name;
        self.description = update.description;
        self.price = update.price;
        self.image_url = update.image_url;
    }

    fn create_pipeline() -> Pipeline<Self> {
        with_field_checks(Pipeline::new())
    }

    fn update_pipeline() -> Pipeline<Self> {
        with_field_checks(Pipeline::new().then(checks::resolve::<Dish>))
            .then(checks::id_matches_path::<Dish>)
    }
}
