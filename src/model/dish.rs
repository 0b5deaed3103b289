use serde::{Deserialize, Serialize};

/// A dish on the menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Dish`](#impl-ActorEntity-for-Dish) for the
/// create and update pipelines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Smallest currency unit, always above zero.
    #[serde(deserialize_with = "super::whole::deserialize")]
    pub price: u64,
    pub image_url: String,
}

/// Payload for creating a new dish.
#[derive(Debug, Clone, Deserialize)]
pub struct DishCreate {
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "super::whole::deserialize")]
    pub price: u64,
    pub image_url: String,
}

/// Payload for updating a dish. Every mutable field is replaced.
pub type DishUpdate = DishCreate;

impl Dish {
    pub fn new(id: impl Into<String>, params: DishCreate) -> Self {
        Self {
            id: id.into(),
            name: params.name,
            description: params.description,
            price: params.price,
            image_url: params.image_url,
        }
    }
}
