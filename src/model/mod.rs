//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod dish;
pub mod order;
mod whole;

pub use dish::*;
pub use order::*;
