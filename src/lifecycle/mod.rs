//! # System Lifecycle & Orchestration
//!
//! Starting, seeding and stopping the actors, plus logging setup.
//!
//! ## Startup
//!
//! 1. **Allocator** - one [`IdAllocator`](crate::framework::IdAllocator) is
//!    created and cloned into both actors.
//! 2. **Seeding** - entities from the seed file are pushed straight into the
//!    stores and their ids reserved.
//! 3. **Spawn** - each actor runs in its own Tokio task.
//!
//! ## Graceful Shutdown
//!
//! Dropping every client closes the actor's channel; `receiver.recv()` then
//! returns `None`, the actor logs its final store size and the task ends.
//! [`RestaurantSystem::shutdown`] drops its own clients and awaits the tasks.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the `tracing-subscriber` formatter:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Lifecycle and mutations
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

pub mod restaurant_system;
pub mod seed;
pub mod tracing;

pub use self::restaurant_system::RestaurantSystem;
pub use self::seed::SeedData;
pub use self::tracing::setup_tracing;
