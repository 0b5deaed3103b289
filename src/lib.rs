//! # Dish Orders
//!
//! An in-memory back end for a restaurant: a menu of dishes and the orders
//! placed against it, each kept in its own store and guarded by ordered
//! validation pipelines.
//!
//! ## 🏗️ Design
//!
//! Every store is owned by a [`ResourceActor`](framework::ResourceActor)
//! running in its own Tokio task. Requests are processed one at a time, so a
//! request's whole pipeline (field checks, existence resolution, lifecycle
//! guards, handler) finishes before the next one is looked at. No store needs
//! a lock.
//!
//! Both actors draw identifiers from one shared
//! [`IdAllocator`](framework::IdAllocator), so an id is unique across dishes
//! and orders.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`], [`pipeline`])
//! The generic actor, its client and message types, plus the check pipeline
//! every write passes through.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity),
//!   [`Pipeline`](pipeline::Pipeline), [`Check`](pipeline::Check).
//!
//! ### 2. The Resources ([`model`], [`dish_actor`], [`order_actor`])
//! Entity types and their pipelines. Orders add lifecycle guards: a legal
//! status, no updates once delivered, deletion only while pending.
//!
//! ### 3. The Interface ([`clients`], [`router`])
//! Typed clients over the raw message passing, and a router that maps
//! `(method, path, body)` onto them.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! Starting, seeding and stopping the actors; logging setup.
//! - **Key items**: [`RestaurantSystem`](lifecycle::RestaurantSystem).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! DISH_ORDERS_SEED_FILE=seed.json cargo run
//! ```
//!
//! ## Errors
//!
//! Every failure is an [`ApiError`] carrying the status a transport should
//! answer with (400, 404, 405, or 500 when an actor is unreachable).

pub mod clients;
pub mod config;
pub mod dish_actor;
pub mod error;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod pipeline;
pub mod router;

pub use error::ApiError;
