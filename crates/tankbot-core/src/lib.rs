//! Core types and definitions for the tank bot.
//!
//! This crate defines the vocabulary shared across all other crates:
//! identifiers, geometry, tracked entities, engine messages, commands,
//! ECS components and constants. It has no runtime and performs no I/O.

pub mod commands;
pub mod components;
pub mod constants;
pub mod entity;
pub mod enums;
pub mod error;
pub mod ids;
pub mod state;
pub mod types;

pub use entity::TrackedEntity;
pub use error::MissingKinematicDataError;
pub use ids::EntityId;
