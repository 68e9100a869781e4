//! World model for the tank bot.
//!
//! Owns the hecs ECS world holding every reported object, applies the
//! engine's per-message deltas, and builds the threat estimator's input.

pub mod model;
pub mod systems;
pub mod world_setup;

pub use model::WorldModel;
pub use systems::bounds::MapBounds;
pub use tankbot_core as core;
