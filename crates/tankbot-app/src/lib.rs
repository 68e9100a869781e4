//! Tank bot application.
//!
//! Wires the world model, threat estimator and decision logic to the
//! engine's line protocol.

pub mod comms;
pub mod config;
pub mod decision;
pub mod game_loop;

pub use config::BotConfig;
pub use game_loop::{run_session, SessionSummary};
pub use tankbot_core as core;
