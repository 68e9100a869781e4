//! Threat estimation for the tank bot.
//!
//! Projects the own tank and every projectile forward at constant velocity,
//! finds when each pair is closest, and ranks projectiles by that projected
//! miss distance. Pure computation: no I/O and no shared state.

pub mod approach;
pub mod ranking;

pub use approach::{closest_approach, Approach, ApproachTime};
pub use ranking::{assess, rank_threats, RankedThreat, ThreatError, ThreatPicture};

pub use tankbot_core as core;

#[cfg(test)]
mod tests;
