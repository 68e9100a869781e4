//! ECS components for hecs entities in the world model.
//!
//! Components are plain data. `EntityId`, `ObjectKind`, `Position` and
//! `Velocity` are used directly as components alongside these.

use serde::{Deserialize, Serialize};

use crate::ids::EntityId;
use crate::types::Position;

/// Order in which the object was first reported. Survives wholesale updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FirstSeen(pub u64);

/// Corners of a polygonal object (boundaries).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corners(pub Vec<Position>);

/// Tank that fired a bullet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner(pub EntityId);
