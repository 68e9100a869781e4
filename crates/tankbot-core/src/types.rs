//! Fundamental geometric types.
//!
//! The engine sends every vector as a two-element array, so both types
//! serialize as `[x, y]`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in map units. x grows to the right, y grows upward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in map units per turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        (other.as_dvec2() - self.as_dvec2()).length()
    }

    /// Heading to another position in degrees, `[0, 360)`, 0 along +x,
    /// counter-clockwise. This is the angle convention of the engine.
    pub fn angle_to(&self, other: &Position) -> f64 {
        angle_of(other.as_dvec2() - self.as_dvec2())
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Speed magnitude (units/turn).
    pub fn speed(&self) -> f64 {
        self.as_dvec2().length()
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<[f64; 2]> for Position {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Position> for [f64; 2] {
    fn from(p: Position) -> Self {
        [p.x, p.y]
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<[f64; 2]> for Velocity {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Velocity> for [f64; 2] {
    fn from(v: Velocity) -> Self {
        [v.x, v.y]
    }
}

/// Position and velocity of one entity at the start of a turn.
///
/// Values are snapshots: a new turn produces a new point rather than
/// mutating the old one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KinematicPoint {
    pub position: Position,
    pub velocity: Velocity,
}

impl KinematicPoint {
    pub fn new(position: Position, velocity: Velocity) -> Self {
        Self { position, velocity }
    }

    /// Constant-velocity extrapolation: `position + velocity * t`.
    pub fn at(&self, t: f64) -> Position {
        (self.position.as_dvec2() + self.velocity.as_dvec2() * t).into()
    }
}

/// Angle of a direction vector in engine degrees (`[0, 360)`, 0 along +x).
pub fn angle_of(direction: DVec2) -> f64 {
    direction.y.atan2(direction.x).to_degrees().rem_euclid(360.0)
}
