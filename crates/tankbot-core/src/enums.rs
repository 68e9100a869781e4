//! Enumeration types used throughout the bot.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Object type tag as sent by the engine in the `"type"` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ObjectKind {
    Tank,
    Bullet,
    Wall,
    DestructibleWall,
    /// Static map edge; its corners define the map size.
    Boundary,
    /// Shrinking play-area edge.
    ClosingBoundary,
    Powerup,
    /// Tag this bot does not know about. Kept so the object is still tracked.
    Unknown(u8),
}

impl From<u8> for ObjectKind {
    fn from(tag: u8) -> Self {
        match tag {
            1 => ObjectKind::Tank,
            2 => ObjectKind::Bullet,
            3 => ObjectKind::Wall,
            4 => ObjectKind::DestructibleWall,
            5 => ObjectKind::Boundary,
            6 => ObjectKind::ClosingBoundary,
            7 => ObjectKind::Powerup,
            other => ObjectKind::Unknown(other),
        }
    }
}

impl From<ObjectKind> for u8 {
    fn from(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Tank => 1,
            ObjectKind::Bullet => 2,
            ObjectKind::Wall => 3,
            ObjectKind::DestructibleWall => 4,
            ObjectKind::Boundary => 5,
            ObjectKind::ClosingBoundary => 6,
            ObjectKind::Powerup => 7,
            ObjectKind::Unknown(tag) => tag,
        }
    }
}

/// Role of a tracked entity in threat assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// The unit this bot controls.
    Own,
    /// A moving threat source.
    Projectile,
}

/// Which kinematic field an entity is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KinematicField {
    Position,
    Velocity,
}

impl fmt::Display for KinematicField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position => write!(f, "position"),
            Self::Velocity => write!(f, "velocity"),
        }
    }
}
