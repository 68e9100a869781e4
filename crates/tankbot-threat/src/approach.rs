//! Closest approach between two points moving at constant velocity.
//!
//! Pure functions on plain data. No ECS dependency.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use tankbot_core::types::{KinematicPoint, Position};

/// When two points are closest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ApproachTime {
    /// Turns from now, never negative.
    At(f64),
    /// No relative motion: the separation never changes.
    Never,
    /// Kinematics were unavailable, nothing was projected.
    Unknown,
}

impl ApproachTime {
    /// Finite time to closest approach, if any.
    pub fn turns(&self) -> Option<f64> {
        match self {
            ApproachTime::At(t) => Some(*t),
            ApproachTime::Never | ApproachTime::Unknown => None,
        }
    }
}

/// Output of [`closest_approach`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approach {
    /// Separation at the closest point, `>= 0`.
    pub distance: f64,
    pub time: ApproachTime,
    /// Where the reference point will be at that time.
    pub own_at: Position,
    /// Where the other point will be at that time.
    pub other_at: Position,
}

/// Project `own` and `other` forward to the moment they are closest.
///
/// The squared separation `|dp + dv*t|^2` is minimized at
/// `t* = -(dp . dv) / (dv . dv)`. A minimum in the past is clamped to now,
/// and zero relative velocity keeps the current separation forever.
pub fn closest_approach(own: &KinematicPoint, other: &KinematicPoint) -> Approach {
    let dp: DVec2 = other.position.as_dvec2() - own.position.as_dvec2();
    let dv: DVec2 = other.velocity.as_dvec2() - own.velocity.as_dvec2();
    let dv_sq = dv.length_squared();

    if dv_sq == 0.0 {
        return Approach {
            distance: dp.length(),
            time: ApproachTime::Never,
            own_at: own.position,
            other_at: other.position,
        };
    }

    let t_star = -dp.dot(dv) / dv_sq;
    let t = if t_star > 0.0 { t_star } else { 0.0 };

    let own_at = own.at(t);
    let other_at = other.at(t);

    Approach {
        distance: own_at.distance_to(&other_at),
        time: ApproachTime::At(t),
        own_at,
        other_at,
    }
}
