//! Commands sent from the bot to the engine.
//!
//! One action is written per turn, even when the bot does nothing.

use serde::{Deserialize, Serialize};

/// A turn's commands. Angles are engine degrees; an absent key means "do not".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnAction {
    /// Heading to drive toward this turn.
    #[serde(rename = "move", default, skip_serializing_if = "Option::is_none")]
    pub move_angle: Option<f64>,
    /// Heading to fire at this turn.
    #[serde(rename = "shoot", default, skip_serializing_if = "Option::is_none")]
    pub shoot_angle: Option<f64>,
}

impl TurnAction {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.move_angle.is_none() && self.shoot_angle.is_none()
    }
}
