//! Tracked entities: the validated input to threat assessment.

use serde::{Deserialize, Serialize};

use crate::enums::{Category, KinematicField};
use crate::error::MissingKinematicDataError;
use crate::ids::EntityId;
use crate::types::{KinematicPoint, Position, Velocity};

/// A positioned, moving object the bot reasons about.
///
/// Position and velocity are required; use [`TrackedEntity::from_parts`] to
/// build one from fields that may be absent in an engine payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedEntity {
    pub id: EntityId,
    pub category: Category,
    pub kinematics: KinematicPoint,
}

impl TrackedEntity {
    pub fn new(id: impl Into<EntityId>, category: Category, kinematics: KinematicPoint) -> Self {
        Self {
            id: id.into(),
            category,
            kinematics,
        }
    }

    /// Validate optional fields into an entity. Position is checked first.
    pub fn from_parts(
        id: EntityId,
        category: Category,
        position: Option<Position>,
        velocity: Option<Velocity>,
    ) -> Result<Self, MissingKinematicDataError> {
        let Some(position) = position else {
            return Err(MissingKinematicDataError {
                id,
                field: KinematicField::Position,
            });
        };
        let Some(velocity) = velocity else {
            return Err(MissingKinematicDataError {
                id,
                field: KinematicField::Velocity,
            });
        };
        Ok(Self {
            id,
            category,
            kinematics: KinematicPoint::new(position, velocity),
        })
    }

    pub fn is_projectile(&self) -> bool {
        self.category == Category::Projectile
    }
}
