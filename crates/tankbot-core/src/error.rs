use crate::enums::KinematicField;
use crate::ids::EntityId;

/// An entity lacks a field needed for constant-velocity extrapolation.
///
/// This points at an inconsistent world model upstream, so it is reported to
/// the caller rather than papered over with a default.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("entity {id} has no {field}")]
pub struct MissingKinematicDataError {
    pub id: EntityId,
    pub field: KinematicField,
}
