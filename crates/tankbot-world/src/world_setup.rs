//! Entity spawn factory for engine objects.
//!
//! Every reported object becomes one hecs entity. Components are only added
//! for fields the payload actually carries, so a bullet without a velocity
//! simply has no `Velocity` component.

use hecs::{Entity, EntityBuilder, World};

use tankbot_core::components::{Corners, FirstSeen, Owner};
use tankbot_core::state::ObjectState;
use tankbot_core::EntityId;

/// Spawn an object with the given first-seen order.
pub fn spawn_object(
    world: &mut World,
    id: EntityId,
    state: &ObjectState,
    first_seen: FirstSeen,
) -> Entity {
    let mut builder = EntityBuilder::new();
    builder.add(id).add(state.kind).add(first_seen);

    if let Some(position) = state.point_position() {
        builder.add(position);
    }
    if let Some(velocity) = state.point_velocity() {
        builder.add(velocity);
    }

    let corners = state.corners();
    if !corners.is_empty() {
        builder.add(Corners(corners));
    }

    if let Some(owner) = &state.owner {
        builder.add(Owner(owner.clone()));
    }

    world.spawn(builder.build())
}
