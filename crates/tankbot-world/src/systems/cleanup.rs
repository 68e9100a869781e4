//! Cleanup system: removes objects the engine reported as deleted.

use std::collections::HashMap;

use hecs::{Entity, World};
use tracing::debug;

use tankbot_core::EntityId;

/// Despawn every listed object. Ids that are not tracked are ignored.
/// Uses a pre-allocated buffer to avoid per-turn allocation.
/// Returns how many objects were removed.
pub fn run(
    world: &mut World,
    index: &mut HashMap<EntityId, Entity>,
    deleted: &[EntityId],
    despawn_buffer: &mut Vec<Entity>,
) -> usize {
    despawn_buffer.clear();

    for id in deleted {
        match index.remove(id) {
            Some(entity) => despawn_buffer.push(entity),
            None => debug!(%id, "deletion of unknown object ignored"),
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        if let Err(err) = world.despawn(entity) {
            debug!(?entity, %err, "indexed entity already gone from world");
        }
    }
    removed
}
