//! World model: the bot's view of every object the engine has reported.
//!
//! `WorldModel` owns a hecs ECS world plus an id index. It is created from
//! the handshake, fed one delta per message, and queried by the decision
//! loop. Nothing here is global; the loop owns the model and lends it out.

use std::collections::HashMap;

use hecs::{Entity, World};
use tracing::{debug, info, warn};

use tankbot_core::components::{FirstSeen, Owner};
use tankbot_core::enums::{Category, KinematicField, ObjectKind};
use tankbot_core::state::{Handshake, WorldDelta};
use tankbot_core::types::{Position, Velocity};
use tankbot_core::{EntityId, MissingKinematicDataError, TrackedEntity};
use tankbot_threat::ThreatPicture;

use crate::systems;
use crate::systems::bounds::MapBounds;
use crate::world_setup;

pub struct WorldModel {
    world: World,
    index: HashMap<EntityId, Entity>,
    own_tank_id: EntityId,
    enemy_tank_id: EntityId,
    bounds: Option<MapBounds>,
    next_seen: u64,
    turn: u64,
    despawn_buffer: Vec<Entity>,
}

impl WorldModel {
    pub fn new(handshake: Handshake) -> Self {
        info!(
            own = %handshake.own_tank_id,
            enemy = %handshake.enemy_tank_id,
            "world model created"
        );
        Self {
            world: World::new(),
            index: HashMap::new(),
            own_tank_id: handshake.own_tank_id,
            enemy_tank_id: handshake.enemy_tank_id,
            bounds: None,
            next_seen: 0,
            turn: 0,
            despawn_buffer: Vec::new(),
        }
    }

    /// Apply part of the initial world state. Does not advance the turn.
    pub fn apply_init(&mut self, delta: WorldDelta) {
        self.apply(delta);
    }

    /// Close the init phase and derive the map size from boundaries.
    pub fn finish_init(&mut self) {
        self.bounds = systems::bounds::detect(&self.world);
        match self.bounds {
            Some(b) => info!(width = b.width, height = b.height, "map bounds detected"),
            None => warn!("no boundary objects in initial state, map bounds unknown"),
        }
    }

    /// Apply one turn's delta and advance the turn counter.
    pub fn apply_turn(&mut self, delta: WorldDelta) {
        self.turn += 1;
        self.apply(delta);
    }

    /// Deletions first, then wholesale replacement of every updated object.
    fn apply(&mut self, delta: WorldDelta) {
        let removed = systems::cleanup::run(
            &mut self.world,
            &mut self.index,
            &delta.deleted_objects,
            &mut self.despawn_buffer,
        );

        let updated = delta.updated_objects.len();
        for (id, state) in delta.updated_objects {
            let first_seen = match self.index.remove(&id) {
                Some(old) => {
                    let seen = self.world.get::<&FirstSeen>(old).map(|s| *s).ok();
                    if let Err(err) = self.world.despawn(old) {
                        debug!(%id, %err, "indexed entity already gone from world");
                    }
                    seen
                }
                None => None,
            };
            let first_seen = first_seen.unwrap_or_else(|| self.take_seen());
            let entity = world_setup::spawn_object(&mut self.world, id.clone(), &state, first_seen);
            self.index.insert(id, entity);
        }

        debug!(turn = self.turn, updated, removed, tracked = self.index.len(), "delta applied");
    }

    fn take_seen(&mut self) -> FirstSeen {
        let seen = FirstSeen(self.next_seen);
        self.next_seen += 1;
        seen
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn bounds(&self) -> Option<MapBounds> {
        self.bounds
    }

    pub fn own_tank_id(&self) -> &EntityId {
        &self.own_tank_id
    }

    pub fn enemy_tank_id(&self) -> &EntityId {
        &self.enemy_tank_id
    }

    /// Number of tracked objects.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn kind_of(&self, id: &str) -> Option<ObjectKind> {
        let entity = *self.index.get(id)?;
        self.world.get::<&ObjectKind>(entity).map(|k| *k).ok()
    }

    pub fn position_of(&self, id: &str) -> Option<Position> {
        let entity = *self.index.get(id)?;
        self.world.get::<&Position>(entity).map(|p| *p).ok()
    }

    pub fn velocity_of(&self, id: &str) -> Option<Velocity> {
        let entity = *self.index.get(id)?;
        self.world.get::<&Velocity>(entity).map(|v| *v).ok()
    }

    /// The own tank as a tracked entity. An absent tank has no position.
    pub fn own_tank(&self) -> Result<TrackedEntity, MissingKinematicDataError> {
        if !self.contains(self.own_tank_id.as_str()) {
            return Err(MissingKinematicDataError {
                id: self.own_tank_id.clone(),
                field: KinematicField::Position,
            });
        }
        TrackedEntity::from_parts(
            self.own_tank_id.clone(),
            Category::Own,
            self.position_of(self.own_tank_id.as_str()),
            self.velocity_of(self.own_tank_id.as_str()),
        )
    }

    /// Current enemy tank position, if it is tracked.
    pub fn enemy_position(&self) -> Option<Position> {
        self.position_of(self.enemy_tank_id.as_str())
    }

    /// Estimator input: the own tank plus every bullet it did not fire,
    /// in first-seen order.
    pub fn threat_picture(&self) -> ThreatPicture {
        let mut bullets: Vec<(FirstSeen, Result<TrackedEntity, MissingKinematicDataError>)> =
            Vec::new();

        let mut query = self.world.query::<(
            &EntityId,
            &ObjectKind,
            &FirstSeen,
            Option<&Position>,
            Option<&Velocity>,
            Option<&Owner>,
        )>();
        for (_entity, (id, kind, seen, pos, vel, owner)) in query.iter() {
            if *kind != ObjectKind::Bullet {
                continue;
            }
            if owner.is_some_and(|o| o.0 == self.own_tank_id) {
                continue;
            }
            bullets.push((
                *seen,
                TrackedEntity::from_parts(
                    id.clone(),
                    Category::Projectile,
                    pos.copied(),
                    vel.copied(),
                ),
            ));
        }
        bullets.sort_by_key(|(seen, _)| *seen);

        ThreatPicture {
            own: self.own_tank(),
            projectiles: bullets.into_iter().map(|(_, b)| b).collect(),
        }
    }
}
