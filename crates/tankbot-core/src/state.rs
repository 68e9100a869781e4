//! World-state messages sent by the engine.
//!
//! Every non-sentinel line is an envelope `{"message": {...}}`. The body is
//! either the handshake naming both tanks or a world delta listing updated
//! and deleted objects. Updated objects keep the order the engine sent them
//! in, which later becomes the first-seen order of projectiles.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::ObjectKind;
use crate::ids::EntityId;
use crate::types::{Position, Velocity};

/// A vector field that is a single pair for most objects and a list of pairs
/// for boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coords {
    Point([f64; 2]),
    Path(Vec<[f64; 2]>),
}

/// Full state of one object. An update replaces the previous state wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectState {
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Coords>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<Coords>,
    /// Shooter of a bullet.
    #[serde(default, rename = "tank_id", skip_serializing_if = "Option::is_none")]
    pub owner: Option<EntityId>,
}

impl ObjectState {
    /// Position when the object is a single point.
    pub fn point_position(&self) -> Option<Position> {
        match &self.position {
            Some(Coords::Point(p)) => Some(Position::from(*p)),
            _ => None,
        }
    }

    /// Velocity when the object moves as a single point.
    pub fn point_velocity(&self) -> Option<Velocity> {
        match &self.velocity {
            Some(Coords::Point(v)) => Some(Velocity::from(*v)),
            _ => None,
        }
    }

    /// Corner list of a polygonal object such as a boundary.
    pub fn corners(&self) -> Vec<Position> {
        match &self.position {
            Some(Coords::Path(points)) => points.iter().copied().map(Position::from).collect(),
            _ => Vec::new(),
        }
    }
}

/// First message of a game: which tank is ours and which is the enemy's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Handshake {
    #[serde(rename = "your-tank-id")]
    pub own_tank_id: EntityId,
    #[serde(rename = "enemy-tank-id")]
    pub enemy_tank_id: EntityId,
}

/// Objects created, updated or deleted since the previous message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldDelta {
    /// In the order the engine listed them.
    pub updated_objects: Vec<(EntityId, ObjectState)>,
    pub deleted_objects: Vec<EntityId>,
}

/// Body of an envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
    Handshake(Handshake),
    Delta(WorldDelta),
}

/// `{"message": <body>}`. Any other top-level key is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope {
    pub message: MessageBody,
}

/// One inbound line, sentinels included.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineMessage {
    Handshake(Handshake),
    Delta(WorldDelta),
    /// Initial world state is complete.
    EndInit,
    /// Game over.
    End,
}

impl From<MessageBody> for EngineMessage {
    fn from(body: MessageBody) -> Self {
        match body {
            MessageBody::Handshake(h) => EngineMessage::Handshake(h),
            MessageBody::Delta(d) => EngineMessage::Delta(d),
        }
    }
}

/// Object map deserialized into a vector so that document order survives.
struct OrderedObjects(Vec<(EntityId, ObjectState)>);

impl<'de> Deserialize<'de> for OrderedObjects {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ObjectsVisitor;

        impl<'de> Visitor<'de> for ObjectsVisitor {
            type Value = OrderedObjects;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of object id to object state")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut objects = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((id, state)) = map.next_entry::<EntityId, ObjectState>()? {
                    objects.push((id, state));
                }
                Ok(OrderedObjects(objects))
            }
        }

        deserializer.deserialize_map(ObjectsVisitor)
    }
}

impl<'de> Deserialize<'de> for MessageBody {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BodyVisitor;

        impl<'de> Visitor<'de> for BodyVisitor {
            type Value = MessageBody;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a handshake or a world delta")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut own_tank_id: Option<EntityId> = None;
                let mut enemy_tank_id: Option<EntityId> = None;
                let mut delta = WorldDelta::default();

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "your-tank-id" => own_tank_id = Some(map.next_value()?),
                        "enemy-tank-id" => enemy_tank_id = Some(map.next_value()?),
                        "updated_objects" => {
                            delta.updated_objects = map.next_value::<OrderedObjects>()?.0;
                        }
                        "deleted_objects" => delta.deleted_objects = map.next_value()?,
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                match (own_tank_id, enemy_tank_id) {
                    (Some(own_tank_id), Some(enemy_tank_id)) => {
                        Ok(MessageBody::Handshake(Handshake {
                            own_tank_id,
                            enemy_tank_id,
                        }))
                    }
                    (Some(_), None) => Err(de::Error::missing_field("enemy-tank-id")),
                    (None, Some(_)) => Err(de::Error::missing_field("your-tank-id")),
                    (None, None) => Ok(MessageBody::Delta(delta)),
                }
            }
        }

        deserializer.deserialize_map(BodyVisitor)
    }
}
