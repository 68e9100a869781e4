//! Per-turn decision: dodge the closest imminent bullet or wander, and
//! shoot at the enemy.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use tankbot_core::commands::TurnAction;
use tankbot_core::constants::{EVASION_PROBE_DISTANCE, FULL_TURN_DEG};
use tankbot_core::types::{angle_of, KinematicPoint, Position};
use tankbot_core::TrackedEntity;
use tankbot_threat::{closest_approach, RankedThreat};
use tankbot_world::WorldModel;

use crate::config::BotConfig;

pub struct Decider {
    danger_radius: f64,
    horizon_turns: f64,
    rng: ChaCha8Rng,
    evasions: u64,
}

impl Decider {
    pub fn new(config: &BotConfig, seed: u64) -> Self {
        Self {
            danger_radius: config.danger_radius,
            horizon_turns: config.horizon_turns,
            rng: ChaCha8Rng::seed_from_u64(seed),
            evasions: 0,
        }
    }

    /// Turns on which a dodge was issued so far.
    pub fn evasions(&self) -> u64 {
        self.evasions
    }

    /// Choose this turn's action from the world and its threat ranking.
    ///
    /// Without a usable own tank no move is issued. Shooting only needs the
    /// own position.
    pub fn decide(&mut self, world: &WorldModel, ranking: &[RankedThreat]) -> TurnAction {
        let move_angle = match world.own_tank() {
            Ok(own) => Some(self.steer(world, &own, ranking)),
            Err(err) => {
                debug!(%err, "own tank unusable, holding position");
                None
            }
        };
        let shoot_angle = world
            .position_of(world.own_tank_id().as_str())
            .map(|from| self.aim(world, &from));

        TurnAction {
            move_angle,
            shoot_angle,
        }
    }

    /// Whether a ranked threat is close and soon enough to dodge.
    pub fn is_imminent(&self, threat: &RankedThreat) -> bool {
        threat.distance < self.danger_radius
            && threat
                .time
                .turns()
                .is_some_and(|turns| turns <= self.horizon_turns)
    }

    fn steer(&mut self, world: &WorldModel, own: &TrackedEntity, ranking: &[RankedThreat]) -> f64 {
        if let Some(threat) = ranking.iter().find(|t| self.is_imminent(t)) {
            if let Some(heading) = evasion_heading(world, own, threat) {
                self.evasions += 1;
                info!(
                    turn = world.turn(),
                    threat = %threat.id,
                    distance = threat.distance,
                    heading,
                    "evading"
                );
                return heading;
            }
        }
        self.random_angle()
    }

    fn aim(&mut self, world: &WorldModel, from: &Position) -> f64 {
        match world.enemy_position() {
            Some(target) => from.angle_to(&target),
            None => self.random_angle(),
        }
    }

    fn random_angle(&mut self) -> f64 {
        self.rng.gen_range(0.0..FULL_TURN_DEG)
    }
}

/// Heading perpendicular to the threat's motion relative to the own tank.
///
/// With known bounds the side leaving more room to the nearest edge wins.
/// Otherwise the side pointing away from where the bullet will be at closest
/// approach. `None` when the threat's kinematics are gone or it does not
/// move relative to us.
pub fn evasion_heading(
    world: &WorldModel,
    own: &TrackedEntity,
    threat: &RankedThreat,
) -> Option<f64> {
    let other = KinematicPoint::new(
        world.position_of(threat.id.as_str())?,
        world.velocity_of(threat.id.as_str())?,
    );
    let relative = other.velocity.as_dvec2() - own.kinematics.velocity.as_dvec2();
    if relative.length_squared() == 0.0 {
        return None;
    }

    let left = relative.perp().normalize();
    let right = -left;
    let here = own.kinematics.position.as_dvec2();

    let side = match world.bounds() {
        Some(bounds) => {
            let room = |dir: DVec2| {
                bounds.edge_margin(&Position::from(here + dir * EVASION_PROBE_DISTANCE))
            };
            if room(left) >= room(right) {
                left
            } else {
                right
            }
        }
        None => {
            let approach = closest_approach(&own.kinematics, &other);
            let away = approach.own_at.as_dvec2() - approach.other_at.as_dvec2();
            if away.dot(left) >= 0.0 {
                left
            } else {
                right
            }
        }
    };

    Some(angle_of(side))
}
