//! Threat ranking: order projectiles by how close they will pass.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use tankbot_core::{EntityId, MissingKinematicDataError, TrackedEntity};

use crate::approach::{closest_approach, ApproachTime};

/// One entry of a threat ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedThreat {
    pub id: EntityId,
    /// Projected minimum separation from the own entity.
    pub distance: f64,
    pub time: ApproachTime,
}

/// Estimator input as read from the world model, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreatPicture {
    pub own: Result<TrackedEntity, MissingKinematicDataError>,
    /// In first-seen order.
    pub projectiles: Vec<Result<TrackedEntity, MissingKinematicDataError>>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThreatError {
    #[error("own entity cannot be assessed: {0}")]
    OwnKinematics(#[from] MissingKinematicDataError),
}

/// Rank projectiles by projected minimum separation from `own`, closest first.
///
/// Entries are ordered by distance alone with a stable sort, so equal
/// distances keep input order. Anything not tagged as a projectile, carrying
/// the own id, or repeating an id already ranked is left out.
pub fn rank_threats<'a>(
    own: &TrackedEntity,
    projectiles: impl IntoIterator<Item = &'a TrackedEntity>,
) -> Vec<RankedThreat> {
    let mut seen: HashSet<&EntityId> = HashSet::new();
    let mut ranking = Vec::new();

    for entity in projectiles {
        if !entity.is_projectile() || entity.id == own.id {
            debug!(id = %entity.id, category = ?entity.category, "not a projectile, skipped");
            continue;
        }
        if !seen.insert(&entity.id) {
            debug!(id = %entity.id, "duplicate projectile, skipped");
            continue;
        }

        let approach = closest_approach(&own.kinematics, &entity.kinematics);
        ranking.push(RankedThreat {
            id: entity.id.clone(),
            distance: approach.distance,
            time: approach.time,
        });
    }

    ranking.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranking
}

/// Rank a world picture, tolerating malformed projectiles.
///
/// Fails only when the own entity lacks kinematics. A projectile that lacks
/// them is logged and appended after every assessed projectile with an
/// infinite distance and [`ApproachTime::Unknown`], so the ranking still
/// names every projectile. The own id and ids already ranked are not repeated.
pub fn assess(picture: &ThreatPicture) -> Result<Vec<RankedThreat>, ThreatError> {
    let own = picture.own.as_ref().map_err(|e| ThreatError::from(e.clone()))?;

    let mut ranking = rank_threats(
        own,
        picture.projectiles.iter().filter_map(|p| p.as_ref().ok()),
    );

    let mut seen: HashSet<EntityId> = ranking.iter().map(|r| r.id.clone()).collect();
    for err in picture.projectiles.iter().filter_map(|p| p.as_ref().err()) {
        if err.id == own.id || !seen.insert(err.id.clone()) {
            debug!(id = %err.id, "malformed entry is own or already ranked, skipped");
            continue;
        }
        warn!(id = %err.id, field = %err.field, "projectile missing kinematics, ranked last");
        ranking.push(RankedThreat {
            id: err.id.clone(),
            distance: f64::INFINITY,
            time: ApproachTime::Unknown,
        });
    }

    Ok(ranking)
}
