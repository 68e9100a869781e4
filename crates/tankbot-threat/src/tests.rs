#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use tankbot_core::enums::{Category, KinematicField};
    use tankbot_core::types::{KinematicPoint, Position, Velocity};
    use tankbot_core::{EntityId, MissingKinematicDataError, TrackedEntity};

    use crate::approach::{closest_approach, ApproachTime};
    use crate::ranking::{assess, rank_threats, ThreatError, ThreatPicture};

    fn make_entity(id: &str, category: Category, pos: (f64, f64), vel: (f64, f64)) -> TrackedEntity {
        TrackedEntity::new(
            id,
            category,
            KinematicPoint::new(Position::new(pos.0, pos.1), Velocity::new(vel.0, vel.1)),
        )
    }

    fn own(pos: (f64, f64), vel: (f64, f64)) -> TrackedEntity {
        make_entity("tank-1", Category::Own, pos, vel)
    }

    fn bullet(id: &str, pos: (f64, f64), vel: (f64, f64)) -> TrackedEntity {
        make_entity(id, Category::Projectile, pos, vel)
    }

    fn ids(ranking: &[crate::RankedThreat]) -> Vec<&str> {
        ranking.iter().map(|r| r.id.as_str()).collect()
    }

    // ---- Closest approach ----

    #[test]
    fn test_head_on_collision_course() {
        let me = own((0.0, 0.0), (1.0, 0.0));
        let b = bullet("b", (10.0, 0.0), (-1.0, 0.0));
        let approach = closest_approach(&me.kinematics, &b.kinematics);
        assert_eq!(approach.time, ApproachTime::At(5.0));
        assert!(approach.distance.abs() < 1e-9);
        assert_eq!(approach.own_at, Position::new(5.0, 0.0));
        assert_eq!(approach.other_at, Position::new(5.0, 0.0));
    }

    #[test]
    fn test_perpendicular_motion_closest_now() {
        let me = own((0.0, 0.0), (0.0, 0.0));
        let b = bullet("b", (5.0, 0.0), (0.0, 1.0));
        let approach = closest_approach(&me.kinematics, &b.kinematics);
        assert_eq!(approach.time, ApproachTime::At(0.0));
        assert_eq!(approach.distance, 5.0);
    }

    #[test]
    fn test_identical_motion_never_closes() {
        let me = own((0.0, 0.0), (1.0, 0.0));
        let b = bullet("b", (0.0, 0.0), (1.0, 0.0));
        let approach = closest_approach(&me.kinematics, &b.kinematics);
        assert_eq!(approach.time, ApproachTime::Never);
        assert_eq!(approach.distance, 0.0);
        assert!(approach.time.turns().is_none());
    }

    #[test]
    fn test_receding_is_not_extrapolated_backward() {
        let me = own((0.0, 0.0), (0.0, 0.0));
        let b = bullet("b", (0.0, 10.0), (0.0, 1.0));
        let approach = closest_approach(&me.kinematics, &b.kinematics);
        // t* = -10, clamped to now
        assert_eq!(approach.time, ApproachTime::At(0.0));
        assert_eq!(approach.distance, 10.0);
    }

    #[test]
    fn test_near_miss_distance() {
        // Bullet crosses 3 units above a stationary tank.
        let me = own((0.0, 0.0), (0.0, 0.0));
        let b = bullet("b", (-8.0, 3.0), (2.0, 0.0));
        let approach = closest_approach(&me.kinematics, &b.kinematics);
        assert_eq!(approach.time, ApproachTime::At(4.0));
        assert!((approach.distance - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_both_moving_oblique() {
        // Relative motion only matters: both drift by (5, 5) per turn.
        let me = own((0.0, 0.0), (5.0, 5.0));
        let b = bullet("b", (6.0, 0.0), (4.0, 6.0));
        let approach = closest_approach(&me.kinematics, &b.kinematics);
        // dp = (6, 0), dv = (-1, 1) => t* = 3, separation (3, 3)
        assert_eq!(approach.time, ApproachTime::At(3.0));
        assert!((approach.distance - 18f64.sqrt()).abs() < 1e-9);
    }

    // ---- Ranking ----

    #[test]
    fn test_collision_course_ranked_first() {
        let me = own((0.0, 0.0), (1.0, 0.0));
        let projectiles = vec![
            bullet("far", (0.0, 50.0), (0.0, 1.0)),
            bullet("perpendicular", (5.0, 0.0), (1.0, 1.0)),
            bullet("incoming", (10.0, 0.0), (-1.0, 0.0)),
        ];
        let ranking = rank_threats(&me, &projectiles);
        assert_eq!(ranking[0].id.as_str(), "incoming");
        assert!(ranking[0].distance < 1e-9);
        assert_eq!(ranking[0].time, ApproachTime::At(5.0));
        assert_eq!(ids(&ranking), vec!["incoming", "perpendicular", "far"]);
    }

    #[test]
    fn test_empty_projectiles_empty_ranking() {
        let me = own((0.0, 0.0), (0.0, 0.0));
        let none: Vec<TrackedEntity> = Vec::new();
        let ranking = rank_threats(&me, &none);
        assert!(ranking.is_empty());
    }

    #[test]
    fn test_ranking_is_complete_and_excludes_own() {
        let me = own((0.0, 0.0), (0.0, 0.0));
        let projectiles = vec![
            bullet("a", (3.0, 4.0), (0.0, 0.0)),
            bullet("b", (-30.0, 0.0), (2.0, 0.0)),
            bullet("c", (0.0, 12.0), (0.0, 3.0)),
            me.clone(),
        ];
        let ranking = rank_threats(&me, &projectiles);
        let ranked: HashSet<&str> = ranking.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ranked, HashSet::from(["a", "b", "c"]));
        assert_eq!(ranking.len(), 3);
    }

    #[test]
    fn test_filters_by_category_tag() {
        let me = own((0.0, 0.0), (0.0, 0.0));
        let other_tank = make_entity("tank-2", Category::Own, (1.0, 0.0), (0.0, 0.0));
        let projectiles = vec![other_tank, bullet("b", (9.0, 0.0), (0.0, 0.0))];
        let ranking = rank_threats(&me, &projectiles);
        assert_eq!(ids(&ranking), vec!["b"]);
    }

    #[test]
    fn test_duplicate_ids_ranked_once() {
        let me = own((0.0, 0.0), (0.0, 0.0));
        let projectiles = vec![
            bullet("b", (9.0, 0.0), (0.0, 0.0)),
            bullet("b", (1.0, 0.0), (0.0, 0.0)),
        ];
        let ranking = rank_threats(&me, &projectiles);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].distance, 9.0);
    }

    #[test]
    fn test_distances_non_negative_and_ascending() {
        let me = own((10.0, -4.0), (0.5, 1.5));
        let projectiles: Vec<TrackedEntity> = (0..40)
            .map(|i| {
                let f = i as f64;
                bullet(
                    &format!("b{i}"),
                    ((f * 7.3) % 50.0 - 25.0, (f * 3.1) % 40.0 - 20.0),
                    ((f * 1.7) % 6.0 - 3.0, (f * 2.9) % 6.0 - 3.0),
                )
            })
            .collect();
        let ranking = rank_threats(&me, &projectiles);
        assert_eq!(ranking.len(), 40);
        for r in &ranking {
            assert!(r.distance >= 0.0, "{} has negative distance", r.id);
            if let ApproachTime::At(t) = r.time {
                assert!(t >= 0.0, "{} has negative time", r.id);
            }
        }
        for pair in ranking.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn test_equal_distances_keep_input_order() {
        let me = own((0.0, 0.0), (0.0, 0.0));
        let projectiles = vec![
            bullet("second-closest", (0.0, 20.0), (0.0, 0.0)),
            bullet("tie-a", (7.0, 0.0), (0.0, 0.0)),
            bullet("tie-b", (0.0, -7.0), (0.0, 0.0)),
            bullet("tie-c", (-7.0, 0.0), (0.0, 0.0)),
        ];
        let ranking = rank_threats(&me, &projectiles);
        assert_eq!(ids(&ranking), vec!["tie-a", "tie-b", "tie-c", "second-closest"]);
    }

    #[test]
    fn test_zero_relative_velocity_keeps_current_distance() {
        let me = own((2.0, 2.0), (3.0, -1.0));
        let b = bullet("pacer", (5.0, 6.0), (3.0, -1.0));
        let ranking = rank_threats(&me, std::slice::from_ref(&b));
        assert_eq!(ranking[0].distance, 5.0);
        assert_eq!(ranking[0].time, ApproachTime::Never);
    }

    #[test]
    fn test_pacing_bullet_ranks_by_current_distance() {
        // A bullet flying alongside at 4 units outranks one that will pass at 6.
        let me = own((0.0, 0.0), (1.0, 0.0));
        let projectiles = vec![
            bullet("passing", (-20.0, 6.0), (3.0, 0.0)),
            bullet("pacer", (0.0, 4.0), (1.0, 0.0)),
        ];
        let ranking = rank_threats(&me, &projectiles);
        assert_eq!(ids(&ranking), vec!["pacer", "passing"]);
    }

    // ---- Assessment ----

    fn missing(id: &str, field: KinematicField) -> MissingKinematicDataError {
        MissingKinematicDataError {
            id: EntityId::from(id),
            field,
        }
    }

    #[test]
    fn test_assess_ranks_malformed_projectile_last() {
        let picture = ThreatPicture {
            own: Ok(own((0.0, 0.0), (0.0, 0.0))),
            projectiles: vec![
                Ok(bullet("far", (100.0, 0.0), (0.0, 0.0))),
                Err(missing("broken", KinematicField::Velocity)),
                Ok(bullet("near", (2.0, 0.0), (0.0, 0.0))),
            ],
        };
        let ranking = assess(&picture).unwrap();
        assert_eq!(ids(&ranking), vec!["near", "far", "broken"]);
        assert_eq!(ranking[2].distance, f64::INFINITY);
        assert_eq!(ranking[2].time, ApproachTime::Unknown);
    }

    #[test]
    fn test_assess_never_repeats_or_ranks_own() {
        let picture = ThreatPicture {
            own: Ok(own((0.0, 0.0), (0.0, 0.0))),
            projectiles: vec![
                Ok(bullet("b", (5.0, 0.0), (0.0, 0.0))),
                Err(missing("b", KinematicField::Velocity)),
                Err(missing("tank-1", KinematicField::Velocity)),
                Err(missing("broken", KinematicField::Position)),
                Err(missing("broken", KinematicField::Velocity)),
            ],
        };
        let ranking = assess(&picture).unwrap();
        assert_eq!(ids(&ranking), vec!["b", "broken"]);
        assert_eq!(ranking[0].distance, 5.0);
    }

    #[test]
    fn test_assess_fails_without_own_kinematics() {
        let picture = ThreatPicture {
            own: Err(missing("tank-1", KinematicField::Position)),
            projectiles: vec![Ok(bullet("b", (1.0, 0.0), (0.0, 0.0)))],
        };
        let err = assess(&picture).unwrap_err();
        assert_eq!(
            err,
            ThreatError::OwnKinematics(missing("tank-1", KinematicField::Position))
        );
        assert_eq!(
            err.to_string(),
            "own entity cannot be assessed: entity tank-1 has no position"
        );
    }

    #[test]
    fn test_assess_empty_picture() {
        let picture = ThreatPicture {
            own: Ok(own((0.0, 0.0), (0.0, 0.0))),
            projectiles: Vec::new(),
        };
        assert!(assess(&picture).unwrap().is_empty());
    }
}
