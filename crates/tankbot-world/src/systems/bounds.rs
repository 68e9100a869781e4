//! Map bounds derived from boundary objects.
//!
//! The map spans from the origin to the largest x and the largest y found
//! among all boundary corners.

use hecs::World;
use serde::{Deserialize, Serialize};

use tankbot_core::components::Corners;
use tankbot_core::enums::ObjectKind;
use tankbot_core::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub width: f64,
    pub height: f64,
}

impl MapBounds {
    pub fn contains(&self, p: &Position) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Distance from `p` to the nearest edge. Negative outside the map.
    pub fn edge_margin(&self, p: &Position) -> f64 {
        p.x.min(self.width - p.x).min(p.y).min(self.height - p.y)
    }
}

/// Scan static boundaries for the map size. `None` when there are none.
pub fn detect(world: &World) -> Option<MapBounds> {
    let mut query = world.query::<(&ObjectKind, &Corners)>();
    let mut bounds: Option<MapBounds> = None;

    for (_entity, (kind, corners)) in query.iter() {
        if *kind != ObjectKind::Boundary {
            continue;
        }
        for corner in &corners.0 {
            let b = bounds.get_or_insert(MapBounds {
                width: corner.x,
                height: corner.y,
            });
            b.width = b.width.max(corner.x);
            b.height = b.height.max(corner.y);
        }
    }

    bounds
}
