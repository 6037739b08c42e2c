//! Circle collision detection and the per-frame resolution pass

use super::entity::{Body, EntityId};
use super::registry::Registry;

/// True when two bodies' circles overlap. Strict inequality: exact
/// tangency is a miss.
pub fn overlaps(a: &impl Body, b: &impl Body) -> bool {
    a.position().distance(b.position()) < a.radius() + b.radius()
}

/// One asteroid/shot pair consumed this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub asteroid: EntityId,
    pub shot: EntityId,
}

/// Everything the resolution pass decided, applied only after the scan
/// completes
#[derive(Debug, Clone, Default)]
pub struct CollisionOutcome {
    /// The player overlapped some asteroid; the loop stops, the player
    /// entity itself is left untouched
    pub player_hit: bool,
    pub hits: Vec<Hit>,
}

/// Scan live asteroids against the player and the shot partition.
///
/// Mutates nothing; destruction happens in a later reap so the scan never
/// invalidates its own iteration. Per asteroid the player is tested first,
/// then shots in registration order; the first overlapping shot wins and
/// stays consumed for the rest of the pass.
pub fn detect(registry: &Registry) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();
    let mut consumed: Vec<EntityId> = Vec::new();

    for asteroid in registry.asteroids() {
        if overlaps(asteroid, &registry.player) {
            outcome.player_hit = true;
        }
        for shot in registry.shots() {
            if consumed.contains(&shot.id) {
                continue;
            }
            if overlaps(asteroid, shot) {
                consumed.push(shot.id);
                outcome.hits.push(Hit {
                    asteroid: asteroid.id,
                    shot: shot.id,
                });
                // At most one shot per asteroid per frame
                break;
            }
        }
    }

    outcome
}
