//! Partitioned entity collections
//!
//! The registry owns every live entity. Which partitions an entity joins
//! (updatable, drawable, collidable) is decided by its kind at registration
//! and never changes; killing an entity removes it from all partitions
//! within the same frame. Draw order is registration order across kinds.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{EntityId, EntityKind, Sprite};
use super::state::{Asteroid, Player, Shot};
use crate::config::GameConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    pub player: Player,
    asteroids: Vec<Asteroid>,
    shots: Vec<Shot>,
    draw_order: Vec<(EntityKind, EntityId)>,
    next_id: EntityId,
}

impl Registry {
    /// One player at the center of the bounds; no asteroids or shots yet.
    pub(crate) fn new(config: &GameConfig) -> Self {
        let player = Player::new(0, config.center(), config.player.radius);
        Self {
            player,
            asteroids: Vec::new(),
            shots: Vec::new(),
            draw_order: vec![(EntityKind::Player, 0)],
            next_id: 1,
        }
    }

    fn alloc_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Register an asteroid into the updatable, drawable and
    /// collidable-asteroid partitions.
    pub fn add_asteroid(&mut self, kind: u32, radius: f32, pos: Vec2, vel: Vec2) -> EntityId {
        let id = self.alloc_id();
        self.asteroids.push(Asteroid {
            id,
            kind,
            pos,
            vel,
            radius,
        });
        self.draw_order.push((EntityKind::Asteroid, id));
        id
    }

    /// Register a shot into the updatable, drawable and collidable-shot
    /// partitions.
    pub fn add_shot(&mut self, radius: f32, pos: Vec2, vel: Vec2) -> EntityId {
        let id = self.alloc_id();
        self.shots.push(Shot {
            id,
            pos,
            vel,
            radius,
        });
        self.draw_order.push((EntityKind::Shot, id));
        id
    }

    /// Live asteroids in registration order
    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    /// Live shots in registration order
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    pub(crate) fn asteroids_mut(&mut self) -> &mut [Asteroid] {
        &mut self.asteroids
    }

    pub(crate) fn shots_mut(&mut self) -> &mut [Shot] {
        &mut self.shots
    }

    /// Remove dead entities from every partition at once. Ids not present
    /// are ignored, so a caller may pass asteroid and shot ids mixed.
    pub(crate) fn reap(&mut self, dead: &[EntityId]) {
        if dead.is_empty() {
            return;
        }
        self.asteroids.retain(|a| !dead.contains(&a.id));
        self.shots.retain(|s| !dead.contains(&s.id));
        self.draw_order.retain(|(_, id)| !dead.contains(id));
    }

    /// Draw commands for the rendering backend, in registration order
    pub fn sprites(&self) -> impl Iterator<Item = Sprite> + '_ {
        self.draw_order.iter().filter_map(|&(kind, id)| match kind {
            EntityKind::Player => Some(Sprite {
                kind,
                position: self.player.pos,
                radius: self.player.radius,
                rotation: self.player.rotation,
            }),
            EntityKind::Asteroid => self.asteroids.iter().find(|a| a.id == id).map(|a| Sprite {
                kind,
                position: a.pos,
                radius: a.radius,
                rotation: 0.0,
            }),
            EntityKind::Shot => self.shots.iter().find(|s| s.id == id).map(|s| Sprite {
                kind,
                position: s.pos,
                radius: s.radius,
                rotation: 0.0,
            }),
        })
    }
}
