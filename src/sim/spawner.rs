//! Interval-driven asteroid spawning from the screen edges

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::rotate_vec;

/// A freshly rolled asteroid, ready for registration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsteroidSpawn {
    pub kind: u32,
    pub radius: f32,
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Spawn timer. Updatable like any entity, but owns no position or radius
/// and joins no collision partition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spawner {
    accumulator: f32,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the timer; emits one asteroid when the interval elapses.
    pub fn update(&mut self, dt: f32, config: &GameConfig, rng: &mut Pcg32) -> Option<AsteroidSpawn> {
        self.accumulator += dt;
        if self.accumulator < config.asteroid.spawn_interval {
            return None;
        }
        self.accumulator = 0.0;
        Some(roll_spawn(config, rng))
    }
}

/// Pick an edge, a point along it just outside the bounds, and an inward
/// velocity with some angular jitter.
fn roll_spawn(config: &GameConfig, rng: &mut Pcg32) -> AsteroidSpawn {
    let tuning = &config.asteroid;
    let outside = tuning.max_radius();
    let along = rng.random_range(0.0..1.0);

    let (pos, inward) = match rng.random_range(0..4u8) {
        0 => (Vec2::new(-outside, along * config.height), Vec2::X),
        1 => (
            Vec2::new(config.width + outside, along * config.height),
            -Vec2::X,
        ),
        2 => (Vec2::new(along * config.width, -outside), Vec2::Y),
        _ => (
            Vec2::new(along * config.width, config.height + outside),
            -Vec2::Y,
        ),
    };

    let jitter = rng.random_range(-tuning.spawn_jitter..=tuning.spawn_jitter);
    let speed = rng.random_range(tuning.min_speed..=tuning.max_speed);
    let kind = rng.random_range(0..tuning.tiers);

    AsteroidSpawn {
        kind,
        radius: tuning.radius_for_tier(kind),
        pos,
        vel: rotate_vec(inward, jitter) * speed,
    }
}
