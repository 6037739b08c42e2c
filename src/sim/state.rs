//! Session state and entity types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Body, EntityId};
use super::registry::Registry;
use super::spawner::Spawner;
use super::tick::TickInput;
use crate::config::{ConfigError, GameConfig, PlayerTuning, ShotTuning};
use crate::heading_vec;

/// Session phase; `GameOver` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: EntityId,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in radians, 0 = +x, counter-clockwise
    pub rotation: f32,
    pub radius: f32,
    /// Seconds until the next shot may fire
    pub cooldown: f32,
}

impl Player {
    pub fn new(id: EntityId, pos: Vec2, radius: f32) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            rotation: 0.0,
            radius,
            cooldown: 0.0,
        }
    }

    /// Unit vector along the current heading
    pub fn heading(&self) -> Vec2 {
        heading_vec(self.rotation)
    }

    /// Tip of the ship, where shots originate
    pub fn nose(&self) -> Vec2 {
        self.pos + self.heading() * self.radius
    }

    /// Apply one frame of steering, thrust, damping and integration.
    pub fn update(&mut self, input: &TickInput, tuning: &PlayerTuning, dt: f32) {
        if input.rotate_left {
            self.rotation += tuning.turn_speed * dt;
        }
        if input.rotate_right {
            self.rotation -= tuning.turn_speed * dt;
        }
        if input.thrust {
            self.vel += self.heading() * tuning.thrust * dt;
        }
        self.vel *= (1.0 - tuning.friction * dt).max(0.0);
        self.pos += self.vel * dt;
        self.cooldown = (self.cooldown - dt).max(0.0);
    }

    /// Fire if the cooldown allows it, returning the new shot's spawn
    /// position and velocity.
    pub fn try_fire(&mut self, tuning: &PlayerTuning, shot: &ShotTuning) -> Option<(Vec2, Vec2)> {
        if self.cooldown > 0.0 {
            return None;
        }
        self.cooldown = tuning.fire_cooldown;
        Some((self.nose(), self.heading() * shot.speed))
    }
}

impl Body for Player {
    fn position(&self) -> Vec2 {
        self.pos
    }
    fn velocity(&self) -> Vec2 {
        self.vel
    }
    fn radius(&self) -> f32 {
        self.radius
    }
}

/// A drifting rock. `kind` is the size tier; the radius is fixed from it
/// at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: EntityId,
    pub kind: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Asteroid {
    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

impl Body for Asteroid {
    fn position(&self) -> Vec2 {
        self.pos
    }
    fn velocity(&self) -> Vec2 {
        self.vel
    }
    fn radius(&self) -> f32 {
        self.radius
    }
}

/// A projectile travelling in the direction the player faced when firing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shot {
    pub id: EntityId,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Shot {
    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

impl Body for Shot {
    fn position(&self) -> Vec2 {
        self.pos
    }
    fn velocity(&self) -> Vec2 {
        self.vel
    }
    fn radius(&self) -> f32 {
        self.radius
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed, logged so a run can be replayed
    pub seed: u64,
    pub config: GameConfig,
    pub phase: GamePhase,
    /// Frames simulated so far
    pub time_ticks: u64,
    pub registry: Registry,
    pub spawner: Spawner,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Build a session from a config. Malformed tuning fails here, before
    /// the frame loop ever runs.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let registry = Registry::new(&config);
        Ok(Self {
            seed,
            phase: GamePhase::Running,
            time_ticks: 0,
            registry,
            spawner: Spawner::new(),
            rng: Pcg32::seed_from_u64(seed),
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_at_center() {
        let config = GameConfig::default();
        let center = config.center();
        let state = GameState::new(config, 7).unwrap();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.registry.player.pos, center);
        assert!(state.registry.asteroids().is_empty());
        assert!(state.registry.shots().is_empty());
    }

    #[test]
    fn test_new_session_rejects_bad_config() {
        let mut config = GameConfig::default();
        config.asteroid.spawn_interval = -1.0;
        assert!(GameState::new(config, 7).is_err());
    }

    #[test]
    fn test_player_turns_and_thrusts() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(0, Vec2::ZERO, tuning.radius);

        let input = TickInput {
            rotate_left: true,
            thrust: true,
            ..Default::default()
        };
        player.update(&input, &tuning, 0.1);

        assert!(player.rotation > 0.0);
        assert!(player.vel.length() > 0.0);
        assert!(player.pos.length() > 0.0);
    }

    #[test]
    fn test_player_friction_decays_velocity() {
        let tuning = PlayerTuning::default();
        let mut player = Player::new(0, Vec2::ZERO, tuning.radius);
        player.vel = Vec2::new(100.0, 0.0);

        player.update(&TickInput::default(), &tuning, 0.1);
        assert!(player.vel.x < 100.0);
        assert!(player.vel.x > 0.0);
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let tuning = PlayerTuning::default();
        let shot = ShotTuning::default();
        let mut player = Player::new(0, Vec2::ZERO, tuning.radius);

        let (pos, vel) = player.try_fire(&tuning, &shot).unwrap();
        assert_eq!(pos, player.nose());
        assert_eq!(vel, player.heading() * shot.speed);

        // Cooldown blocks an immediate second shot
        assert!(player.try_fire(&tuning, &shot).is_none());

        // After the cooldown elapses the trigger works again
        player.update(&TickInput::default(), &tuning, tuning.fire_cooldown + 0.01);
        assert!(player.try_fire(&tuning, &shot).is_some());
    }
}
