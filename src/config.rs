//! Gameplay configuration and tuning
//!
//! Every constant here is a startup-time value: validated once before the
//! frame loop begins, never mutated afterwards. A malformed value is a
//! programming error surfaced as a `ConfigError`, not something the
//! simulation tries to recover from mid-frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected configuration value, reported before the first frame
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("visible bounds must be positive, got {width}x{height}")]
    Bounds { width: f32, height: f32 },
    #[error("target frame rate must be nonzero")]
    TargetFps,
    #[error("minimum asteroid radius must be positive, got {0}")]
    MinRadius(f32),
    #[error("asteroid tier count must be at least 1")]
    Tiers,
    #[error("minimum asteroid radius {min} must be below the maximum {max}")]
    RadiusOrder { min: f32, max: f32 },
    #[error("asteroid spawn interval must be positive, got {0}")]
    SpawnInterval(f32),
    #[error("asteroid speed range must satisfy 0 < min <= max, got {min}..{max}")]
    SpawnSpeed { min: f32, max: f32 },
    #[error("spawn angle jitter must stay below a quarter turn, got {0} rad")]
    SpawnJitter(f32),
    #[error("split angle range must satisfy 0 < min <= max, got {min}..{max} rad")]
    SplitAngle { min: f32, max: f32 },
    #[error("split speed boost must exceed 1, got {0}")]
    SplitBoost(f32),
    #[error("player radius must be positive, got {0}")]
    PlayerRadius(f32),
    #[error("player turn speed must be positive, got {0}")]
    TurnSpeed(f32),
    #[error("player thrust must be positive, got {0}")]
    Thrust(f32),
    #[error("fire cooldown must not be negative, got {0}")]
    FireCooldown(f32),
    #[error("shot speed must be positive, got {0}")]
    ShotSpeed(f32),
    #[error("shot radius must be positive, got {0}")]
    ShotRadius(f32),
}

/// Player ship tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Collision radius in pixels
    pub radius: f32,
    /// Turn rate in radians per second
    pub turn_speed: f32,
    /// Thrust acceleration in pixels per second squared
    pub thrust: f32,
    /// Linear velocity damping per second
    pub friction: f32,
    /// Minimum seconds between shots
    pub fire_cooldown: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            radius: 20.0,
            turn_speed: 300.0_f32.to_radians(),
            thrust: 250.0,
            friction: 1.5,
            fire_cooldown: 0.3,
        }
    }
}

/// Asteroid field tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidTuning {
    /// Radius of the smallest tier in pixels
    pub min_radius: f32,
    /// Number of size tiers; tier t has radius `min_radius * (t + 1)`
    pub tiers: u32,
    /// Seconds between edge spawns
    pub spawn_interval: f32,
    /// Spawn speed range in pixels per second
    pub min_speed: f32,
    pub max_speed: f32,
    /// Max deviation from the inward edge normal at spawn, radians
    pub spawn_jitter: f32,
    /// Fragment deflection range, radians; one fragment turns left, one right
    pub split_angle_min: f32,
    pub split_angle_max: f32,
    /// Fragment speed multiplier relative to the parent
    pub split_boost: f32,
}

impl Default for AsteroidTuning {
    fn default() -> Self {
        Self {
            min_radius: 20.0,
            tiers: 3,
            spawn_interval: 0.8,
            min_speed: 40.0,
            max_speed: 100.0,
            spawn_jitter: 30.0_f32.to_radians(),
            split_angle_min: 20.0_f32.to_radians(),
            split_angle_max: 50.0_f32.to_radians(),
            split_boost: 1.2,
        }
    }
}

impl AsteroidTuning {
    /// Radius of the largest tier
    pub fn max_radius(&self) -> f32 {
        self.radius_for_tier(self.tiers.saturating_sub(1))
    }

    /// Tier-to-radius mapping
    pub fn radius_for_tier(&self, tier: u32) -> f32 {
        self.min_radius * (tier + 1) as f32
    }

    /// Radius lost per split. Equal to the tier spacing, so a fragment is
    /// exactly one tier below its parent.
    pub fn split_step(&self) -> f32 {
        self.min_radius
    }
}

/// Shot tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotTuning {
    /// Muzzle speed in pixels per second
    pub speed: f32,
    /// Collision radius in pixels
    pub radius: f32,
}

impl Default for ShotTuning {
    fn default() -> Self {
        Self {
            speed: 500.0,
            radius: 5.0,
        }
    }
}

/// Complete gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Visible bounds in pixels
    pub width: f32,
    pub height: f32,
    /// Frame-rate cap handed to the clock service
    pub target_fps: u32,
    pub player: PlayerTuning,
    pub asteroid: AsteroidTuning,
    pub shot: ShotTuning,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            target_fps: 60,
            player: PlayerTuning::default(),
            asteroid: AsteroidTuning::default(),
            shot: ShotTuning::default(),
        }
    }
}

impl GameConfig {
    /// Center of the visible bounds, where the player starts
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Reject malformed constants before the frame loop starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        use std::f32::consts::FRAC_PI_2;

        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::Bounds {
                width: self.width,
                height: self.height,
            });
        }
        if self.target_fps == 0 {
            return Err(ConfigError::TargetFps);
        }

        let a = &self.asteroid;
        if a.min_radius <= 0.0 {
            return Err(ConfigError::MinRadius(a.min_radius));
        }
        if a.tiers == 0 {
            return Err(ConfigError::Tiers);
        }
        if a.min_radius >= a.max_radius() {
            return Err(ConfigError::RadiusOrder {
                min: a.min_radius,
                max: a.max_radius(),
            });
        }
        if a.spawn_interval <= 0.0 {
            return Err(ConfigError::SpawnInterval(a.spawn_interval));
        }
        if a.min_speed <= 0.0 || a.min_speed > a.max_speed {
            return Err(ConfigError::SpawnSpeed {
                min: a.min_speed,
                max: a.max_speed,
            });
        }
        if !(0.0..FRAC_PI_2).contains(&a.spawn_jitter) {
            return Err(ConfigError::SpawnJitter(a.spawn_jitter));
        }
        if a.split_angle_min <= 0.0 || a.split_angle_min > a.split_angle_max {
            return Err(ConfigError::SplitAngle {
                min: a.split_angle_min,
                max: a.split_angle_max,
            });
        }
        if a.split_boost <= 1.0 {
            return Err(ConfigError::SplitBoost(a.split_boost));
        }

        let p = &self.player;
        if p.radius <= 0.0 {
            return Err(ConfigError::PlayerRadius(p.radius));
        }
        if p.turn_speed <= 0.0 {
            return Err(ConfigError::TurnSpeed(p.turn_speed));
        }
        if p.thrust <= 0.0 {
            return Err(ConfigError::Thrust(p.thrust));
        }
        if p.fire_cooldown < 0.0 {
            return Err(ConfigError::FireCooldown(p.fire_cooldown));
        }

        let s = &self.shot;
        if s.speed <= 0.0 {
            return Err(ConfigError::ShotSpeed(s.speed));
        }
        if s.radius <= 0.0 {
            return Err(ConfigError::ShotRadius(s.radius));
        }

        Ok(())
    }
}
