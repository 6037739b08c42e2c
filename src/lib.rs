//! Astro Drift - a drift-and-shoot asteroid field arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, splitting, spawning)
//! - `config`: Startup-validated gameplay tuning
//! - `runner`: Frame loop over the external renderer/input/clock contracts
//! - `platform`: Native frame clock

pub mod config;
pub mod platform;
pub mod runner;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use runner::{Clock, EventSource, ExitReason, FrameInput, Renderer, run};
pub use sim::{GamePhase, GameState, TickInput, tick};

use glam::Vec2;

/// Unit vector for a heading angle (radians, 0 = +x, counter-clockwise)
#[inline]
pub fn heading_vec(angle: f32) -> Vec2 {
    Vec2::from_angle(angle)
}

/// Rotate a vector by an angle in radians
#[inline]
pub fn rotate_vec(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}
