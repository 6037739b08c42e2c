//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only; a seed reproduces a session
//! - Stable iteration order (registration order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod registry;
pub mod spawner;
pub mod split;
pub mod state;
pub mod tick;

pub use collision::{CollisionOutcome, Hit, detect, overlaps};
pub use entity::{Body, EntityId, EntityKind, Sprite};
pub use registry::Registry;
pub use spawner::{AsteroidSpawn, Spawner};
pub use split::{Fragment, split};
pub use state::{Asteroid, GamePhase, GameState, Player, Shot};
pub use tick::{TickInput, tick};
