//! Entity identity and shared capabilities
//!
//! Every simulated object is one of a closed set of kinds. The registry
//! hands out plain integer ids; nothing holds an owning reference to an
//! entity besides its home collection.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Registry handle for a live entity
pub type EntityId = u32;

/// Closed set of simulated entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Asteroid,
    Shot,
}

/// Common view of any simulated body: where it is, how it moves, how big
/// its collision circle is.
pub trait Body {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn radius(&self) -> f32;
}

/// Draw command handed to the rendering backend, one per drawable per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub kind: EntityKind,
    pub position: Vec2,
    pub radius: f32,
    /// Heading in radians; zero for bodies without a facing
    pub rotation: f32,
}
