//! Asteroid splitting
//!
//! A destroyed asteroid either vanishes outright (a fragment would be at
//! or below the minimum radius) or yields exactly two faster fragments one
//! tier down, on diverging headings. Fragments are plain data; the caller
//! registers them after its collision pass, so a split never feeds back
//! into the frame that caused it.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Asteroid;
use crate::config::AsteroidTuning;
use crate::rotate_vec;

/// Fragment produced by a split, ready for registration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    pub kind: u32,
    pub radius: f32,
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Split a doomed asteroid into zero or two fragments.
pub fn split(parent: &Asteroid, tuning: &AsteroidTuning, rng: &mut Pcg32) -> Vec<Fragment> {
    let radius = parent.radius - tuning.split_step();
    if radius <= tuning.min_radius {
        return Vec::new();
    }
    let kind = parent.kind.saturating_sub(1);

    // Two independent draws so the fragments diverge; one deflects left,
    // the other right
    let left = rng.random_range(tuning.split_angle_min..=tuning.split_angle_max);
    let right = rng.random_range(tuning.split_angle_min..=tuning.split_angle_max);

    vec![
        Fragment {
            kind,
            radius,
            pos: parent.pos,
            vel: rotate_vec(parent.vel, left) * tuning.split_boost,
        },
        Fragment {
            kind,
            radius,
            pos: parent.pos,
            vel: rotate_vec(parent.vel, -right) * tuning.split_boost,
        },
    ]
}
