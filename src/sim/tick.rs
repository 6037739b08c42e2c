//! Per-frame simulation step
//!
//! One tick is the atomic unit of simulation: update phase, collision
//! resolution, phase transition. Event polling, rendering and clock
//! advancement belong to the frame loop in `runner`.

use super::collision;
use super::split::{self, Fragment};
use super::state::{GamePhase, GameState};

/// Player intent for one frame, as decoded by the input source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub thrust: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub fire: bool,
}

/// Advance the session by one frame of `dt` seconds.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.time_ticks += 1;

    // Update phase. Fixed total order: spawner, player, asteroids, shots.
    // Nothing here reads collision results from this frame.
    if let Some(spawn) = state.spawner.update(dt, &state.config, &mut state.rng) {
        log::debug!("spawned tier {} asteroid at {}", spawn.kind, spawn.pos);
        state
            .registry
            .add_asteroid(spawn.kind, spawn.radius, spawn.pos, spawn.vel);
    }

    state.registry.player.update(input, &state.config.player, dt);
    if input.fire {
        if let Some((pos, vel)) = state
            .registry
            .player
            .try_fire(&state.config.player, &state.config.shot)
        {
            state.registry.add_shot(state.config.shot.radius, pos, vel);
        }
    }

    for asteroid in state.registry.asteroids_mut() {
        asteroid.update(dt);
    }
    for shot in state.registry.shots_mut() {
        shot.update(dt);
    }

    // Collision resolution: mark first, reap and register fragments after,
    // so the scan never destroys what it is iterating. Fragments join the
    // field now but are only eligible for hits from the next frame on.
    let outcome = collision::detect(&state.registry);

    let mut dead = Vec::with_capacity(outcome.hits.len() * 2);
    let mut fragments: Vec<Fragment> = Vec::new();
    for hit in &outcome.hits {
        if let Some(parent) = state
            .registry
            .asteroids()
            .iter()
            .find(|a| a.id == hit.asteroid)
        {
            let spawned = split::split(parent, &state.config.asteroid, &mut state.rng);
            log::debug!(
                "asteroid {} destroyed, {} fragments",
                parent.id,
                spawned.len()
            );
            fragments.extend(spawned);
        }
        dead.push(hit.asteroid);
        dead.push(hit.shot);
    }
    state.registry.reap(&dead);
    for f in fragments {
        state.registry.add_asteroid(f.kind, f.radius, f.pos, f.vel);
    }

    if outcome.player_hit {
        state.phase = GamePhase::GameOver;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use glam::Vec2;

    // Spawner quiet so scenarios control exactly what is in the field
    fn quiet_config() -> GameConfig {
        let mut config = GameConfig::default();
        config.asteroid.spawn_interval = 1e9;
        config
    }

    fn session() -> GameState {
        GameState::new(quiet_config(), 42).unwrap()
    }

    #[test]
    fn test_asteroid_on_collision_course_ends_game_once() {
        let mut state = session();
        let center = state.config.center();
        let tuning = state.config.asteroid.clone();

        // Largest tier closing at 100 px/s from 300 px away; radii sum to
        // 80, so with dt = 0.5 the overlap begins on the fifth frame
        state.registry.add_asteroid(
            tuning.tiers - 1,
            tuning.max_radius(),
            Vec2::new(center.x - 300.0, center.y),
            Vec2::new(100.0, 0.0),
        );

        for _ in 0..4 {
            tick(&mut state, &TickInput::default(), 0.5);
            assert_eq!(state.phase, GamePhase::Running);
        }
        tick(&mut state, &TickInput::default(), 0.5);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Terminal: further ticks do not advance the session
        tick(&mut state, &TickInput::default(), 0.5);
        assert_eq!(state.time_ticks, 5);
    }

    #[test]
    fn test_hit_splits_into_two_and_removes_both() {
        let mut state = session();
        let tuning = state.config.asteroid.clone();
        let max = tuning.max_radius();

        let asteroid =
            state
                .registry
                .add_asteroid(tuning.tiers - 1, max, Vec2::new(100.0, 100.0), Vec2::ZERO);
        let shot = state
            .registry
            .add_shot(5.0, Vec2::new(100.0, 100.0), Vec2::ZERO);

        tick(&mut state, &TickInput::default(), 0.0);

        let rocks = state.registry.asteroids();
        assert_eq!(rocks.len(), 2);
        for rock in rocks {
            assert_eq!(rock.radius, max - tuning.split_step());
            assert_eq!(rock.pos, Vec2::new(100.0, 100.0));
            assert_ne!(rock.id, asteroid);
        }
        assert!(state.registry.shots().is_empty());
        assert!(!state.registry.shots().iter().any(|s| s.id == shot));
    }

    #[test]
    fn test_minimum_asteroid_dies_without_fragments() {
        let mut state = session();
        let min = state.config.asteroid.min_radius;

        state
            .registry
            .add_asteroid(0, min, Vec2::new(100.0, 100.0), Vec2::ZERO);
        state
            .registry
            .add_shot(5.0, Vec2::new(100.0, 100.0), Vec2::ZERO);

        tick(&mut state, &TickInput::default(), 0.0);

        assert!(state.registry.asteroids().is_empty());
        assert!(state.registry.shots().is_empty());
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_one_asteroid_consumes_one_shot_per_frame() {
        let mut state = session();
        let tuning = state.config.asteroid.clone();

        state.registry.add_asteroid(
            tuning.tiers - 1,
            tuning.max_radius(),
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
        );
        state
            .registry
            .add_shot(5.0, Vec2::new(110.0, 100.0), Vec2::ZERO);
        let second = state
            .registry
            .add_shot(5.0, Vec2::new(90.0, 100.0), Vec2::ZERO);

        tick(&mut state, &TickInput::default(), 0.0);

        // One split happened and the second shot survived
        assert_eq!(state.registry.asteroids().len(), 2);
        assert_eq!(state.registry.shots().len(), 1);
        assert_eq!(state.registry.shots()[0].id, second);
    }

    #[test]
    fn test_game_over_wins_over_in_flight_split() {
        let mut state = session();
        let center = state.config.center();
        let tuning = state.config.asteroid.clone();

        // One asteroid already on the player, another on a shot
        state
            .registry
            .add_asteroid(tuning.tiers - 1, tuning.max_radius(), center, Vec2::ZERO);
        state.registry.add_asteroid(
            tuning.tiers - 1,
            tuning.max_radius(),
            Vec2::new(50.0, 50.0),
            Vec2::ZERO,
        );
        state
            .registry
            .add_shot(5.0, Vec2::new(50.0, 50.0), Vec2::ZERO);

        tick(&mut state, &TickInput::default(), 0.0);

        assert_eq!(state.phase, GamePhase::GameOver);
        // The split still resolved, it just never gets another frame
        assert_eq!(state.registry.asteroids().len(), 3);
    }

    #[test]
    fn test_fire_intent_registers_a_shot() {
        let mut state = session();

        tick(
            &mut state,
            &TickInput {
                fire: true,
                ..Default::default()
            },
            0.016,
        );

        assert_eq!(state.registry.shots().len(), 1);
        let shot = &state.registry.shots()[0];
        assert_eq!(shot.radius, state.config.shot.radius);
        assert!((shot.vel.length() - state.config.shot.speed).abs() < 1e-3);

        // Held trigger is limited by the cooldown
        tick(
            &mut state,
            &TickInput {
                fire: true,
                ..Default::default()
            },
            0.016,
        );
        assert_eq!(state.registry.shots().len(), 1);
    }

    #[test]
    fn test_spawner_populates_field_over_time() {
        let mut config = GameConfig::default();
        config.asteroid.spawn_interval = 0.5;
        let mut state = GameState::new(config, 9).unwrap();

        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), 0.25);
        }
        assert_eq!(state.registry.asteroids().len(), 5);
    }

    #[test]
    fn test_fragments_are_not_hit_in_their_birth_frame() {
        let mut state = session();
        let tuning = state.config.asteroid.clone();

        // Two shots parked on the asteroid: the second would hit a fragment
        // if fragments were collidable in the frame they appear
        state.registry.add_asteroid(
            tuning.tiers - 1,
            tuning.max_radius(),
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
        );
        state
            .registry
            .add_shot(5.0, Vec2::new(100.0, 100.0), Vec2::ZERO);
        state
            .registry
            .add_shot(5.0, Vec2::new(100.0, 100.0), Vec2::ZERO);

        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.registry.asteroids().len(), 2);
        assert_eq!(state.registry.shots().len(), 1);

        // Next frame the surviving shot connects with a fragment
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.registry.shots().len(), 0);
        assert_eq!(state.registry.asteroids().len(), 1);
    }
}
