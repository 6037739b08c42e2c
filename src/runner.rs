//! Frame loop over the external collaborator contracts
//!
//! The loop owns running/game-over orchestration. Painting, input decoding
//! and timekeeping stay behind the `Renderer`, `EventSource` and `Clock`
//! traits; real backends and the test mocks plug in the same way.

use crate::sim::{GamePhase, GameState, Sprite, TickInput, tick};

/// Per-frame snapshot drained from the event source
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Process-termination intent. Checked once, at the start of the
    /// frame; the rest of that frame is skipped.
    pub quit: bool,
    pub intent: TickInput,
}

/// Input/event source contract
pub trait EventSource {
    fn poll(&mut self) -> FrameInput;
}

/// Rendering backend contract: paints one drawable per call
pub trait Renderer {
    fn begin_frame(&mut self);
    fn draw(&mut self, sprite: &Sprite);
    fn present(&mut self);
}

/// Timer service: returns seconds elapsed since the previous call,
/// sleeping as needed to hold the target frame rate
pub trait Clock {
    fn tick(&mut self, target_fps: u32) -> f32;
}

/// Why the loop returned. Both are clean, non-error terminations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The event source signalled termination
    Quit,
    /// An asteroid reached the player
    GameOver,
}

/// Drive the session until quit or game over.
///
/// Frame contract: poll events, simulate one tick, stop on game over,
/// paint drawables in registry order, then advance the clock for the next
/// frame's delta time. The first frame runs with dt = 0.
pub fn run(
    state: &mut GameState,
    events: &mut impl EventSource,
    renderer: &mut impl Renderer,
    clock: &mut impl Clock,
) -> ExitReason {
    log::info!("session started, seed {}", state.seed);
    let mut dt = 0.0;

    loop {
        let input = events.poll();
        if input.quit {
            log::info!("quit requested, shutting down");
            return ExitReason::Quit;
        }

        tick(state, &input.intent, dt);

        if state.phase == GamePhase::GameOver {
            log::info!("game over after {} ticks", state.time_ticks);
            return ExitReason::GameOver;
        }

        renderer.begin_frame();
        for sprite in state.registry.sprites() {
            renderer.draw(&sprite);
        }
        renderer.present();

        dt = clock.tick(state.config.target_fps);
    }
}
