//! Astro Drift headless entry point
//!
//! Wires a no-op renderer and an idle input source into the frame loop,
//! with the native clock holding the configured frame rate. The session
//! runs until an asteroid reaches the (idle) player. Pass a JSON config
//! path to override the default tuning.

use std::env;
use std::error::Error;
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use astro_drift::platform::FrameClock;
use astro_drift::runner::{EventSource, ExitReason, FrameInput, Renderer, run};
use astro_drift::sim::{GameState, Sprite};
use astro_drift::GameConfig;

/// Paints nothing; stands in for a real backend
struct NullRenderer;

impl Renderer for NullRenderer {
    fn begin_frame(&mut self) {}
    fn draw(&mut self, _sprite: &Sprite) {}
    fn present(&mut self) {}
}

/// Produces no player intent and never quits; the run ends on game over
struct IdleInput;

impl EventSource for IdleInput {
    fn poll(&mut self) -> FrameInput {
        FrameInput::default()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config: GameConfig = match env::args().nth(1) {
        Some(path) => serde_json::from_str(&fs::read_to_string(&path)?)?,
        None => GameConfig::default(),
    };

    let seed = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64;
    let mut state = GameState::new(config, seed)?;

    let exit = run(
        &mut state,
        &mut IdleInput,
        &mut NullRenderer,
        &mut FrameClock::new(),
    );

    if exit == ExitReason::GameOver {
        println!("Game over!");
    }
    Ok(())
}
