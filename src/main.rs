//! Tilt Maze entry point
//!
//! Native headless run: drives the simulation with a seeded random tilt,
//! logs audio cues and prints a summary. Pass a scene JSON path to play a
//! custom maze instead of the stock one.

use tilt_maze::audio::LogAudio;
use tilt_maze::platform::WanderingTilt;
use tilt_maze::renderer::CommandRecorder;
use tilt_maze::sim::{SceneDescription, default_maze};
use tilt_maze::{Game, SceneError};

/// Frame time of the headless loop (ms)
const FRAME_MS: f64 = 16.0;
/// Simulated session length (ms)
const RUN_MS: f64 = 60_000.0;
const TILT_SEED: u64 = 0x7117;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tilt Maze (native, headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner on the web
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), SceneError> {
    let scene = match std::env::args().nth(1) {
        Some(path) => SceneDescription::load(path)?,
        None => default_maze(),
    };

    let mut game = Game::new(
        &scene,
        Box::new(WanderingTilt::new(TILT_SEED, 0.05)),
        Box::new(LogAudio::new()),
    )?;
    let mut recorder = CommandRecorder::new();

    let mut elapsed = 0.0;
    while elapsed < RUN_MS {
        game.update(FRAME_MS);
        game.render(&mut recorder);
        elapsed += FRAME_MS;
    }

    let stats = game.stats();
    let ball = game.world().ball();
    println!(
        "{} ticks, {} frames: {} wall hits, {} pits, {} exits; ball at ({:.2}, {:.2})",
        stats.ticks,
        recorder.frames(),
        stats.wall_hits,
        stats.losses,
        stats.wins,
        ball.pos.x,
        ball.pos.y
    );
    Ok(())
}
