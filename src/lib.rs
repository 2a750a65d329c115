//! Tilt Maze - a ball rolling through a maze under device tilt
//!
//! Core modules:
//! - `sim`: Physics core (geometry, axis-aligned colliders, per-tick integration)
//! - `renderer`: Render sink abstraction and frame drawing
//! - `platform`: Tilt input providers
//! - `audio`: Audio sink abstraction for collision/win/lose cues
//! - `tuning`: Data-driven physics constants
//! - `game`: Session driver tying input, simulation and sinks together

pub mod audio;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::SceneError;
pub use game::Game;
pub use tuning::Tuning;

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Maze dimensions (pixels, top-left origin, y down)
    pub const SCREEN_WIDTH: f64 = 320.0;
    pub const SCREEN_HEIGHT: f64 = 480.0;

    /// Largest elapsed time a single tick will integrate (ms)
    pub const MAX_TICK_MS: f64 = 100.0;

    /// Acceleration at full tilt (pixels/s² per unit of normalized input)
    pub const GRAVITY_ACC_PPSPS: f64 = 300.0;
    /// Rebound speeds below this are zeroed (pixels/s)
    pub const MINIMUM_REBOUND_VELOCITY: f64 = 5.0;
    /// Fraction of the perpendicular velocity kept (and reversed) by a wall hit
    pub const REBOUND_FACTOR: f64 = 0.25;

    /// Distance a collider nudges the ball off its line after a hit.
    /// A quarter pixel keeps the drawn position unchanged.
    pub const PUSH_DISTANCE: f64 = 0.25;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 10.0;
    pub const SPAWN_X: f64 = 20.0;
    pub const SPAWN_Y: f64 = 20.0;

    /// How long play holds after reaching the exit (ms)
    pub const WIN_PAUSE_MS: f64 = 1000.0;

    /// Colors (0xRRGGBB)
    pub const BACKGROUND_COLOR: u32 = 0x000000;
    pub const BLOCK_COLOR: u32 = 0x0000ff;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
///
/// The zero vector maps to `(0.0, 0.0)`.
#[inline]
pub fn cartesian_to_polar(pos: DVec2) -> (f64, f64) {
    let theta = if pos.x == 0.0 && pos.y == 0.0 {
        0.0
    } else {
        pos.y.atan2(pos.x)
    };
    (pos.length(), theta)
}
