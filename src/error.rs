//! Setup-time errors
//!
//! The physics itself never fails; only loading and validating a scene can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Ball radius must be positive, got {0}")]
    InvalidRadius(f64),
    #[error("Playfield {width} x {height} leaves no room for a ball of radius {radius}")]
    PlayfieldTooSmall { width: f64, height: f64, radius: f64 },
    #[error("{kind} rect at ({x}, {y}) has a bad size ({w} x {h})")]
    InvalidRect {
        kind: &'static str,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    },
    #[error("Scene parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Scene file error: {0}")]
    Io(#[from] std::io::Error),
}
