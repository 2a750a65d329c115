//! Physics tuning constants
//!
//! Loaded once at setup; there is no live reconfiguration during play.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{GRAVITY_ACC_PPSPS, MINIMUM_REBOUND_VELOCITY};
use crate::error::SceneError;

/// Tunable physics values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Acceleration at full tilt (pixels/s² per unit of input)
    pub gravity_scale: f64,
    /// Rebounds slower than this stop dead (pixels/s)
    pub min_rebound_velocity: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity_scale: GRAVITY_ACC_PPSPS,
            min_rebound_velocity: MINIMUM_REBOUND_VELOCITY,
        }
    }
}

impl Tuning {
    /// Parse from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        log::info!(
            "Loaded tuning: gravity {} px/s², min rebound {} px/s",
            tuning.gravity_scale,
            tuning.min_rebound_velocity
        );
        Ok(tuning)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let tuning = Tuning::default();
        assert_eq!(tuning.gravity_scale, 300.0);
        assert_eq!(tuning.min_rebound_velocity, 5.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity_scale": 450.0 }"#).unwrap();
        assert_eq!(tuning.gravity_scale, 450.0);
        assert_eq!(tuning.min_rebound_velocity, 5.0);
    }

    #[test]
    fn test_bad_json() {
        let err = Tuning::from_json("{ gravity").unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Tuning::load("/nonexistent/tilt-maze/tuning.json").unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }
}
