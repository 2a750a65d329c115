//! Platform abstraction layer
//!
//! Tilt input providers. The simulation only ever sees the latest normalized
//! value per axis; how and when the platform updates it is up to the source.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::TickInput;

/// Planar tilt axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Map a joystick axis index. Index 2 (the z accelerometer) and
    /// anything beyond it have no planar meaning.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            _ => None,
        }
    }
}

/// Source of normalized tilt, each axis in [-1.0, 1.0]
pub trait TiltSource {
    fn read_axis(&mut self, axis: Axis) -> f64;

    /// Sample both axes into a tick input
    fn sample(&mut self) -> TickInput {
        TickInput::new(self.read_axis(Axis::X), self.read_axis(Axis::Y))
    }
}

/// Holds the most recent value per axis. Reads between updates return the
/// previous value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LatestTilt {
    x: f64,
    y: f64,
}

impl LatestTilt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an already-normalized value, clamped to [-1, 1]
    pub fn set(&mut self, axis: Axis, value: f64) {
        let value = value.clamp(-1.0, 1.0);
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }

    /// Store a raw joystick axis reading, where ±32768 is 1g
    pub fn update_raw(&mut self, axis_index: u8, raw: i16) {
        match Axis::from_index(axis_index) {
            Some(axis) => self.set(axis, f64::from(raw) / 32768.0),
            None => log::trace!("ignoring tilt axis {axis_index}"),
        }
    }
}

impl TiltSource for LatestTilt {
    fn read_axis(&mut self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Constant tilt
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedTilt(pub TickInput);

impl FixedTilt {
    pub fn new(x: f64, y: f64) -> Self {
        Self(TickInput::new(x, y))
    }
}

impl TiltSource for FixedTilt {
    fn read_axis(&mut self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.0.tilt.x,
            Axis::Y => self.0.tilt.y,
        }
    }
}

/// Seeded random walk, for headless runs without a device
#[derive(Debug, Clone)]
pub struct WanderingTilt {
    rng: Pcg32,
    current: LatestTilt,
    /// Largest change per read
    step: f64,
}

impl WanderingTilt {
    pub fn new(seed: u64, step: f64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            current: LatestTilt::new(),
            step,
        }
    }
}

impl TiltSource for WanderingTilt {
    fn read_axis(&mut self, axis: Axis) -> f64 {
        let value = self.current.read_axis(axis) + self.rng.random_range(-self.step..=self.step);
        self.current.set(axis, value);
        self.current.read_axis(axis)
    }
}
