//! Vector and rectangle primitives
//!
//! Positions and velocities are `glam::DVec2` (aliased as [`Vector2D`]).
//! Most vector operations map onto glam directly:
//! - set / set-xy: plain assignment, `Vector2D::new`
//! - equality: `==` (exact float comparison)
//! - add / subtract / scale / divide: `+`, `-`, `* k`, `/ k`
//! - length, squared length, normalize: `length()`, `length_squared()`, `normalize()`
//!
//! The rest live on [`Vector2DExt`].

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::{cartesian_to_polar, polar_to_cartesian};

/// 2D point or displacement in pixel space
pub type Vector2D = DVec2;

/// Polar and length helpers missing from glam
pub trait Vector2DExt {
    /// Build a vector from polar coordinates (theta in radians)
    fn from_polar(r: f64, theta: f64) -> Self;

    /// Overwrite with polar coordinates (theta in radians)
    fn set_polar(&mut self, r: f64, theta: f64);

    /// Angle in radians, `0.0` for the zero vector
    fn heading(self) -> f64;

    /// Rotate about the origin by `theta` radians
    fn rotated(self, theta: f64) -> Self;

    /// In-place variant of [`Vector2DExt::rotated`]
    fn rotate_by(&mut self, theta: f64);

    /// Rescale to `new_length` keeping the angle.
    /// A zero vector stays zero instead of dividing by zero.
    fn set_length(&mut self, new_length: f64);

    /// By-value variant of [`Vector2DExt::set_length`]
    fn with_length(self, new_length: f64) -> Self;
}

impl Vector2DExt for DVec2 {
    #[inline]
    fn from_polar(r: f64, theta: f64) -> Self {
        polar_to_cartesian(r, theta)
    }

    #[inline]
    fn set_polar(&mut self, r: f64, theta: f64) {
        *self = polar_to_cartesian(r, theta);
    }

    #[inline]
    fn heading(self) -> f64 {
        cartesian_to_polar(self).1
    }

    fn rotated(self, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        DVec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[inline]
    fn rotate_by(&mut self, theta: f64) {
        *self = self.rotated(theta);
    }

    fn set_length(&mut self, new_length: f64) {
        let orig_length = self.length();
        if orig_length == 0.0 {
            *self = DVec2::ZERO;
            return;
        }
        // Multiply first, then divide by the old length
        *self *= new_length;
        *self /= orig_length;
    }

    #[inline]
    fn with_length(mut self, new_length: f64) -> Self {
        self.set_length(new_length);
        self
    }
}

/// Apply a pixels-per-second velocity over `milliseconds`.
///
/// Note the unit mismatch: velocity is per second, time is in ms.
/// Works equally for acceleration applied to a velocity.
#[inline]
pub fn apply_velocity(start: f64, velocity_per_sec: f64, milliseconds: f64) -> f64 {
    let movement = velocity_per_sec * milliseconds / 1000.0;
    start + movement
}

/// Per-axis [`apply_velocity`]
#[inline]
pub fn apply_velocity_vec(start: Vector2D, velocity_per_sec: Vector2D, milliseconds: f64) -> Vector2D {
    DVec2::new(
        apply_velocity(start.x, velocity_per_sec.x, milliseconds),
        apply_velocity(start.y, velocity_per_sec.y, milliseconds),
    )
}

/// Axis-aligned rectangle (top-left origin, y down)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Inclusive on the low edges, exclusive on the high edges
    #[inline]
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    #[inline]
    pub fn contains_point(&self, p: Vector2D) -> bool {
        self.contains(p.x, p.y)
    }

    /// Grow every side by `amount` (negative shrinks)
    pub fn outset(&self, amount: f64) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.w + amount * 2.0,
            self.h + amount * 2.0,
        )
    }
}
