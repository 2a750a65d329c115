//! Axis-aligned collision segments
//!
//! The maze only has purely vertical and horizontal walls, so every collider
//! is a zero-thickness segment along one axis. Obstacles are inflated by the
//! ball radius when the scene is built, which lets all of the math here run
//! on the ball's center point instead of a circle.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::Vector2D;
use crate::consts::{PUSH_DISTANCE, REBOUND_FACTOR};

/// Which axis a collider runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Direction a collider shoves a body that struck it.
///
/// `Positive` on a vertical collider keeps things to its right;
/// on a horizontal collider it keeps things below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PushDirection {
    Negative,
    #[default]
    Zero,
    Positive,
}

impl PushDirection {
    /// Signed nudge distance
    pub fn offset(self) -> f64 {
        match self {
            PushDirection::Negative => -PUSH_DISTANCE,
            PushDirection::Zero => 0.0,
            PushDirection::Positive => PUSH_DISTANCE,
        }
    }
}

/// A vertical or horizontal collision segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAlignedCollider {
    pub orientation: Orientation,
    /// Start point of the segment
    pub origin: Vector2D,
    /// Height (vertical) or width (horizontal)
    pub extent: f64,
    /// Signed offset applied by [`AxisAlignedCollider::push`]
    pub push_offset: f64,
}

/// Outcome of testing one movement against every collider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Where the movement ends after truncation
    pub position: Vector2D,
    /// Index of the collider that stopped the movement, if any
    pub collider: Option<usize>,
}

impl AxisAlignedCollider {
    pub fn new(orientation: Orientation, origin: Vector2D, extent: f64, push: PushDirection) -> Self {
        debug_assert!(extent >= 0.0, "collider extent must be non-negative, got {extent}");
        Self {
            orientation,
            origin,
            extent,
            push_offset: push.offset(),
        }
    }

    pub fn vertical(x: f64, y: f64, height: f64, push: PushDirection) -> Self {
        Self::new(Orientation::Vertical, DVec2::new(x, y), height, push)
    }

    pub fn horizontal(x: f64, y: f64, width: f64, push: PushDirection) -> Self {
        Self::new(Orientation::Horizontal, DVec2::new(x, y), width, push)
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.orientation == Orientation::Vertical
    }

    /// Test the movement `start -> end` against this segment.
    ///
    /// Returns the exact crossing point, or `None` when the movement reaches
    /// `end` unobstructed. Cheap rejections run before the division.
    pub fn check_collision(&self, start: Vector2D, end: Vector2D) -> Option<Vector2D> {
        // Swap into (across, along) coordinates so one code path serves both
        // orientations: `across` is perpendicular to the segment.
        let (s_across, s_along, e_across, e_along, line, lo) = match self.orientation {
            Orientation::Vertical => (start.x, start.y, end.x, end.y, self.origin.x, self.origin.y),
            Orientation::Horizontal => (start.y, start.x, end.y, end.x, self.origin.y, self.origin.x),
        };

        // Endpoints must be on opposite sides of (or on) the line
        if !is_between(s_across, line, e_across) {
            return None;
        }

        // Both before the segment's start?
        if s_along < lo && e_along < lo {
            return None;
        }
        // Both past its far end? The far end is measured from the start
        // point's frame, not from the segment origin.
        let far = s_along + self.extent;
        if s_along > far && e_along > far {
            return None;
        }

        let d_across = e_across - s_across;
        if d_across == 0.0 {
            // No perpendicular movement: nothing to interpolate
            log::trace!("degenerate movement along collider at {line}");
            return None;
        }
        let d_along = e_along - s_along;
        let crossing = s_along + (line - s_across) * d_along / d_across;

        if !is_between(lo, crossing, lo + self.extent) {
            return None;
        }

        Some(match self.orientation {
            Orientation::Vertical => DVec2::new(line, crossing),
            Orientation::Horizontal => DVec2::new(crossing, line),
        })
    }

    /// Nudge `pos` off the line in the push direction
    pub fn push(&self, pos: &mut Vector2D) {
        match self.orientation {
            Orientation::Vertical => pos.x += self.push_offset,
            Orientation::Horizontal => pos.y += self.push_offset,
        }
    }

    /// Bounce `velocity` off this wall.
    ///
    /// The perpendicular component reverses and keeps a quarter of its speed,
    /// dropping to zero below `min_rebound` so the ball settles instead of
    /// micro-bouncing. The parallel component is untouched.
    pub fn rebound_velocity(&self, velocity: Vector2D, min_rebound: f64) -> Vector2D {
        let damp = |v: f64| {
            let v = -REBOUND_FACTOR * v;
            if v * v < min_rebound * min_rebound { 0.0 } else { v }
        };
        match self.orientation {
            Orientation::Vertical => DVec2::new(damp(velocity.x), velocity.y),
            Orientation::Horizontal => DVec2::new(velocity.x, damp(velocity.y)),
        }
    }
}

/// True if `middle` lies inclusively between `a` and `b`, in either order
#[inline]
pub fn is_between(a: f64, middle: f64, b: f64) -> bool {
    if a <= middle {
        b >= middle
    } else {
        b <= middle
    }
}

/// Run a movement through every collider in order.
///
/// Each hit replaces the target with its crossing point and becomes the
/// current winner. Later colliders are tested against the shortened segment,
/// so the last one to register is the nearest along the path.
pub fn resolve_movement(colliders: &[AxisAlignedCollider], start: Vector2D, end: Vector2D) -> Resolution {
    let mut want = end;
    let mut winner = None;
    for (i, wall) in colliders.iter().enumerate() {
        if let Some(hit) = wall.check_collision(start, want) {
            want = hit;
            winner = Some(i);
        }
    }
    Resolution {
        position: want,
        collider: winner,
    }
}
