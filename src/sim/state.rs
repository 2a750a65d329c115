//! World state and core simulation types
//!
//! Scene data (colliders, blocks, pits, exit) is fixed once the world is
//! built. Ball position and velocity are only written by [`super::tick`].

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::AxisAlignedCollider;
use super::geometry::{Rect, Vector2D};
use crate::tuning::Tuning;

/// Something the outside world should hear about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a wall
    WallHit,
    /// Ball fell into a pit
    Lose,
    /// Ball reached the exit
    Win,
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::WallHit => "wall-hit",
            GameEvent::Lose => "lose",
            GameEvent::Win => "win",
        }
    }

    /// Terminal events reset the ball
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::Lose | GameEvent::Win)
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center of the ball
    pub pos: Vector2D,
    /// Pixels per second
    pub vel: Vector2D,
    pub radius: f64,
}

impl Ball {
    pub fn at_rest(pos: Vector2D, radius: f64) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            radius,
        }
    }

    /// Top-left corner of the ball sprite (position truncated to whole pixels)
    pub fn draw_origin(&self) -> Vector2D {
        DVec2::new(self.pos.x.trunc() - self.radius, self.pos.y.trunc() - self.radius)
    }
}

/// A pit: what is drawn, and the area that swallows the ball's center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pit {
    pub display: Rect,
    pub collision: Rect,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub(crate) ball: Ball,
    pub(crate) spawn: Vector2D,
    /// Order matters only as the tie-break in collision resolution
    pub(crate) colliders: Vec<AxisAlignedCollider>,
    /// Visible obstacle rects (before radius inflation)
    pub(crate) blocks: Vec<Rect>,
    pub(crate) pits: Vec<Pit>,
    pub(crate) exit: Rect,
    pub(crate) tuning: Tuning,
}

impl World {
    /// An empty world with the ball resting at `spawn`
    pub fn new(spawn: Vector2D, ball_radius: f64, tuning: Tuning) -> Self {
        Self {
            ball: Ball::at_rest(spawn, ball_radius),
            spawn,
            colliders: Vec::new(),
            blocks: Vec::new(),
            pits: Vec::new(),
            exit: Rect::default(),
            tuning,
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn spawn(&self) -> Vector2D {
        self.spawn
    }

    pub fn colliders(&self) -> &[AxisAlignedCollider] {
        &self.colliders
    }

    pub fn blocks(&self) -> &[Rect] {
        &self.blocks
    }

    pub fn pits(&self) -> &[Pit] {
        &self.pits
    }

    pub fn exit(&self) -> Rect {
        self.exit
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Put the ball back at spawn with no velocity
    pub fn reset(&mut self) {
        self.ball.pos = self.spawn;
        self.ball.vel = DVec2::ZERO;
    }
}
