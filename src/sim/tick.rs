//! Per-frame simulation tick
//!
//! Advances the ball by one variable-length step: integrate, resolve
//! collisions, bounce, then check pits and the exit.

use glam::DVec2;

use super::collision::resolve_movement;
use super::geometry::{Vector2D, apply_velocity, apply_velocity_vec};
use super::state::{GameEvent, World};
use crate::consts::MAX_TICK_MS;

/// Input sampled at the start of a tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Normalized tilt per axis, each in [-1, 1]
    pub tilt: Vector2D,
}

impl TickInput {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            tilt: DVec2::new(x, y),
        }
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    /// Events in the order they occurred
    pub events: Vec<GameEvent>,
    /// Index of the collider the ball struck, if any
    pub collider: Option<usize>,
}

impl TickOutcome {
    pub fn contains(&self, event: GameEvent) -> bool {
        self.events.contains(&event)
    }
}

/// Advance the world by `elapsed_ms`.
///
/// Steps longer than [`MAX_TICK_MS`] are clamped so a long stall (a debugger
/// break, a suspended window) can't launch the ball across the maze.
/// A non-finite step counts as no time at all.
pub fn tick(world: &mut World, input: &TickInput, elapsed_ms: f64) -> TickOutcome {
    let ms = if elapsed_ms.is_finite() {
        elapsed_ms.clamp(0.0, MAX_TICK_MS)
    } else {
        0.0
    };
    let mut outcome = TickOutcome::default();

    let acc = input.tilt * world.tuning.gravity_scale;
    let ball = &mut world.ball;
    ball.vel.x = apply_velocity(ball.vel.x, acc.x, ms);
    ball.vel.y = apply_velocity(ball.vel.y, acc.y, ms);

    // Start and end stay distinct until collisions are resolved
    let want_pos = apply_velocity_vec(ball.pos, ball.vel, ms);
    let resolution = resolve_movement(&world.colliders, ball.pos, want_pos);
    ball.pos = resolution.position;

    if let Some(index) = resolution.collider {
        let wall = &world.colliders[index];
        wall.push(&mut ball.pos);
        ball.vel = wall.rebound_velocity(ball.vel, world.tuning.min_rebound_velocity);
        log::trace!(
            "hit collider {index} at ({:.2}, {:.2}), vel now ({:.2}, {:.2})",
            ball.pos.x,
            ball.pos.y,
            ball.vel.x,
            ball.vel.y
        );
        outcome.collider = Some(index);
        outcome.events.push(GameEvent::WallHit);
    }

    // Terminal regions test whole pixels
    let probe = DVec2::new(ball.pos.x.trunc(), ball.pos.y.trunc());

    if world.pits.iter().any(|pit| pit.collision.contains_point(probe)) {
        log::info!("Ball fell into a pit at ({}, {})", probe.x, probe.y);
        outcome.events.push(GameEvent::Lose);
        world.reset();
        return outcome;
    }

    if world.exit.contains_point(probe) {
        log::info!("Ball reached the exit at ({}, {})", probe.x, probe.y);
        outcome.events.push(GameEvent::Win);
        world.reset();
    }

    outcome
}
