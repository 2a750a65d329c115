//! Physics core
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Elapsed time and tilt come in as plain values
//! - Events go out as values; no audio, rendering or platform calls
//! - Collider order is fixed at scene build and never changes

pub mod collision;
pub mod geometry;
pub mod scene;
pub mod state;
pub mod tick;

pub use collision::{AxisAlignedCollider, Orientation, PushDirection, Resolution, is_between, resolve_movement};
pub use geometry::{Rect, Vector2D, Vector2DExt, apply_velocity, apply_velocity_vec};
pub use scene::{SceneBuilder, SceneDescription, default_maze};
pub use state::{Ball, GameEvent, Pit, World};
pub use tick::{TickInput, TickOutcome, tick};
