//! Rendering module
//!
//! The physics core never draws. A frame is pushed through a [`RenderSink`],
//! so any drawing backend can sit behind it at runtime.

pub mod frame;
pub mod sink;

pub use frame::draw_frame;
pub use sink::{CommandRecorder, DrawCommand, RenderSink, Sprite};
