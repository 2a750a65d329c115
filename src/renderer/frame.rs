//! Frame drawing
//!
//! Draw order: background, blocks, pits, exit, ball.

use super::sink::{RenderSink, Sprite};
use crate::consts::{BACKGROUND_COLOR, BLOCK_COLOR};
use crate::sim::{Rect, World};

/// Draw the whole world and finish the frame
pub fn draw_frame(world: &World, width: f64, height: f64, sink: &mut dyn RenderSink) {
    sink.fill_rect(0, 0, width as i32, height as i32, BACKGROUND_COLOR);

    for block in world.blocks() {
        let (x, y, w, h) = pixels(block);
        sink.fill_rect(x, y, w, h, BLOCK_COLOR);
    }

    for pit in world.pits() {
        sink.draw_sprite(Sprite::Pit, pit.display.x as i32, pit.display.y as i32);
    }

    let exit = world.exit();
    sink.draw_sprite(Sprite::Exit, exit.x as i32, exit.y as i32);

    // Ball position is its center; sprites are placed by top-left
    let origin = world.ball().draw_origin();
    sink.draw_sprite(Sprite::Ball, origin.x as i32, origin.y as i32);

    sink.frame_complete();
}

fn pixels(rect: &Rect) -> (i32, i32, i32, i32) {
    (rect.x as i32, rect.y as i32, rect.w as i32, rect.h as i32)
}
