//! Render sink trait and a command-recording implementation

/// Images the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Ball,
    Pit,
    Exit,
}

/// Drawing backend. Coordinates are top-left origin, y down, in pixels.
pub trait RenderSink {
    /// Draw a sprite with its top-left corner at (x, y)
    fn draw_sprite(&mut self, sprite: Sprite, x: i32, y: i32);
    /// Fill a rect with a 0xRRGGBB color
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32);
    /// Done with drawing for this frame
    fn frame_complete(&mut self);
}

/// A single recorded draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    Sprite { sprite: Sprite, x: i32, y: i32 },
    Fill { x: i32, y: i32, w: i32, h: i32, color: u32 },
}

/// Records draw calls instead of drawing; the last complete frame is kept
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    pending: Vec<DrawCommand>,
    frame: Vec<DrawCommand>,
    frames: u64,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the most recently completed frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.frame
    }

    /// Number of completed frames
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for CommandRecorder {
    fn draw_sprite(&mut self, sprite: Sprite, x: i32, y: i32) {
        self.pending.push(DrawCommand::Sprite { sprite, x, y });
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        self.pending.push(DrawCommand::Fill { x, y, w, h, color });
    }

    fn frame_complete(&mut self) {
        self.frame = std::mem::take(&mut self.pending);
        self.frames += 1;
    }
}
