//! Audio sink abstraction
//!
//! Playback is fire-and-forget: the game hands over an event and never looks
//! at the result. Loading and mixing the actual samples belongs to the sink.

use crate::sim::GameEvent;

/// Sound cue for each game event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Ball knocks against a wall
    WoodBlock,
    /// Ball lost down a pit
    WahWah,
    /// Exit reached
    Tada,
}

impl SoundCue {
    pub fn for_event(event: GameEvent) -> Self {
        match event {
            GameEvent::WallHit => SoundCue::WoodBlock,
            GameEvent::Lose => SoundCue::WahWah,
            GameEvent::Win => SoundCue::Tada,
        }
    }

    /// Asset file a sink would load for this cue
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundCue::WoodBlock => "woodblock.wav",
            SoundCue::WahWah => "wawa.wav",
            SoundCue::Tada => "tada.wav",
        }
    }
}

/// Receives game events as they happen
pub trait AudioSink {
    fn play_event(&mut self, event: GameEvent);
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_event(&mut self, _event: GameEvent) {}
}

/// Logs the cue that would play
#[derive(Debug, Clone, Default)]
pub struct LogAudio {
    muted: bool,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}

impl AudioSink for LogAudio {
    fn play_event(&mut self, event: GameEvent) {
        if self.muted {
            return;
        }
        let cue = SoundCue::for_event(event);
        log::info!("[audio] {} -> {}", event.as_str(), cue.file_name());
    }
}
