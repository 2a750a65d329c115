//! Game session
//!
//! Owns the world and its collaborators for the length of a session: samples
//! tilt at the start of every update, runs one tick, forwards events to audio,
//! and holds play for a moment after a win.

use crate::audio::AudioSink;
use crate::consts::WIN_PAUSE_MS;
use crate::error::SceneError;
use crate::platform::TiltSource;
use crate::renderer::{RenderSink, draw_frame};
use crate::sim::{GameEvent, SceneDescription, TickOutcome, World, tick};

/// Running totals for a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub ticks: u64,
    pub wall_hits: u64,
    pub losses: u64,
    pub wins: u64,
}

/// A game session
pub struct Game {
    world: World,
    width: f64,
    height: f64,
    tilt: Box<dyn TiltSource>,
    audio: Box<dyn AudioSink>,
    /// Time left before play resumes after a win (ms)
    hold_ms: f64,
    stats: SessionStats,
}

impl Game {
    pub fn new(
        scene: &SceneDescription,
        tilt: Box<dyn TiltSource>,
        audio: Box<dyn AudioSink>,
    ) -> Result<Self, SceneError> {
        let world = scene.build_world()?;
        log::info!(
            "Game started: {}x{} maze, {} colliders",
            scene.width,
            scene.height,
            world.colliders().len()
        );
        Ok(Self {
            world,
            width: scene.width,
            height: scene.height,
            tilt,
            audio,
            hold_ms: 0.0,
            stats: SessionStats::default(),
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// True while play is held after a win
    pub fn is_holding(&self) -> bool {
        self.hold_ms > 0.0
    }

    /// Advance by `elapsed_ms` of wall-clock time.
    ///
    /// Returns `None` while play is held after a win; the hold swallows time
    /// without ticking.
    pub fn update(&mut self, elapsed_ms: f64) -> Option<TickOutcome> {
        if self.hold_ms > 0.0 {
            // Negative or NaN time never stretches the hold
            self.hold_ms -= elapsed_ms.max(0.0);
            if self.hold_ms <= 0.0 {
                self.hold_ms = 0.0;
                log::debug!("Win hold over, resuming");
            }
            return None;
        }

        let input = self.tilt.sample();
        let outcome = tick(&mut self.world, &input, elapsed_ms);
        self.stats.ticks += 1;

        for &event in &outcome.events {
            match event {
                GameEvent::WallHit => self.stats.wall_hits += 1,
                GameEvent::Lose => self.stats.losses += 1,
                GameEvent::Win => {
                    self.stats.wins += 1;
                    self.hold_ms = WIN_PAUSE_MS;
                }
            }
            self.audio.play_event(event);
        }
        Some(outcome)
    }

    /// Draw the current frame
    pub fn render(&self, sink: &mut dyn RenderSink) {
        draw_frame(&self.world, self.width, self.height, sink);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::platform::FixedTilt;
    use crate::renderer::CommandRecorder;
    use crate::sim::{Rect, default_maze};

    /// Audio sink that shares what it heard with the test
    #[derive(Clone, Default)]
    struct Heard(Rc<RefCell<Vec<GameEvent>>>);

    impl AudioSink for Heard {
        fn play_event(&mut self, event: GameEvent) {
            self.0.borrow_mut().push(event);
        }
    }

    fn exit_next_to_spawn() -> SceneDescription {
        let mut scene = default_maze();
        scene.exit = Rect::new(24.0, 10.0, 20.0, 20.0);
        scene
    }

    #[test]
    fn test_events_reach_audio() {
        let heard = Heard::default();
        let mut game = Game::new(
            &default_maze(),
            Box::new(FixedTilt::new(-1.0, 0.0)),
            Box::new(heard.clone()),
        )
        .unwrap();

        for _ in 0..60 {
            game.update(16.0);
        }
        let heard = heard.0.borrow();
        assert!(heard.contains(&GameEvent::WallHit));
        assert_eq!(heard.len() as u64, game.stats().wall_hits);
    }

    #[test]
    fn test_win_holds_then_resumes() {
        let heard = Heard::default();
        let mut game = Game::new(
            &exit_next_to_spawn(),
            Box::new(FixedTilt::new(1.0, 0.0)),
            Box::new(heard.clone()),
        )
        .unwrap();

        let mut won = false;
        for _ in 0..100 {
            if let Some(outcome) = game.update(50.0) {
                if outcome.contains(GameEvent::Win) {
                    won = true;
                    break;
                }
            }
        }
        assert!(won);
        assert_eq!(*heard.0.borrow(), vec![GameEvent::Win]);
        assert_eq!(game.world().ball().pos, game.world().spawn());
        assert!(game.is_holding());

        // Backwards time neither ticks nor extends the hold
        let ticks = game.stats().ticks;
        assert!(game.update(-500.0).is_none());
        assert!(game.update(f64::NAN).is_none());

        // A 1000ms hold takes twenty 50ms updates
        for _ in 0..20 {
            assert!(game.update(50.0).is_none());
        }
        assert!(!game.is_holding());
        assert!(game.update(50.0).is_some());
        assert_eq!(game.stats().ticks, ticks + 1);
    }

    #[test]
    fn test_render_uses_scene_size() {
        let game = Game::new(
            &default_maze(),
            Box::new(FixedTilt::default()),
            Box::new(crate::audio::NullAudio),
        )
        .unwrap();
        let mut recorder = CommandRecorder::new();
        game.render(&mut recorder);
        assert_eq!(recorder.frames(), 1);
        assert!(!recorder.last_frame().is_empty());
    }
}
