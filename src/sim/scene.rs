//! Scene setup: turning rectangles into colliders
//!
//! Collision runs on the ball's center, so every wall is shifted by the ball
//! radius here. Obstacles grow outward by the radius and push outward; the
//! outer boundary shrinks inward by the radius and pushes inward.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::{AxisAlignedCollider, PushDirection};
use super::geometry::{Rect, Vector2D};
use super::state::{Pit, World};
use crate::consts::*;
use crate::error::SceneError;
use crate::tuning::Tuning;

/// Builds a [`World`] one piece at a time
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    world: World,
}

impl SceneBuilder {
    /// Start an empty scene. The ball spawns at the default spawn point.
    pub fn new(ball_radius: f64) -> Result<Self, SceneError> {
        if !(ball_radius > 0.0) {
            return Err(SceneError::InvalidRadius(ball_radius));
        }
        Ok(Self {
            world: World::new(DVec2::new(SPAWN_X, SPAWN_Y), ball_radius, Tuning::default()),
        })
    }

    fn radius(&self) -> f64 {
        self.world.ball.radius
    }

    pub fn spawn(mut self, spawn: Vector2D) -> Self {
        self.world.spawn = spawn;
        self.world.reset();
        self
    }

    pub fn tuning(mut self, tuning: Tuning) -> Self {
        self.world.tuning = tuning;
        self
    }

    /// Add a raw collider as-is
    pub fn collider(mut self, collider: AxisAlignedCollider) -> Self {
        self.world.colliders.push(collider);
        self
    }

    /// The four outer walls of a `width` x `height` playfield, pointing inward
    pub fn boundary(self, width: f64, height: f64) -> Self {
        let r = self.radius();
        let (x1, y1) = (r, r);
        let (x2, y2) = (width - r, height - r);
        let w = width - r * 2.0;
        let h = height - r * 2.0;

        self.collider(AxisAlignedCollider::horizontal(x1, y1, w, PushDirection::Positive)) // top
            .collider(AxisAlignedCollider::horizontal(x1, y2, w, PushDirection::Negative)) // bottom
            .collider(AxisAlignedCollider::vertical(x1, y1, h, PushDirection::Positive)) // left
            .collider(AxisAlignedCollider::vertical(x2, y1, h, PushDirection::Negative)) // right
    }

    /// A solid block: drawn as `rect`, collides as `rect` grown by the radius
    pub fn obstacle(mut self, rect: Rect) -> Self {
        self.world.blocks.push(rect);

        let Rect { x, y, w, h } = rect.outset(self.radius());
        // Right and bottom sit on the last pixel row/column, not one past it
        self.collider(AxisAlignedCollider::vertical(x, y, h, PushDirection::Negative)) // left
            .collider(AxisAlignedCollider::vertical(x + w - 1.0, y, h, PushDirection::Positive)) // right
            .collider(AxisAlignedCollider::horizontal(x, y, w, PushDirection::Negative)) // top
            .collider(AxisAlignedCollider::horizontal(x, y + h - 1.0, w, PushDirection::Positive)) // bottom
    }

    /// A pit. The swallowing area starts half a radius up and left of the
    /// drawn rect and grows by half a radius, so the ball can overhang the
    /// edge a little before it drops.
    pub fn pit(mut self, rect: Rect) -> Self {
        let half = self.radius() / 2.0;
        let collision = Rect::new(rect.x - half, rect.y - half, rect.w + half, rect.h + half);
        self.world.pits.push(Pit {
            display: rect,
            collision,
        });
        self
    }

    pub fn exit(mut self, rect: Rect) -> Self {
        self.world.exit = rect;
        self
    }

    pub fn build(self) -> World {
        log::debug!(
            "Scene built: {} colliders, {} blocks, {} pits",
            self.world.colliders.len(),
            self.world.blocks.len(),
            self.world.pits.len()
        );
        self.world
    }
}

/// Declarative scene, as loaded from a config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub width: f64,
    pub height: f64,
    pub ball_radius: f64,
    pub spawn: Vector2D,
    #[serde(default)]
    pub obstacles: Vec<Rect>,
    #[serde(default)]
    pub pits: Vec<Rect>,
    pub exit: Rect,
    #[serde(default)]
    pub tuning: Tuning,
}

impl SceneDescription {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let scene = Self::from_json(&json)?;
        log::info!("Loaded scene from {}", path.display());
        Ok(scene)
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), SceneError> {
        if !(self.ball_radius > 0.0) {
            return Err(SceneError::InvalidRadius(self.ball_radius));
        }
        // The boundary walls are inset by the radius on every side
        let min_side = self.ball_radius * 2.0;
        if !(self.width > min_side && self.height > min_side) {
            return Err(SceneError::PlayfieldTooSmall {
                width: self.width,
                height: self.height,
                radius: self.ball_radius,
            });
        }
        let labelled = self
            .obstacles
            .iter()
            .map(|r| ("obstacle", r))
            .chain(self.pits.iter().map(|r| ("pit", r)))
            .chain(std::iter::once(("exit", &self.exit)));
        for (kind, rect) in labelled {
            let finite = [rect.x, rect.y, rect.w, rect.h].iter().all(|v| v.is_finite());
            if !finite || rect.w < 0.0 || rect.h < 0.0 {
                return Err(SceneError::InvalidRect {
                    kind,
                    x: rect.x,
                    y: rect.y,
                    w: rect.w,
                    h: rect.h,
                });
            }
        }
        Ok(())
    }

    /// Validate and build the world: boundary, then obstacles, then pits
    pub fn build_world(&self) -> Result<World, SceneError> {
        self.validate()?;
        let mut builder = SceneBuilder::new(self.ball_radius)?
            .spawn(self.spawn)
            .tuning(self.tuning)
            .boundary(self.width, self.height);
        for rect in &self.obstacles {
            builder = builder.obstacle(*rect);
        }
        for rect in &self.pits {
            builder = builder.pit(*rect);
        }
        Ok(builder.exit(self.exit).build())
    }
}

/// The stock 320x480 maze
pub fn default_maze() -> SceneDescription {
    SceneDescription {
        width: SCREEN_WIDTH,
        height: SCREEN_HEIGHT,
        ball_radius: BALL_RADIUS,
        spawn: DVec2::new(SPAWN_X, SPAWN_Y),
        obstacles: vec![
            Rect::new(0.0, 50.0, 270.0, 8.0),
            Rect::new(0.0, 100.0, 135.0, 8.0),
            Rect::new(185.0, 100.0, 135.0, 8.0),
            Rect::new(0.0, 330.0, 135.0, 8.0),
            Rect::new(185.0, 330.0, 135.0, 8.0),
            Rect::new(50.0, 380.0, 270.0, 8.0),
            Rect::new(50.0, 430.0, 220.0, 8.0),
            Rect::new(265.0, 430.0, 8.0, 50.0),
        ],
        pits: vec![Rect::new(85.0, 58.0, 42.0, 42.0)],
        exit: Rect::new(278.0, 438.0, 42.0, 42.0),
        tuning: Tuning::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::Orientation;

    #[test]
    fn test_obstacle_colliders_outset_and_push_outward() {
        let world = SceneBuilder::new(10.0)
            .unwrap()
            .obstacle(Rect::new(100.0, 200.0, 50.0, 8.0))
            .build();
        assert_eq!(world.blocks(), &[Rect::new(100.0, 200.0, 50.0, 8.0)]);

        let c = world.colliders();
        assert_eq!(c.len(), 4);
        // left
        assert_eq!(c[0].orientation, Orientation::Vertical);
        assert_eq!(c[0].origin, DVec2::new(90.0, 190.0));
        assert_eq!(c[0].extent, 28.0);
        assert!(c[0].push_offset < 0.0);
        // right
        assert_eq!(c[1].origin, DVec2::new(159.0, 190.0));
        assert!(c[1].push_offset > 0.0);
        // top
        assert_eq!(c[2].orientation, Orientation::Horizontal);
        assert_eq!(c[2].origin, DVec2::new(90.0, 190.0));
        assert_eq!(c[2].extent, 70.0);
        assert!(c[2].push_offset < 0.0);
        // bottom
        assert_eq!(c[3].origin, DVec2::new(90.0, 217.0));
        assert!(c[3].push_offset > 0.0);
    }

    #[test]
    fn test_boundary_points_inward() {
        let world = SceneBuilder::new(10.0).unwrap().boundary(320.0, 480.0).build();
        let c = world.colliders();
        assert_eq!(c.len(), 4);
        assert_eq!((c[0].origin, c[0].extent), (DVec2::new(10.0, 10.0), 300.0));
        assert!(c[0].push_offset > 0.0);
        assert_eq!(c[1].origin, DVec2::new(10.0, 470.0));
        assert!(c[1].push_offset < 0.0);
        assert_eq!((c[2].origin, c[2].extent), (DVec2::new(10.0, 10.0), 460.0));
        assert!(c[2].push_offset > 0.0);
        assert_eq!(c[3].origin, DVec2::new(310.0, 10.0));
        assert!(c[3].push_offset < 0.0);
    }

    #[test]
    fn test_pit_rects() {
        let world = SceneBuilder::new(10.0)
            .unwrap()
            .pit(Rect::new(85.0, 58.0, 42.0, 42.0))
            .build();
        let pit = world.pits()[0];
        assert_eq!(pit.display, Rect::new(85.0, 58.0, 42.0, 42.0));
        assert_eq!(pit.collision, Rect::new(80.0, 53.0, 47.0, 47.0));
        assert!(world.colliders().is_empty());
    }

    #[test]
    fn test_invalid_radius() {
        assert!(matches!(SceneBuilder::new(0.0), Err(SceneError::InvalidRadius(_))));
        assert!(matches!(SceneBuilder::new(f64::NAN), Err(SceneError::InvalidRadius(_))));
    }

    #[test]
    fn test_default_maze() {
        let world = default_maze().build_world().unwrap();
        // boundary + 8 obstacles
        assert_eq!(world.colliders().len(), 4 + 8 * 4);
        assert_eq!(world.blocks().len(), 8);
        assert_eq!(world.pits().len(), 1);
        assert_eq!(world.exit(), Rect::new(278.0, 438.0, 42.0, 42.0));
        assert_eq!(world.ball().pos, DVec2::new(20.0, 20.0));
    }

    #[test]
    fn test_description_json() {
        let json = r#"{
            "width": 200.0,
            "height": 100.0,
            "ball_radius": 4.0,
            "spawn": [10.0, 10.0],
            "obstacles": [{ "x": 50.0, "y": 0.0, "w": 8.0, "h": 60.0 }],
            "exit": { "x": 180.0, "y": 80.0, "w": 20.0, "h": 20.0 }
        }"#;
        let scene = SceneDescription::from_json(json).unwrap();
        assert!(scene.pits.is_empty());
        assert_eq!(scene.tuning, Tuning::default());
        let world = scene.build_world().unwrap();
        assert_eq!(world.colliders().len(), 8);
        assert_eq!(world.spawn(), DVec2::new(10.0, 10.0));
    }

    #[test]
    fn test_description_rejects_negative_rect() {
        let mut scene = default_maze();
        scene.pits.push(Rect::new(0.0, 0.0, -5.0, 5.0));
        let err = scene.build_world().unwrap_err();
        assert!(matches!(err, SceneError::InvalidRect { kind: "pit", .. }));
    }

    #[test]
    fn test_description_rejects_cramped_playfield() {
        let mut scene = default_maze();
        scene.width = 15.0;
        let err = scene.build_world().unwrap_err();
        assert!(matches!(err, SceneError::PlayfieldTooSmall { radius, .. } if radius == 10.0));

        // Exactly two radii leaves a zero-length wall; still rejected
        let mut scene = default_maze();
        scene.height = 20.0;
        assert!(matches!(scene.build_world(), Err(SceneError::PlayfieldTooSmall { .. })));

        let mut scene = default_maze();
        scene.width = f64::NAN;
        assert!(matches!(scene.build_world(), Err(SceneError::PlayfieldTooSmall { .. })));
    }

    #[test]
    fn test_description_rejects_non_finite_rect() {
        let mut scene = default_maze();
        scene.obstacles.push(Rect::new(10.0, 10.0, f64::NAN, 5.0));
        let err = scene.build_world().unwrap_err();
        assert!(matches!(err, SceneError::InvalidRect { kind: "obstacle", .. }));

        let mut scene = default_maze();
        scene.exit = Rect::new(f64::INFINITY, 0.0, 10.0, 10.0);
        let err = scene.build_world().unwrap_err();
        assert!(matches!(err, SceneError::InvalidRect { kind: "exit", .. }));
    }

    #[test]
    fn test_description_json_roundtrip() {
        let scene = default_maze();
        let back = SceneDescription::from_json(&scene.to_json().unwrap()).unwrap();
        assert_eq!(back, scene);
    }
}
