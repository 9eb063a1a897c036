//! Player kinematics
//!
//! One call to [`Player::update`] is one tick of movement: gesture impulse,
//! horizontal clamp, gravity, floor clamp, then platform landing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::level::Platform;
use crate::consts::*;
use crate::gesture::Gesture;
use crate::settings::Physics;

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive is down)
    pub fall_speed: f32,
    pub is_jumping: bool,
    pub is_grounded: bool,
    pub facing: Facing,
    /// Current walk-cycle frame, shared by both directions
    pub frame: u32,
    /// Ticks since the last right-walk frame advance
    pub right_counter: u32,
    /// Ticks since the last left-walk frame advance
    pub left_counter: u32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            fall_speed: 0.0,
            is_jumping: false,
            is_grounded: false,
            facing: Facing::Right,
            frame: 0,
            right_counter: 0,
            left_counter: 0,
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    #[inline]
    fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    fn advance_frame(&mut self, physics: &Physics) {
        self.frame = (self.frame + 1) % physics.walk_frames.max(1);
    }

    /// Advance one tick. Returns true if the player landed on a platform.
    ///
    /// `bounds` is the screen size; the player never leaves it horizontally
    /// and never falls below its bottom edge.
    pub fn update(
        &mut self,
        gesture: Gesture,
        platforms: &[Platform],
        bounds: Vec2,
        physics: &Physics,
    ) -> bool {
        match gesture {
            Gesture::MoveLeft => {
                self.pos.x -= physics.speed;
                self.facing = Facing::Left;
                self.left_counter += 1;
                if self.left_counter as f32 >= physics.left_frame_cadence {
                    self.advance_frame(physics);
                    self.left_counter = 0;
                }
            }
            Gesture::MoveRight => {
                self.pos.x += physics.speed;
                self.facing = Facing::Right;
                self.right_counter += 1;
                if self.right_counter as f32 >= physics.right_frame_cadence {
                    self.advance_frame(physics);
                    self.right_counter = 0;
                }
            }
            Gesture::Jump => {
                if !self.is_jumping && self.is_grounded {
                    self.fall_speed = physics.jump_speed;
                    self.is_jumping = true;
                    self.is_grounded = false;
                }
            }
            Gesture::None => {}
        }

        // max-after-min: a screen narrower than the player pins x to 0
        self.pos.x = self.pos.x.min(bounds.x - self.size.x).max(0.0);

        self.fall_speed += physics.gravity;
        self.pos.y += self.fall_speed;

        if self.bottom() > bounds.y {
            self.set_bottom(bounds.y);
            self.fall_speed = 0.0;
        }

        // Rising players pass through platforms; only a falling or resting
        // player lands. Last overlapping platform wins.
        self.is_grounded = false;
        for platform in platforms {
            if self.rect().intersects(&platform.rect) && self.fall_speed >= 0.0 {
                self.set_bottom(platform.rect.top());
                self.fall_speed = 0.0;
                self.is_jumping = false;
                self.is_grounded = true;
            }
        }

        self.is_grounded
    }
}
