//! Gesture Platformer - A tile-based platformer driven by hand gestures
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, enemies, level, game state)
//! - `gesture`: Hand-landmark classification into discrete actions
//! - `runner`: Fixed-rate game loop bridging trackers, simulation and frontends
//! - `settings`: Data-driven tuning loaded from JSON

pub mod error;
pub mod gesture;
pub mod runner;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use gesture::{Gesture, GestureClassifier, HandTracker};
pub use runner::{Frontend, GameLoop, StopReason};
pub use settings::{Physics, Settings};

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second
    pub const TICK_RATE: u32 = 60;

    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 1080.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Square tile edge length (pixels)
    pub const TILE_SIZE: f32 = 60.0;
    /// Opt-in enemy spawn pitch reproducing the classic level layout. Slightly
    /// wider than a tile, so enemies drift right and down the further they
    /// spawn from the origin. The default pitch is `TILE_SIZE`.
    pub const LEGACY_ENEMY_SPAWN_PITCH: f32 = 61.0;

    /// Player sprite size
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 100.0;
    /// Player spawn point (top-left); y is measured up from the screen bottom
    pub const PLAYER_SPAWN_X: f32 = 50.0;
    pub const PLAYER_SPAWN_FROM_BOTTOM: f32 = 150.0;

    /// Player physics defaults (pixels per tick)
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const GRAVITY: f32 = 0.75;
    pub const JUMP_SPEED: f32 = -15.0;

    /// Walk animation
    pub const WALK_FRAMES: u32 = 4;
    /// Left-walk frame advance threshold (ticks). Fractional on purpose: the
    /// integer counter crosses it every second tick.
    pub const LEFT_FRAME_CADENCE: f32 = 1.2;
    /// Right-walk frame advance threshold (ticks)
    pub const RIGHT_FRAME_CADENCE: f32 = 10.0;

    /// Enemy sprite size
    pub const ENEMY_SIZE: f32 = 40.0;
    /// Ticks an enemy walks in one direction before turning
    pub const ENEMY_PATROL_TURN: i32 = 50;

    /// Exit door sprite size
    pub const EXIT_WIDTH: f32 = 40.0;
    pub const EXIT_HEIGHT: f32 = 60.0;

    /// Only one of every N classifier calls samples a camera frame
    pub const GESTURE_THROTTLE: u32 = 3;
}
