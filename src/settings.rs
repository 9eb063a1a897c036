//! Game settings and tuning
//!
//! Loaded from a JSON file; any field left out keeps its default.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Player movement tuning (pixels per tick)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Physics {
    /// Horizontal step per move gesture
    pub speed: f32,
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_speed: f32,
    /// Ticks between left-walk frame advances
    pub left_frame_cadence: f32,
    /// Ticks between right-walk frame advances
    pub right_frame_cadence: f32,
    /// Frames in the walk cycle
    pub walk_frames: u32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            left_frame_cadence: LEFT_FRAME_CADENCE,
            right_frame_cadence: RIGHT_FRAME_CADENCE,
            walk_frames: WALK_FRAMES,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Timing ===
    /// Target ticks per second (0 = run unthrottled)
    pub tick_rate: u32,

    // === Level ===
    pub tile_size: f32,
    /// Pixel pitch of enemy spawn cells (`tile_size` by default,
    /// `LEGACY_ENEMY_SPAWN_PITCH` for the classic layout)
    pub enemy_spawn_pitch: f32,

    // === Input ===
    /// Sample one camera frame every N classifier calls
    pub gesture_throttle: u32,

    // === Player ===
    pub physics: Physics,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tick_rate: TICK_RATE,
            tile_size: TILE_SIZE,
            enemy_spawn_pitch: TILE_SIZE,
            gesture_throttle: GESTURE_THROTTLE,
            physics: Physics::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file is
    /// an error.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::warn!("{} not found, using default settings", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(GameError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings: Self = serde_json::from_str(&json).map_err(|source| GameError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Player spawn point (top-left corner)
    pub fn player_spawn(&self) -> glam::Vec2 {
        glam::Vec2::new(PLAYER_SPAWN_X, self.screen_height - PLAYER_SPAWN_FROM_BOTTOM)
    }
}
