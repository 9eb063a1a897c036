//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` = one frame)
//! - Stable iteration order (level scan order)
//! - No rendering, camera or platform dependencies

pub mod collision;
pub mod enemy;
pub mod level;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::{Aabb, overlaps_any};
pub use enemy::Enemy;
pub use level::{DEFAULT_LEVEL, ExitZone, GridMetrics, Platform, Tile, World, default_grid, load_grid};
pub use player::{Facing, Player};
pub use state::{GameOutcome, Session, Snapshot, Sprite, SpriteKind, TileView};
pub use tick::tick;
