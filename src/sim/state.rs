//! Session state and render snapshots
//!
//! A [`Session`] owns everything that changes during one play-through. It is
//! rebuilt from scratch on restart; nothing carries over.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::enemy::Enemy;
use super::level::{GridMetrics, Platform, Tile, World};
use super::player::{Facing, Player};
use crate::settings::Settings;

/// Where the current session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameOutcome {
    #[default]
    Playing,
    /// Touched an enemy
    Lost,
    /// Reached an exit
    Won,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::Playing)
    }
}

/// One play-through: the level, the player and the enemies
#[derive(Debug, Clone)]
pub struct Session {
    pub world: World,
    pub player: Player,
    /// In level scan order
    pub enemies: Vec<Enemy>,
    pub outcome: GameOutcome,
    /// Ticks simulated so far
    pub time_ticks: u64,
    /// Screen size in pixels
    pub bounds: Vec2,
}

impl Session {
    /// Fresh session on the given level grid
    pub fn new(grid: &[Vec<u8>], settings: &Settings) -> Self {
        let metrics = GridMetrics {
            tile_size: settings.tile_size,
            enemy_spawn_pitch: settings.enemy_spawn_pitch,
        };
        let world = World::build(grid, metrics);
        let enemies = world.enemy_spawns().iter().copied().map(Enemy::new).collect();

        Self {
            world,
            player: Player::new(settings.player_spawn()),
            enemies,
            outcome: GameOutcome::Playing,
            time_ticks: 0,
            bounds: Vec2::new(settings.screen_width, settings.screen_height),
        }
    }

    /// Render-ready view of the current state
    pub fn snapshot(&self) -> Snapshot {
        let mut sprites = Vec::with_capacity(1 + self.enemies.len() + self.world.exits().len());
        sprites.push(Sprite {
            kind: SpriteKind::Player {
                facing: self.player.facing,
                frame: self.player.frame,
            },
            bounds: self.player.rect(),
        });
        sprites.extend(self.enemies.iter().map(|enemy| Sprite {
            kind: SpriteKind::Enemy,
            bounds: enemy.rect(),
        }));
        sprites.extend(self.world.exits().iter().map(|exit| Sprite {
            kind: SpriteKind::Exit,
            bounds: exit.rect,
        }));

        Snapshot {
            tick: self.time_ticks,
            outcome: self.outcome,
            sprites,
            tiles: self.world.platforms().iter().map(TileView::from).collect(),
        }
    }
}

/// What a sprite is and how to draw it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpriteKind {
    Player { facing: Facing, frame: u32 },
    Enemy,
    Exit,
}

/// A drawable entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub bounds: Aabb,
}

/// A static level tile (renderers may cache these; they never change)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileView {
    pub tile: Tile,
    pub pos: Vec2,
}

impl From<&Platform> for TileView {
    fn from(platform: &Platform) -> Self {
        Self {
            tile: platform.tile,
            pos: platform.rect.pos,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub outcome: GameOutcome,
    /// Player first, then enemies, then exits
    pub sprites: Vec<Sprite>,
    pub tiles: Vec<TileView>,
}

impl Snapshot {
    pub fn player(&self) -> Option<&Sprite> {
        self.sprites
            .iter()
            .find(|s| matches!(s.kind, SpriteKind::Player { .. }))
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter().filter(|s| s.kind == SpriteKind::Enemy)
    }

    pub fn exits(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter().filter(|s| s.kind == SpriteKind::Exit)
    }
}
