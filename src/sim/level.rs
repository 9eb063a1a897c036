//! Tile grid parsing
//!
//! A level is a row-major grid of small tile codes. Building a [`World`]
//! turns it into static colliders and enemy spawn points; the world never
//! changes afterwards.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::error::GameError;

/// Tile codes found in a level grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Empty,
    Dirt,
    Grass,
    EnemySpawn,
    Exit,
}

impl Tile {
    /// Decode a grid value. Unknown codes read as empty.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Tile::Dirt,
            2 => Tile::Grass,
            3 => Tile::EnemySpawn,
            4 => Tile::Exit,
            _ => Tile::Empty,
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, Tile::Dirt | Tile::Grass)
    }
}

/// A solid one-tile platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Dirt or grass (render hint only)
    pub tile: Tile,
    pub rect: Aabb,
}

/// A door tile; touching it wins the level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExitZone {
    pub rect: Aabb,
}

/// Level geometry used to turn grid cells into pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub tile_size: f32,
    pub enemy_spawn_pitch: f32,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            enemy_spawn_pitch: TILE_SIZE,
        }
    }
}

/// Static level data derived from a tile grid
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    platforms: Vec<Platform>,
    enemy_spawns: Vec<Vec2>,
    exits: Vec<ExitZone>,
}

impl World {
    /// Scan the grid in row-major order and derive colliders
    pub fn build(grid: &[Vec<u8>], metrics: GridMetrics) -> Self {
        let mut platforms = Vec::new();
        let mut enemy_spawns = Vec::new();
        let mut exits = Vec::new();

        for (row, cells) in grid.iter().enumerate() {
            for (col, &code) in cells.iter().enumerate() {
                let (col, row) = (col as f32, row as f32);
                let cell = Vec2::new(col, row) * metrics.tile_size;

                match Tile::from_code(code) {
                    tile if tile.is_solid() => platforms.push(Platform {
                        tile,
                        rect: Aabb::from_pos_size(cell, Vec2::splat(metrics.tile_size)),
                    }),
                    Tile::EnemySpawn => {
                        enemy_spawns.push(Vec2::new(col, row) * metrics.enemy_spawn_pitch);
                    }
                    Tile::Exit => exits.push(ExitZone {
                        rect: Aabb::from_pos_size(cell, Vec2::new(EXIT_WIDTH, EXIT_HEIGHT)),
                    }),
                    _ => {
                        if code != 0 {
                            warn_unknown_tile(i64::from(code), col, row);
                        }
                    }
                }
            }
        }

        log::debug!(
            "Built world: {} platforms, {} enemies, {} exits",
            platforms.len(),
            enemy_spawns.len(),
            exits.len()
        );

        Self {
            platforms,
            enemy_spawns,
            exits,
        }
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Top-left spawn point of each enemy, in scan order
    pub fn enemy_spawns(&self) -> &[Vec2] {
        &self.enemy_spawns
    }

    pub fn exits(&self) -> &[ExitZone] {
        &self.exits
    }
}

fn warn_unknown_tile(code: i64, col: f32, row: f32) {
    log::warn!("Unknown tile code {code} at ({col}, {row}), treating as empty");
}

/// Read a level grid from a JSON file (`[[0, 1, ...], ...]`)
///
/// Any integer is accepted as a cell; codes that do not fit a tile code
/// (negative or above 255) become empty cells. Rows of different lengths are
/// accepted with a warning and built as-is: a short row simply has no tiles
/// past its end. Only unreadable files and non-integer JSON are errors.
pub fn load_grid(path: &Path) -> Result<Vec<Vec<u8>>, GameError> {
    let json = fs::read_to_string(path).map_err(|source| GameError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: Vec<Vec<i64>> = serde_json::from_str(&json).map_err(|source| GameError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let grid: Vec<Vec<u8>> = raw
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &code)| {
                    u8::try_from(code).unwrap_or_else(|_| {
                        warn_unknown_tile(code, col as f32, row as f32);
                        0
                    })
                })
                .collect()
        })
        .collect();

    if let Some(width) = grid.first().map(Vec::len) {
        if grid.iter().any(|row| row.len() != width) {
            log::warn!("Level {} has ragged rows", path.display());
        }
    }
    Ok(grid)
}

/// The built-in 18x12 level
pub const DEFAULT_LEVEL: [[u8; 18]; 12] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 1],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 2, 2, 2, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 2, 0, 0, 0, 0, 0, 2, 2, 2, 2, 2, 0, 2, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [2, 2, 0, 0, 0, 3, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 2],
    [2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2],
];

/// The built-in level as an owned grid
pub fn default_grid() -> Vec<Vec<u8>> {
    DEFAULT_LEVEL.iter().map(|row| row.to_vec()).collect()
}
