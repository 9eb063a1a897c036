//! Patrolling enemies
//!
//! Enemies walk back and forth on a fixed timer. Patrol ignores platforms,
//! walls and other enemies: an enemy placed at a ledge will walk off it
//! (through the air, since enemies have no gravity).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// A patrolling enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Top-left corner
    pub pos: Vec2,
    /// +1 walks right, -1 walks left
    pub direction: i32,
    /// Ticks walked in the current leg (sign flips with direction)
    pub counter: i32,
}

impl Enemy {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            direction: 1,
            counter: 0,
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(ENEMY_SIZE))
    }

    /// Advance one tick of patrol
    pub fn advance(&mut self) {
        self.pos.x += self.direction as f32;
        self.counter += 1;
        if self.counter.abs() > ENEMY_PATROL_TURN {
            self.direction = -self.direction;
            self.counter = -self.counter;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_leg_walks_right() {
        let mut enemy = Enemy::new(Vec2::new(100.0, 200.0));
        for _ in 0..50 {
            enemy.advance();
        }
        assert_eq!(enemy.pos, Vec2::new(150.0, 200.0));
        assert_eq!(enemy.direction, 1);
        assert_eq!(enemy.counter, 50);
    }

    #[test]
    fn test_turns_after_threshold() {
        let mut enemy = Enemy::new(Vec2::new(100.0, 200.0));
        for _ in 0..51 {
            enemy.advance();
        }
        assert_eq!(enemy.pos.x, 151.0);
        assert_eq!(enemy.direction, -1);
        assert_eq!(enemy.counter, -51);
    }

    #[test]
    fn test_patrol_oscillates() {
        // After the first turn the counter runs -51..=51, i.e. 102-tick legs
        let mut enemy = Enemy::new(Vec2::ZERO);
        let mut min_x = f32::MAX;
        let mut max_x = f32::MIN;
        for _ in 0..1000 {
            enemy.advance();
            min_x = min_x.min(enemy.pos.x);
            max_x = max_x.max(enemy.pos.x);
        }
        assert_eq!(max_x, 51.0);
        assert_eq!(min_x, -51.0);
        assert_eq!(enemy.pos.y, 0.0);
    }

    #[test]
    fn test_rect() {
        let enemy = Enemy::new(Vec2::new(10.0, 20.0));
        assert_eq!(enemy.rect(), Aabb::new(10.0, 20.0, 40.0, 40.0));
    }
}
