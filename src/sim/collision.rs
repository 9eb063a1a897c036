//! Axis-aligned bounding boxes
//!
//! Every collision in the game (player vs platform, enemy, exit) is a plain
//! rectangle overlap test in screen space (y grows downward).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (both positive)
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap: rectangles that merely share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// True if `body` overlaps any of `others`
pub fn overlaps_any<'a, I>(body: &Aabb, others: I) -> bool
where
    I: IntoIterator<Item = &'a Aabb>,
{
    others.into_iter().any(|other| body.intersects(other))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let right = Aabb::new(10.0, 0.0, 10.0, 10.0);
        let below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_overlaps_any() {
        let body = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let others = [Aabb::new(50.0, 50.0, 5.0, 5.0), Aabb::new(9.0, 9.0, 5.0, 5.0)];
        assert!(overlaps_any(&body, &others));
        assert!(!overlaps_any(&body, &others[..1]));
        assert!(!overlaps_any(&body, &[]));
    }

    #[test]
    fn test_edges() {
        let a = Aabb::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(a.left(), 10.0);
        assert_eq!(a.right(), 40.0);
        assert_eq!(a.top(), 20.0);
        assert_eq!(a.bottom(), 60.0);
    }
}
