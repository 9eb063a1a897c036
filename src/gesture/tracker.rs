//! Hand trackers that need no camera
//!
//! - [`ReplayTracker`] plays back a fixed list of frames (tests, recordings)
//! - [`SyntheticTracker`] generates plausible hand poses from a seeded RNG
//!   (headless runs, soak testing)

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{
    CaptureError, Gesture, Hand, HandTracker, INDEX_MCP, INDEX_PIP, INDEX_TIP, PINKY_MCP, WRIST,
};
use crate::error::GameError;

/// Plays back recorded capture results in order. Once exhausted every
/// capture reports no hand.
#[derive(Debug, Clone, Default)]
pub struct ReplayTracker {
    frames: VecDeque<Result<Vec<Hand>, CaptureError>>,
    consumed: usize,
    open_error: Option<String>,
    released: bool,
}

impl ReplayTracker {
    pub fn new(frames: Vec<Result<Vec<Hand>, CaptureError>>) -> Self {
        Self {
            frames: frames.into(),
            ..Default::default()
        }
    }

    /// A tracker whose device can never be opened
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            open_error: Some(reason.into()),
            ..Default::default()
        }
    }

    /// Frames read so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl HandTracker for ReplayTracker {
    fn open(&mut self) -> Result<(), GameError> {
        match &self.open_error {
            Some(reason) => Err(GameError::TrackerUnavailable(reason.clone())),
            None => Ok(()),
        }
    }

    fn capture(&mut self) -> Result<Vec<Hand>, CaptureError> {
        self.consumed += 1;
        self.frames.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }

    fn release(&mut self) {
        self.released = true;
    }
}

/// Build a single hand posed to produce `gesture`, centred at `center`
pub fn posed_hand(gesture: Gesture, center: Vec2) -> Hand {
    let mut hand = Hand::default();
    let palm = 0.08;

    // Neutral: wrist between the palm bases, index finger curled
    hand.landmarks[WRIST] = center + Vec2::new(0.0, palm);
    hand.landmarks[PINKY_MCP] = center + Vec2::new(-palm, 0.0);
    hand.landmarks[INDEX_MCP] = center + Vec2::new(palm, 0.0);
    hand.landmarks[INDEX_PIP] = center + Vec2::new(palm, -0.04);
    hand.landmarks[INDEX_TIP] = center + Vec2::new(palm, -0.02);

    match gesture {
        Gesture::MoveLeft => hand.landmarks[WRIST].x = center.x - 2.0 * palm,
        Gesture::MoveRight => hand.landmarks[WRIST].x = center.x + 2.0 * palm,
        Gesture::Jump => hand.landmarks[INDEX_TIP].y = center.y - 0.12,
        Gesture::None => {}
    }
    hand
}

/// Deterministic pseudo-random hand poses
#[derive(Debug, Clone)]
pub struct SyntheticTracker {
    rng: Pcg32,
    /// Chance a capture finds no hand
    pub miss_rate: f64,
    /// Chance a capture fails outright
    pub drop_rate: f64,
    /// Relative weights for MoveLeft, MoveRight, Jump, None
    pub weights: [u32; 4],
}

impl SyntheticTracker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            miss_rate: 0.1,
            drop_rate: 0.01,
            weights: [2, 5, 2, 3],
        }
    }

    fn pick_gesture(&mut self) -> Gesture {
        let total: u32 = self.weights.iter().sum();
        if total == 0 {
            return Gesture::None;
        }
        let mut roll = self.rng.random_range(0..total);
        let gestures = [Gesture::MoveLeft, Gesture::MoveRight, Gesture::Jump, Gesture::None];
        for (gesture, weight) in gestures.into_iter().zip(self.weights) {
            if roll < weight {
                return gesture;
            }
            roll -= weight;
        }
        Gesture::None
    }
}

impl HandTracker for SyntheticTracker {
    fn capture(&mut self) -> Result<Vec<Hand>, CaptureError> {
        if self.rng.random_bool(self.drop_rate.clamp(0.0, 1.0)) {
            return Err(CaptureError("synthetic frame drop".into()));
        }
        if self.rng.random_bool(self.miss_rate.clamp(0.0, 1.0)) {
            return Ok(Vec::new());
        }

        let gesture = self.pick_gesture();
        let center = Vec2::new(
            self.rng.random_range(0.25..0.75),
            self.rng.random_range(0.3..0.7),
        );
        Ok(vec![posed_hand(gesture, center)])
    }
}
