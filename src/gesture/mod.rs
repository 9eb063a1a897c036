//! Hand-gesture input
//!
//! A [`HandTracker`] stands in for the camera + landmark model and yields
//! normalized hand landmarks. [`GestureClassifier`] throttles how often the
//! tracker is sampled and reduces each sample to one discrete [`Gesture`].
//!
//! Image coordinates: x grows to the right, y grows downward, both in [0, 1].

pub mod tracker;

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub use tracker::{ReplayTracker, SyntheticTracker};

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
/// Base of the index finger, on the thumb side of the palm
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
/// Base of the pinky, on the far side of the palm
pub const PINKY_MCP: usize = 17;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// One discrete action per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gesture {
    MoveLeft,
    MoveRight,
    Jump,
    #[default]
    None,
}

/// One detected hand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    pub landmarks: [Vec2; LANDMARK_COUNT],
}

impl Default for Hand {
    fn default() -> Self {
        Self {
            landmarks: [Vec2::ZERO; LANDMARK_COUNT],
        }
    }
}

impl Hand {
    /// Classify this hand. Rules are checked in priority order and the first
    /// match wins, even if a later rule would also match.
    pub fn classify(&self) -> Gesture {
        let wrist = self.landmarks[WRIST];
        let pinky_base = self.landmarks[PINKY_MCP];
        let thumb_base = self.landmarks[INDEX_MCP];
        let index_tip = self.landmarks[INDEX_TIP];
        let index_pip = self.landmarks[INDEX_PIP];

        if wrist.x < pinky_base.x {
            Gesture::MoveLeft
        } else if wrist.x > thumb_base.x {
            Gesture::MoveRight
        } else if index_tip.y < index_pip.y {
            // Smaller y is higher in the image: finger raised
            Gesture::Jump
        } else {
            Gesture::None
        }
    }
}

/// Classify a frame: the first hand with a non-`None` gesture decides
pub fn classify_hands(hands: &[Hand]) -> Gesture {
    hands
        .iter()
        .map(Hand::classify)
        .find(|g| *g != Gesture::None)
        .unwrap_or(Gesture::None)
}

// ============================================================================
// TRACKER BOUNDARY
// ============================================================================

/// A frame could not be read this cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureError(pub String);

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame capture failed: {}", self.0)
    }
}

impl std::error::Error for CaptureError {}

/// Source of hand landmarks (camera + landmark model)
pub trait HandTracker {
    /// Acquire the device. Called once when a session starts.
    fn open(&mut self) -> Result<(), GameError> {
        Ok(())
    }

    /// Blocking read of one frame. An empty vec means no hand was found.
    fn capture(&mut self) -> Result<Vec<Hand>, CaptureError>;

    /// Release the device. Called when the game loop ends.
    fn release(&mut self) {}
}

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Throttled gesture classifier
///
/// Only every `throttle`-th call reads a frame from the tracker; the calls in
/// between return [`Gesture::None`] without touching it. Landmark inference is
/// far more expensive than a simulation tick, so this trades input latency
/// for frame time.
#[derive(Debug)]
pub struct GestureClassifier<T> {
    tracker: T,
    throttle: u32,
    calls: u64,
    samples: u64,
}

impl<T: HandTracker> GestureClassifier<T> {
    /// `throttle` of 0 is treated as 1 (sample every call)
    pub fn new(tracker: T, throttle: u32) -> Self {
        Self {
            tracker,
            throttle: throttle.max(1),
            calls: 0,
            samples: 0,
        }
    }

    pub fn throttle(&self) -> u32 {
        self.throttle
    }

    /// Number of frames actually read from the tracker
    pub fn samples(&self) -> u64 {
        self.samples
    }

    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut T {
        &mut self.tracker
    }

    /// Restart the throttle cycle
    pub fn reset(&mut self) {
        self.calls = 0;
    }

    /// Produce this tick's gesture
    pub fn poll(&mut self) -> Gesture {
        self.calls += 1;
        if self.calls % self.throttle as u64 != 0 {
            return Gesture::None;
        }

        self.samples += 1;
        let hands = match self.tracker.capture() {
            Ok(hands) => hands,
            Err(e) => {
                log::warn!("{e}");
                return Gesture::None;
            }
        };

        let gesture = classify_hands(&hands);
        if gesture != Gesture::None {
            log::debug!("Gesture detected: {gesture:?}");
        }
        gesture
    }
}
