//! Fixed-rate game loop
//!
//! Owns the gesture classifier and the current [`Session`], and drives one
//! simulation tick per frame until the session ends or the frontend asks to
//! quit. Everything runs on the calling thread; gesture capture blocks.

use std::thread;
use std::time::{Duration, Instant};

use crate::error::GameError;
use crate::gesture::{GestureClassifier, HandTracker};
use crate::settings::Settings;
use crate::sim::{GameOutcome, Session, Snapshot, tick};

/// Display side of the game (renderer + window events)
pub trait Frontend {
    /// Draw one frame
    fn present(&mut self, snapshot: &Snapshot);

    /// Polled once per tick, before the tick runs
    fn quit_requested(&mut self) -> bool {
        false
    }
}

/// Why [`GameLoop::run`] returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The session reached a terminal outcome
    Finished(GameOutcome),
    /// The frontend asked to quit
    Quit,
}

/// Blocking frame limiter
#[derive(Debug)]
pub struct FrameClock {
    period: Option<Duration>,
    last: Option<Instant>,
}

impl FrameClock {
    /// `rate` ticks per second; 0 disables limiting
    pub fn new(rate: u32) -> Self {
        Self {
            period: (rate > 0).then(|| Duration::from_secs(1) / rate),
            last: None,
        }
    }

    /// Sleep until one period has passed since the previous call
    pub fn wait(&mut self) {
        if let (Some(period), Some(last)) = (self.period, self.last) {
            let elapsed = last.elapsed();
            if elapsed < period {
                thread::sleep(period - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

/// The main loop: gesture in, simulation step, snapshot out
pub struct GameLoop<T> {
    settings: Settings,
    grid: Vec<Vec<u8>>,
    classifier: GestureClassifier<T>,
    session: Session,
}

impl<T: HandTracker> GameLoop<T> {
    /// Open the tracker and build the first session. Fails without creating a
    /// session if the tracker cannot be opened.
    pub fn start(settings: Settings, grid: Vec<Vec<u8>>, mut tracker: T) -> Result<Self, GameError> {
        tracker.open()?;
        let classifier = GestureClassifier::new(tracker, settings.gesture_throttle);
        let session = Session::new(&grid, &settings);
        log::info!(
            "Session started: {} platforms, {} enemies, gesture throttle {}",
            session.world.platforms().len(),
            session.enemies.len(),
            classifier.throttle()
        );

        Ok(Self {
            settings,
            grid,
            classifier,
            session,
        })
    }

    /// Discard the current session and start over on the same level
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.classifier.tracker_mut().open()?;
        self.classifier.reset();
        self.session = Session::new(&self.grid, &self.settings);
        log::info!("Session restarted");
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn classifier(&self) -> &GestureClassifier<T> {
        &self.classifier
    }

    /// Run exactly one tick and return the frame to draw
    pub fn step(&mut self) -> Snapshot {
        let gesture = self.classifier.poll();
        tick(&mut self.session, gesture, &self.settings.physics);
        self.session.snapshot()
    }

    /// Run at the configured tick rate until the session ends or the
    /// frontend quits. The tracker is released before returning.
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> StopReason {
        let mut clock = FrameClock::new(self.settings.tick_rate);

        let reason = loop {
            clock.wait();

            if frontend.quit_requested() {
                break StopReason::Quit;
            }

            let snapshot = self.step();
            frontend.present(&snapshot);

            if snapshot.outcome.is_terminal() {
                break StopReason::Finished(snapshot.outcome);
            }
        };

        log::info!(
            "Game loop stopped after {} ticks: {:?}",
            self.session.time_ticks,
            reason
        );
        self.classifier.tracker_mut().release();
        reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::ReplayTracker;
    use crate::gesture::tracker::posed_hand;
    use crate::gesture::Gesture;
    use crate::sim::{Enemy, default_grid};
    use glam::Vec2;

    /// Records frames and quits after a fixed count
    #[derive(Default)]
    struct RecordingFrontend {
        frames: Vec<Snapshot>,
        quit_after: Option<usize>,
        quit_polls: usize,
    }

    impl Frontend for RecordingFrontend {
        fn present(&mut self, snapshot: &Snapshot) {
            self.frames.push(snapshot.clone());
        }

        fn quit_requested(&mut self) -> bool {
            self.quit_polls += 1;
            self.quit_after.is_some_and(|n| self.frames.len() >= n)
        }
    }

    fn unlimited() -> Settings {
        Settings {
            tick_rate: 0,
            ..Settings::default()
        }
    }

    #[test]
    fn test_start_fails_without_tracker() {
        let result = GameLoop::start(unlimited(), default_grid(), ReplayTracker::unavailable("no camera"));
        assert!(matches!(result, Err(GameError::TrackerUnavailable(_))));
    }

    #[test]
    fn test_quit_stops_before_next_tick() {
        let mut game = GameLoop::start(unlimited(), default_grid(), ReplayTracker::default()).unwrap();
        let mut frontend = RecordingFrontend {
            quit_after: Some(5),
            ..Default::default()
        };

        let reason = game.run(&mut frontend);

        assert_eq!(reason, StopReason::Quit);
        assert_eq!(frontend.frames.len(), 5);
        assert_eq!(frontend.quit_polls, 6);
        assert_eq!(game.session().time_ticks, 5);
        assert!(game.classifier().tracker().is_released());
    }

    #[test]
    fn test_run_until_lost() {
        let mut game = GameLoop::start(unlimited(), vec![vec![0]], ReplayTracker::default()).unwrap();
        let spawn = game.session().player.pos;
        game.session.enemies.push(Enemy::new(spawn + Vec2::new(0.0, 30.0)));
        let mut frontend = RecordingFrontend::default();

        let reason = game.run(&mut frontend);

        assert_eq!(reason, StopReason::Finished(GameOutcome::Lost));
        assert_eq!(frontend.frames.len(), 1);
        assert_eq!(frontend.frames[0].outcome, GameOutcome::Lost);
        assert_eq!(frontend.frames[0].tick, 0);
    }

    #[test]
    fn test_gestures_drive_player() {
        let right = Ok(vec![posed_hand(Gesture::MoveRight, Vec2::splat(0.5))]);
        let tracker = ReplayTracker::new(vec![right.clone(), right]);
        let mut game = GameLoop::start(unlimited(), default_grid(), tracker).unwrap();
        let x0 = game.session().player.pos.x;

        // Throttle 3: only ticks 3 and 6 see a frame
        for _ in 0..6 {
            game.step();
        }

        assert_eq!(game.session().player.pos.x, x0 + 10.0);
        assert_eq!(game.classifier().tracker().consumed(), 2);
    }

    #[test]
    fn test_restart_builds_fresh_session() {
        let mut game = GameLoop::start(unlimited(), default_grid(), ReplayTracker::default()).unwrap();
        for _ in 0..30 {
            game.step();
        }
        assert_eq!(game.session().time_ticks, 30);

        game.restart().unwrap();

        assert_eq!(game.session().time_ticks, 0);
        assert_eq!(game.session().outcome, GameOutcome::Playing);
        assert_eq!(game.session().player.pos, game.settings().player_spawn());
        assert_eq!(game.session().enemies[0].pos, game.session().world.enemy_spawns()[0]);
    }

    #[test]
    fn test_frame_clock_limits_rate() {
        let mut clock = FrameClock::new(100);
        let start = Instant::now();
        for _ in 0..4 {
            clock.wait();
        }
        // Three full periods between four waits
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_unlimited_clock_never_sleeps() {
        let mut clock = FrameClock::new(0);
        let start = Instant::now();
        for _ in 0..1000 {
            clock.wait();
        }
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
