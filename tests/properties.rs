//! Property tests for the simulation invariants

use glam::Vec2;
use proptest::prelude::*;

use gesture_platformer::consts::*;
use gesture_platformer::gesture::{GestureClassifier, ReplayTracker};
use gesture_platformer::sim::{GameOutcome, GridMetrics, Player, Session, World, default_grid, tick};
use gesture_platformer::{Gesture, Physics, Settings};

fn gesture() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        Just(Gesture::MoveLeft),
        Just(Gesture::MoveRight),
        Just(Gesture::Jump),
        Just(Gesture::None),
    ]
}

const SCREEN: Vec2 = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);

proptest! {
    #[test]
    fn player_stays_on_screen(inputs in prop::collection::vec(gesture(), 1..400)) {
        let world = World::build(&default_grid(), GridMetrics::default());
        let physics = Physics::default();
        let mut player = Player::new(Vec2::new(PLAYER_SPAWN_X, SCREEN_HEIGHT - PLAYER_SPAWN_FROM_BOTTOM));

        for g in inputs {
            player.update(g, world.platforms(), SCREEN, &physics);
            prop_assert!(player.pos.x >= 0.0);
            prop_assert!(player.pos.x <= SCREEN_WIDTH - PLAYER_WIDTH);
            prop_assert!(player.rect().bottom() <= SCREEN_HEIGHT);
        }
    }

    #[test]
    fn grounded_means_at_rest(inputs in prop::collection::vec(gesture(), 1..400)) {
        let world = World::build(&default_grid(), GridMetrics::default());
        let physics = Physics::default();
        let mut player = Player::new(Vec2::new(PLAYER_SPAWN_X, SCREEN_HEIGHT - PLAYER_SPAWN_FROM_BOTTOM));

        for g in inputs {
            let landed = player.update(g, world.platforms(), SCREEN, &physics);
            prop_assert_eq!(landed, player.is_grounded);
            if player.is_grounded {
                prop_assert_eq!(player.fall_speed, 0.0);
                prop_assert!(!player.is_jumping);
            }
        }
    }

    #[test]
    fn free_fall_is_linear_in_velocity(v0 in -5.0f32..5.0, ticks in 1usize..15) {
        let physics = Physics::default();
        let mut player = Player::new(Vec2::new(400.0, 100.0));
        player.fall_speed = v0;

        for _ in 0..ticks {
            player.update(Gesture::None, &[], SCREEN, &physics);
        }

        let expected = v0 + ticks as f32 * physics.gravity;
        prop_assert!((player.fall_speed - expected).abs() < 1e-3);
    }

    #[test]
    fn airborne_jump_is_noop(v0 in -10.0f32..10.0, y in 0.0f32..300.0) {
        let physics = Physics::default();
        let mut jumped = Player::new(Vec2::new(400.0, y));
        jumped.fall_speed = v0;
        let mut idle = jumped.clone();

        jumped.update(Gesture::Jump, &[], SCREEN, &physics);
        idle.update(Gesture::None, &[], SCREEN, &physics);

        prop_assert_eq!(jumped, idle);
    }

    #[test]
    fn throttle_samples_at_most_once_per_window(calls in 3usize..60) {
        let mut classifier = GestureClassifier::new(ReplayTracker::default(), 3);
        let mut sampled = Vec::with_capacity(calls);

        for _ in 0..calls {
            let before = classifier.samples();
            classifier.poll();
            sampled.push(classifier.samples() - before);
        }

        for window in sampled.windows(3) {
            prop_assert!(window.iter().sum::<u64>() <= 1);
        }
    }

    #[test]
    fn sessions_replay_identically(inputs in prop::collection::vec(gesture(), 1..300)) {
        let settings = Settings::default();
        let mut a = Session::new(&default_grid(), &settings);
        let mut b = Session::new(&default_grid(), &settings);

        for g in inputs {
            let oa = tick(&mut a, g, &settings.physics);
            let ob = tick(&mut b, g, &settings.physics);
            prop_assert_eq!(oa, ob);
        }
        prop_assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn terminal_session_stops_ticking() {
    let settings = Settings::default();
    let mut session = Session::new(&default_grid(), &settings);
    session.player.pos = session.world.exits()[0].rect.pos;

    assert_eq!(tick(&mut session, Gesture::None, &settings.physics), GameOutcome::Won);
    let frozen = session.snapshot();
    for _ in 0..10 {
        tick(&mut session, Gesture::MoveRight, &settings.physics);
    }
    assert_eq!(session.snapshot(), frozen);
}
