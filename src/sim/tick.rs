//! Fixed timestep simulation tick
//!
//! Advances a session by exactly one step. Terminal checks run against the
//! positions left by the previous tick, before anything moves, so a contact
//! created by this tick's movement ends the session on the next one.

use super::collision::overlaps_any;
use super::state::{GameOutcome, Session};
use crate::gesture::Gesture;
use crate::settings::Physics;

/// Advance the session by one tick and return the resulting outcome
pub fn tick(session: &mut Session, gesture: Gesture, physics: &Physics) -> GameOutcome {
    // Terminal states are final
    if session.outcome.is_terminal() {
        return session.outcome;
    }

    let player_rect = session.player.rect();

    if session
        .enemies
        .iter()
        .any(|enemy| player_rect.intersects(&enemy.rect()))
    {
        log::info!("Player hit an enemy at tick {}", session.time_ticks);
        session.outcome = GameOutcome::Lost;
        return session.outcome;
    }

    if overlaps_any(&player_rect, session.world.exits().iter().map(|x| &x.rect)) {
        log::info!("Player reached the exit at tick {}", session.time_ticks);
        session.outcome = GameOutcome::Won;
        return session.outcome;
    }

    session.time_ticks += 1;

    let landed = session
        .player
        .update(gesture, session.world.platforms(), session.bounds, physics);
    log::trace!(
        "tick {}: {:?} pos={} vy={} grounded={}",
        session.time_ticks,
        gesture,
        session.player.pos,
        session.player.fall_speed,
        landed
    );

    for enemy in &mut session.enemies {
        enemy.advance();
    }

    session.outcome
}
