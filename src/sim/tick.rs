//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::events::{GameEvent, ScoreReason};
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Fire the jetpack (space/click)
    pub jump: bool,
    /// Pause toggle
    pub pause: bool,
    /// Start over after game over
    pub restart: bool,
}

/// Difficulty ramp: +0.1 for every 10 points, capped at 2x
pub fn speed_multiplier(score: u32) -> f32 {
    let steps = (score / SPEED_STEP_POINTS) as f32;
    (1.0 + steps * SPEED_STEP).min(MAX_SPEED_MULTIPLIER)
}

/// Advance the game state by one tick.
///
/// Commands in `input` are applied first. Returns everything that happened.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.restart {
        events.extend(state.restart());
    }
    if input.pause {
        events.extend(state.toggle_pause());
    }
    if input.jump {
        events.extend(state.jump());
    }

    // Don't tick if paused or game over
    if state.phase != GamePhase::Playing {
        return events;
    }

    state.time_ticks += 1;
    state.player.advance();

    // Spawn on a timer, limited to a handful on screen
    state.spawn_timer += 1;
    if state.spawn_timer >= SPAWN_DELAY_TICKS && state.pieces.len() < MAX_PIECES {
        state.spawn_timer = 0;
        let piece = state.spawn_piece();
        events.push(GameEvent::Spawned {
            id: piece.id,
            kind: piece.kind,
        });
    }

    let multiplier = state.speed_multiplier();
    for piece in &mut state.pieces {
        piece.advance(multiplier, &mut state.rng);
    }

    retire_pieces(state, &mut events);

    if let Some(event) = check_collisions(state) {
        events.push(event);
    }

    events
}

/// Remove pieces that left the arena or outlived their welcome
fn retire_pieces(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let mut scored = 0;
    state.pieces.retain(|piece| {
        let reason = if piece.pos.x < DESPAWN_LEFT_X {
            Some(ScoreReason::PassedLeft)
        } else if piece.pos.x > DISCARD_RIGHT_X {
            log::debug!("Discarding {} #{} (overshot right)", piece.kind.name(), piece.id);
            events.push(GameEvent::Discarded { id: piece.id });
            return false;
        } else if piece.age > MAX_PIECE_AGE {
            // Stuck pieces must not block the spawn cap forever
            Some(ScoreReason::Expired)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                log::debug!("{} #{} scored ({:?})", piece.kind.name(), piece.id, reason);
                events.push(GameEvent::Scored {
                    id: piece.id,
                    kind: piece.kind,
                    reason,
                });
                scored += 1;
                false
            }
            None => true,
        }
    });
    state.score += scored;
}

/// End the run if the player touches any piece
fn check_collisions(state: &mut GameState) -> Option<GameEvent> {
    let player_box = state.player.hitbox();
    let hit = state
        .pieces
        .iter()
        .find(|piece| player_box.overlaps(&piece.hitbox()))?;

    let event = GameEvent::Collided {
        id: hit.id,
        kind: hit.kind,
        score: state.score,
    };
    log::info!(
        "Hit by {} #{} after {} ticks, final score {}",
        hit.kind.name(),
        hit.id,
        state.time_ticks,
        state.score
    );
    state.phase = GamePhase::GameOver;
    Some(event)
}
