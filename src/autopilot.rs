//! Demo-mode pilot
//!
//! Picks the vertical lane with the most clearance from pieces ahead of the player
//! and fires the jetpack whenever the player is about to sink below it.

use crate::consts::*;
use crate::sim::{GamePhase, GameState, Hitbox, TickInput};

/// How far ahead of the player pieces are considered (pixels)
const LOOKAHEAD: f32 = 260.0;
/// Spacing between candidate lanes
const LANE_STEP: f32 = 10.0;
/// Clearance beyond this doesn't make a lane any safer
const MAX_CLEARANCE: f32 = 150.0;
/// Preference for lanes close to the current height
const TRAVEL_PENALTY: f32 = 0.1;
/// Ticks of free fall to predict before deciding to jump
const PREDICT_TICKS: f32 = 3.0;

/// Decide this tick's input for the given state
pub fn autopilot_input(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    if state.phase != GamePhase::Playing {
        return input;
    }

    let player = &state.player;
    let target = safest_lane(state);

    // Where we'd be in a few ticks without firing
    let predicted = player.pos.y
        + player.vel * PREDICT_TICKS
        + GRAVITY * PREDICT_TICKS * (PREDICT_TICKS + 1.0) / 2.0;

    // Only fire once the previous burst has mostly worn off
    if predicted > target && player.vel > JUMP_IMPULSE / 4.0 {
        input.jump = true;
    }
    input
}

/// Top y of the lane the player should aim for
pub fn safest_lane(state: &GameState) -> f32 {
    let player = &state.player;
    let max_y = crate::max_y(player.size);
    let left = player.pos.x - player.size;
    let right = player.pos.x + player.size + LOOKAHEAD;

    let threats: Vec<Hitbox> = state
        .pieces
        .iter()
        .filter(|p| p.pos.x + p.size > left && p.pos.x < right)
        .map(|p| p.hitbox())
        .collect();

    if threats.is_empty() {
        return max_y / 2.0;
    }

    let mut best_lane = player.pos.y;
    let mut best_score = f32::NEG_INFINITY;
    let mut lane = 0.0;
    while lane <= max_y {
        let clearance = threats
            .iter()
            .map(|hb| vertical_gap(lane, lane + player.size, hb))
            .fold(MAX_CLEARANCE, f32::min);
        let score = clearance - TRAVEL_PENALTY * (lane - player.pos.y).abs();
        if score > best_score {
            best_score = score;
            best_lane = lane;
        }
        lane += LANE_STEP;
    }
    best_lane
}

/// Vertical distance between a lane and a hitbox (negative when they overlap)
fn vertical_gap(top: f32, bottom: f32, hb: &Hitbox) -> f32 {
    (hb.min.y - bottom).max(top - hb.max().y)
}
