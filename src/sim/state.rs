//! Game state and session commands
//!
//! Everything a running session needs lives here, including the RNG stream.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::events::GameEvent;
use super::kinematics::PieceKind;
use super::piece::Piece;
use super::player::Player;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ticking suspended, state kept
    Paused,
    /// Player hit a piece; terminal until restart
    GameOver,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG stream (keeps running across restarts)
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    /// Live pieces, in spawn (id) order
    pub pieces: Vec<Piece>,
    pub score: u32,
    /// Ticks since the last spawn
    pub spawn_timer: u32,
    /// Ticks simulated this session
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        log::info!("New session with seed {}", seed);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            player: Player::default(),
            pieces: Vec::new(),
            score: 0,
            spawn_timer: 0,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Current difficulty scalar
    pub fn speed_multiplier(&self) -> f32 {
        super::tick::speed_multiplier(self.score)
    }

    /// Jump command. Only honored during active play.
    pub fn jump(&mut self) -> Option<GameEvent> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        self.player.jump();
        Some(GameEvent::Jumped)
    }

    /// Pause toggle. Ignored once the run is over.
    pub fn toggle_pause(&mut self) -> Option<GameEvent> {
        match self.phase {
            GamePhase::Playing => {
                self.phase = GamePhase::Paused;
                Some(GameEvent::Paused)
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Playing;
                Some(GameEvent::Resumed)
            }
            GamePhase::GameOver => None,
        }
    }

    /// Start a fresh run after game over.
    ///
    /// Seed and RNG stream carry over, so consecutive runs differ.
    pub fn restart(&mut self) -> Option<GameEvent> {
        if self.phase != GamePhase::GameOver {
            return None;
        }
        log::info!("Restarting after score {}", self.score);
        self.reset_session();
        Some(GameEvent::Restarted)
    }

    /// Start a fresh run from any phase, keeping the RNG stream
    pub fn reset_session(&mut self) {
        self.player = Player::default();
        self.pieces.clear();
        self.score = 0;
        self.spawn_timer = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
    }

    /// Spawn a random piece just off the right edge
    pub fn spawn_piece(&mut self) -> &Piece {
        let kind = PieceKind::random(&mut self.rng);
        let top = (ARENA_HEIGHT - SPAWN_Y_MARGIN).min(crate::max_y(kind.size()));
        let y = self.rng.random_range(SPAWN_Y_MARGIN..=top);
        let id = self.next_entity_id();
        let piece = Piece::spawn(id, kind, Vec2::new(SPAWN_X, y), &mut self.rng);
        log::debug!(
            "Spawned {} #{} at y={:.1} moving like a {}",
            kind.name(),
            id,
            y,
            piece.active_kind().name()
        );
        self.pieces.push(piece);
        &self.pieces[self.pieces.len() - 1]
    }
}
