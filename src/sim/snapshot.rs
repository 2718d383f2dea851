//! Read-only view of a session for renderers and the HUD

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::kinematics::PieceKind;
use super::piece::PieceColor;
use super::state::{GamePhase, GameState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub frame: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceView {
    pub id: u32,
    pub kind: PieceKind,
    /// Kind whose movement the piece is using (differs from `kind` for Queens)
    pub moving_as: PieceKind,
    pub color: PieceColor,
    pub pos: Vec2,
    pub size: f32,
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: PlayerView,
    pub pieces: Vec<PieceView>,
    pub score: u32,
    pub speed_multiplier: f32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: PlayerView {
                pos: self.player.pos,
                frame: self.player.frame,
            },
            pieces: self
                .pieces
                .iter()
                .map(|p| PieceView {
                    id: p.id,
                    kind: p.kind,
                    moving_as: p.active_kind(),
                    color: p.color,
                    pos: p.pos,
                    size: p.size,
                })
                .collect(),
            score: self.score,
            speed_multiplier: self.speed_multiplier(),
            paused: self.phase == GamePhase::Paused,
            game_over: self.phase == GamePhase::GameOver,
        }
    }
}
