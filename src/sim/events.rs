//! Events emitted by the simulation for audio and HUD collaborators

use serde::{Deserialize, Serialize};

use super::kinematics::PieceKind;

/// Why a piece was worth a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreReason {
    /// Scrolled fully off the left edge
    PassedLeft,
    /// Lived past the maximum age
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Paused,
    Resumed,
    Restarted,
    Spawned { id: u32, kind: PieceKind },
    Scored { id: u32, kind: PieceKind, reason: ScoreReason },
    /// Removed without scoring (overshot to the right)
    Discarded { id: u32 },
    /// The player hit a piece; the run is over
    Collided { id: u32, kind: PieceKind, score: u32 },
}
