//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod events;
pub mod kinematics;
pub mod piece;
pub mod player;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use clock::FixedStep;
pub use collision::Hitbox;
pub use events::{GameEvent, ScoreReason};
pub use kinematics::{Leap, LeapPhase, Motion, Pace, PieceKind};
pub use piece::{Behavior, Piece, PieceColor};
pub use player::Player;
pub use snapshot::{PieceView, PlayerView, Snapshot};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, speed_multiplier, tick};
