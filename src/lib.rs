//! Flappy Chess - dodge chess pieces on a jetpack
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, pieces, collisions, scoring)
//! - `settings`: Headless driver configuration
//! - `autopilot`: Demo-mode pilot that plays the game
//! - `runner`: Session driver used by the binary

pub mod autopilot;
pub mod runner;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_SIZE: f32 = 60.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a jump (negative = upward)
    pub const JUMP_IMPULSE: f32 = -8.0;
    /// Flight animation: frames in the sheet, ticks per frame
    pub const PLAYER_FRAMES: usize = 4;
    pub const PLAYER_FRAME_TICKS: u32 = 8;

    /// Piece sprite sizes
    pub const PIECE_SIZE: f32 = 50.0;
    pub const KING_SIZE: f32 = 70.0;

    /// Hitboxes are this fraction of the sprite, centered
    pub const HITBOX_SCALE: f32 = 0.8;

    /// Spawning
    pub const SPAWN_X: f32 = ARENA_WIDTH + 50.0;
    pub const SPAWN_Y_MARGIN: f32 = 50.0;
    pub const SPAWN_DELAY_TICKS: u32 = 90;
    pub const MAX_PIECES: usize = 5;

    /// Removal thresholds
    pub const DESPAWN_LEFT_X: f32 = -150.0;
    pub const DISCARD_RIGHT_X: f32 = ARENA_WIDTH + 200.0;
    /// 10 seconds at 60 Hz
    pub const MAX_PIECE_AGE: u32 = 600;

    /// Difficulty ramp: +0.1 speed every 10 points, capped
    pub const SPEED_STEP_POINTS: u32 = 10;
    pub const SPEED_STEP: f32 = 0.1;
    pub const MAX_SPEED_MULTIPLIER: f32 = 2.0;
}

/// Largest y an entity of the given height may occupy
#[inline]
pub fn max_y(height: f32) -> f32 {
    consts::ARENA_HEIGHT - height
}

/// Random vertical direction: +1 (down) or -1 (up)
#[inline]
pub fn random_sign<R: rand::Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}
