//! Chess-piece obstacles
//!
//! A piece owns its position and motion state and advances itself once per tick.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Hitbox;
use super::kinematics::{self, Motion, Pace, PieceKind, QUEEN_REROLL_CHANCE};

/// Sprite colour (cosmetic only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceColor {
    White,
    Black,
}

/// How a piece picks its motion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Behavior {
    /// The piece moves by its own kind's rule for its whole life
    Fixed(Motion),
    /// The piece borrows another kind's rule and may switch mid-flight (Queen)
    Composite { delegate: PieceKind, motion: Motion },
}

impl Behavior {
    /// Roll the behavior for a freshly spawned piece
    pub fn roll<R: Rng + ?Sized>(kind: PieceKind, rng: &mut R) -> Self {
        match kind {
            // A Queen's first delegate uses design speeds; later re-rolls are slowed.
            PieceKind::Queen => {
                let (delegate, motion) = kinematics::roll_delegate(Pace::Design, rng);
                Behavior::Composite { delegate, motion }
            }
            _ => Behavior::Fixed(kinematics::roll_motion(kind, Pace::Slowed, rng)),
        }
    }

    /// The motion rule active right now
    pub fn motion(&self) -> &Motion {
        match self {
            Behavior::Fixed(motion) | Behavior::Composite { motion, .. } => motion,
        }
    }
}

/// A chess-piece obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Piece {
    pub id: u32,
    pub kind: PieceKind,
    pub color: PieceColor,
    /// Top-left corner of the sprite
    pub pos: Vec2,
    /// Sprite edge length
    pub size: f32,
    /// +1 moving down, -1 moving up
    pub vertical_dir: f32,
    pub behavior: Behavior,
    /// Ticks alive
    pub age: u32,
}

impl Piece {
    /// Create a piece with the given behavior (no randomness involved)
    pub fn new(id: u32, kind: PieceKind, pos: Vec2, behavior: Behavior) -> Self {
        Self {
            id,
            kind,
            color: PieceColor::White,
            pos,
            size: kind.size(),
            vertical_dir: 1.0,
            behavior,
            age: 0,
        }
    }

    /// Spawn a piece, rolling colour, direction and motion from `rng`
    pub fn spawn<R: Rng + ?Sized>(id: u32, kind: PieceKind, pos: Vec2, rng: &mut R) -> Self {
        let color = if rng.random_bool(0.5) {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        let behavior = Behavior::roll(kind, rng);
        let vertical_dir = crate::random_sign(rng);
        Self {
            color,
            vertical_dir,
            ..Self::new(id, kind, pos, behavior)
        }
    }

    /// Kind whose movement is currently in use
    pub fn active_kind(&self) -> PieceKind {
        match self.behavior {
            Behavior::Fixed(_) => self.kind,
            Behavior::Composite { delegate, .. } => delegate,
        }
    }

    /// Lowest legal y for this piece
    #[inline]
    pub fn max_y(&self) -> f32 {
        crate::max_y(self.size)
    }

    /// Collision rectangle
    pub fn hitbox(&self) -> Hitbox {
        Hitbox::inset(self.pos, Vec2::splat(self.size))
    }

    /// Advance one tick with all speeds scaled by `speed_multiplier`
    pub fn advance<R: Rng + ?Sized>(&mut self, speed_multiplier: f32, rng: &mut R) {
        self.age += 1;
        let max_y = self.max_y();

        let motion = match &mut self.behavior {
            Behavior::Fixed(motion) | Behavior::Composite { motion, .. } => motion,
        };
        // Bounce is decided by the motion that moved the piece this tick
        let leaping = motion.is_leap();
        match *motion {
            Motion::Drift { speed } => {
                self.pos.x -= speed * speed_multiplier;
            }
            Motion::Oscillate { drift, vertical } => {
                self.pos.x -= drift * speed_multiplier;
                self.pos.y += vertical * speed_multiplier * self.vertical_dir;
            }
            Motion::Diagonal { speed } => {
                self.pos.x -= speed * speed_multiplier;
                self.pos.y += speed * speed_multiplier * self.vertical_dir;
            }
            Motion::Leap(ref mut leap) => {
                leap.step(
                    &mut self.pos,
                    &mut self.vertical_dir,
                    max_y,
                    speed_multiplier,
                    rng,
                );
            }
        }

        if let Behavior::Composite { delegate, motion } = &mut self.behavior {
            if rng.random_bool(QUEEN_REROLL_CHANCE) {
                let (next, next_motion) = kinematics::roll_delegate(Pace::Slowed, rng);
                log::debug!(
                    "Piece {} ({}) now moves like a {}",
                    self.id,
                    self.kind.name(),
                    next.name()
                );
                *delegate = next;
                *motion = next_motion;
            }
        }

        // Leaping pieces keep themselves in bounds through target clamping
        if !leaping {
            self.bounce(max_y);
        }
    }

    /// Reflect vertical direction and clamp at the top and bottom edges
    fn bounce(&mut self, max_y: f32) {
        if self.pos.y <= 0.0 {
            self.pos.y = 0.0;
            self.vertical_dir = 1.0;
        } else if self.pos.y >= max_y {
            self.pos.y = max_y;
            self.vertical_dir = -1.0;
        }
    }
}
