//! Per-piece motion rules
//!
//! Every piece kind maps to a motion shape and a set of speeds rolled at spawn.
//! Speeds are pixels per tick at a speed multiplier of 1.0.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Drift speed range before scaling (crosses the arena in roughly 1-4 seconds)
pub const DRIFT_SPEED_MIN: f32 = 3.5;
pub const DRIFT_SPEED_MAX: f32 = 14.0;
/// Scale applied to every rolled drift speed
pub const DRIFT_SCALE: f32 = 0.8;
/// Rooks and Kings drift at half the normal rate
pub const HALF_DRIFT: f32 = 0.5;
/// Global slowdown applied to slowed-pace parameters
pub const SLOWDOWN: f32 = 2.0 / 3.0;

/// Rook: top to bottom in about two seconds
pub const ROOK_VERTICAL_SPEED: f32 = 4.6;
/// Bishop moves at 45 degrees
pub const BISHOP_SPEED: f32 = 5.0;

/// Knight: one board square in pixels
pub const SQUARE_SIZE: f32 = 60.0;
pub const KNIGHT_VERTICAL_JUMP: f32 = 2.0 * SQUARE_SIZE;
pub const KNIGHT_HORIZONTAL_JUMP: f32 = SQUARE_SIZE;
pub const KNIGHT_JUMP_SPEED: f32 = 8.0;

/// Per-tick chance that a Queen switches to another piece's movement
pub const QUEEN_REROLL_CHANCE: f64 = 0.05;

/// Piece kinds that can be spawned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }

    /// Sprite edge length (pieces are square)
    pub fn size(&self) -> f32 {
        match self {
            PieceKind::King => KING_SIZE,
            _ => PIECE_SIZE,
        }
    }

    /// Pick a kind uniformly
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Which parameter set a roll uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// Un-slowed design speeds
    Design,
    /// Design speeds scaled by [`SLOWDOWN`]
    Slowed,
}

impl Pace {
    pub fn factor(&self) -> f32 {
        match self {
            Pace::Design => 1.0,
            Pace::Slowed => SLOWDOWN,
        }
    }
}

/// Discrete-jump sub-state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LeapPhase {
    /// Moving up or down toward `target_y`
    Vertical { target_y: f32 },
    /// Moving left toward `target_x`
    Horizontal { target_x: f32 },
}

/// Knight L-move state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Leap {
    /// Pixels per tick during either phase
    pub jump_speed: f32,
    /// None until the first vertical target is picked
    pub phase: Option<LeapPhase>,
}

impl Leap {
    pub fn new(jump_speed: f32) -> Self {
        Self {
            jump_speed,
            phase: None,
        }
    }

    /// Advance the L-move by one tick.
    ///
    /// `pos` and `vertical_dir` belong to the owning piece; `max_y` is its lowest
    /// legal y. Leftward motion only happens during the horizontal phase.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        pos: &mut glam::Vec2,
        vertical_dir: &mut f32,
        max_y: f32,
        speed_multiplier: f32,
        rng: &mut R,
    ) {
        let speed = self.jump_speed * speed_multiplier;

        let phase = match self.phase {
            Some(phase) => phase,
            None => {
                *vertical_dir = crate::random_sign(rng);
                let mut target_y = pos.y + KNIGHT_VERTICAL_JUMP * *vertical_dir;
                if target_y < 0.0 {
                    target_y = 0.0;
                    *vertical_dir = 1.0;
                } else if target_y > max_y {
                    target_y = max_y;
                    *vertical_dir = -1.0;
                }
                LeapPhase::Vertical { target_y }
            }
        };

        let next = match phase {
            LeapPhase::Vertical { target_y } => {
                if (target_y - pos.y).abs() > speed {
                    if pos.y < target_y {
                        pos.y += speed;
                    } else {
                        pos.y -= speed;
                    }
                    phase
                } else {
                    pos.y = target_y;
                    LeapPhase::Horizontal {
                        target_x: pos.x - KNIGHT_HORIZONTAL_JUMP,
                    }
                }
            }
            LeapPhase::Horizontal { target_x } => {
                if (target_x - pos.x).abs() > speed {
                    if pos.x > target_x {
                        pos.x -= speed;
                    }
                    phase
                } else {
                    pos.x = target_x;
                    *vertical_dir = if pos.y <= 0.0 {
                        1.0
                    } else if pos.y >= max_y {
                        -1.0
                    } else {
                        crate::random_sign(rng)
                    };
                    let target_y = (pos.y + KNIGHT_VERTICAL_JUMP * *vertical_dir).clamp(0.0, max_y);
                    LeapPhase::Vertical { target_y }
                }
            }
        };

        self.phase = Some(next);
    }
}

/// A motion shape with its base speeds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Motion {
    /// Constant leftward speed, no vertical motion (Pawn, King)
    Drift { speed: f32 },
    /// Fast vertical bounce with slow leftward drift (Rook)
    Oscillate { drift: f32, vertical: f32 },
    /// Equal leftward and vertical speed (Bishop)
    Diagonal { speed: f32 },
    /// Discrete L-shaped jumps (Knight)
    Leap(Leap),
}

impl Motion {
    pub fn is_leap(&self) -> bool {
        matches!(self, Motion::Leap(_))
    }
}

/// A roll from the design drift range, scaled
fn drift_speed<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(DRIFT_SPEED_MIN..DRIFT_SPEED_MAX) * DRIFT_SCALE
}

/// Roll the motion a piece of `kind` uses.
///
/// A Queen has no motion of its own, so it gets a delegate's motion from
/// [`roll_delegate`]. Spawned Queens go through [`roll_delegate`] directly to keep
/// the delegate kind.
pub fn roll_motion<R: Rng + ?Sized>(kind: PieceKind, pace: Pace, rng: &mut R) -> Motion {
    let f = pace.factor();
    match kind {
        PieceKind::Queen => roll_delegate(pace, rng).1,
        PieceKind::Pawn => Motion::Drift {
            speed: drift_speed(rng) * f,
        },
        PieceKind::Rook => Motion::Oscillate {
            drift: drift_speed(rng) * HALF_DRIFT * f,
            vertical: ROOK_VERTICAL_SPEED * f,
        },
        PieceKind::Knight => Motion::Leap(Leap::new(KNIGHT_JUMP_SPEED * f)),
        PieceKind::Bishop => Motion::Diagonal {
            speed: BISHOP_SPEED * f,
        },
        PieceKind::King => Motion::Drift {
            speed: drift_speed(rng) * HALF_DRIFT * f,
        },
    }
}

/// Kinds a Queen may borrow movement from, with their weights
pub const QUEEN_DELEGATES: [(PieceKind, u32); 4] = [
    (PieceKind::Rook, 1),
    (PieceKind::Bishop, 1),
    (PieceKind::Knight, 1),
    (PieceKind::Pawn, 1),
];

/// Pick a delegate kind for a Queen and roll its motion
pub fn roll_delegate<R: Rng + ?Sized>(pace: Pace, rng: &mut R) -> (PieceKind, Motion) {
    let delegate = QUEEN_DELEGATES
        .choose_weighted(rng, |(_, weight)| *weight)
        .map(|(kind, _)| *kind)
        .unwrap_or(PieceKind::Pawn);
    (delegate, roll_motion(delegate, pace, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_pawn_speed_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let Motion::Drift { speed } = roll_motion(PieceKind::Pawn, Pace::Slowed, &mut rng)
            else {
                panic!("pawn should drift");
            };
            let lo = DRIFT_SPEED_MIN * DRIFT_SCALE * SLOWDOWN;
            let hi = DRIFT_SPEED_MAX * DRIFT_SCALE * SLOWDOWN;
            assert!(speed >= lo - 1e-4 && speed <= hi + 1e-4, "speed {speed}");
        }
    }

    #[test]
    fn test_king_is_slower_than_pawn_range() {
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..200 {
            let Motion::Drift { speed } = roll_motion(PieceKind::King, Pace::Slowed, &mut rng)
            else {
                panic!("king should drift");
            };
            assert!(speed <= DRIFT_SPEED_MAX * DRIFT_SCALE * HALF_DRIFT * SLOWDOWN + 1e-4);
        }
        assert_eq!(PieceKind::King.size(), KING_SIZE);
        assert_eq!(PieceKind::Pawn.size(), PIECE_SIZE);
    }

    #[test]
    fn test_fixed_speeds_follow_pace() {
        let mut rng = Pcg32::seed_from_u64(3);
        assert_eq!(
            roll_motion(PieceKind::Bishop, Pace::Design, &mut rng),
            Motion::Diagonal { speed: 5.0 }
        );
        let Motion::Diagonal { speed } = roll_motion(PieceKind::Bishop, Pace::Slowed, &mut rng)
        else {
            panic!("bishop should be diagonal");
        };
        assert!((speed - 5.0 * 2.0 / 3.0).abs() < 1e-5);

        let Motion::Oscillate { vertical, .. } =
            roll_motion(PieceKind::Rook, Pace::Design, &mut rng)
        else {
            panic!("rook should oscillate");
        };
        assert!((vertical - 4.6).abs() < 1e-5);

        let Motion::Leap(leap) = roll_motion(PieceKind::Knight, Pace::Slowed, &mut rng) else {
            panic!("knight should leap");
        };
        assert!((leap.jump_speed - 8.0 * 2.0 / 3.0).abs() < 1e-5);
        assert!(leap.phase.is_none());
    }

    #[test]
    fn test_queen_motion_comes_from_a_delegate() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut leaps = 0;
        for _ in 0..200 {
            let motion = roll_motion(PieceKind::Queen, Pace::Design, &mut rng);
            match motion {
                Motion::Diagonal { speed } => assert_eq!(speed, BISHOP_SPEED),
                Motion::Oscillate { vertical, .. } => assert_eq!(vertical, ROOK_VERTICAL_SPEED),
                Motion::Leap(_) => leaps += 1,
                Motion::Drift { .. } => {}
            }
        }
        assert!(leaps > 0);
    }

    #[test]
    fn test_delegate_never_queen_or_king() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..400 {
            let (kind, motion) = roll_delegate(Pace::Design, &mut rng);
            assert!(!matches!(kind, PieceKind::Queen | PieceKind::King));
            assert_eq!(kind == PieceKind::Knight, motion.is_leap());
            seen.insert(kind);
        }
        assert_eq!(seen.len(), 4, "all four delegates should appear");
    }

    #[test]
    fn test_leap_vertical_then_horizontal() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut leap = Leap::new(KNIGHT_JUMP_SPEED);
        let mut pos = Vec2::new(500.0, 300.0);
        let mut dir = 1.0;
        let max_y = crate::max_y(PIECE_SIZE);

        // First step picks a target 120px away and starts moving toward it
        leap.step(&mut pos, &mut dir, max_y, 1.0, &mut rng);
        let Some(LeapPhase::Vertical { target_y }) = leap.phase else {
            panic!("expected vertical phase");
        };
        assert!((target_y - (300.0 + 120.0 * dir)).abs() < 1e-4);
        assert_eq!(pos.x, 500.0);

        // Run until the horizontal phase begins
        let mut ticks = 0;
        while matches!(leap.phase, Some(LeapPhase::Vertical { .. })) {
            leap.step(&mut pos, &mut dir, max_y, 1.0, &mut rng);
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(pos.y, target_y);
        assert_eq!(pos.x, 500.0);
        assert_eq!(
            leap.phase,
            Some(LeapPhase::Horizontal { target_x: 440.0 })
        );

        // Then exactly one square to the left
        while matches!(leap.phase, Some(LeapPhase::Horizontal { .. })) {
            let before = pos.x;
            leap.step(&mut pos, &mut dir, max_y, 1.0, &mut rng);
            assert!(pos.x <= before);
            ticks += 1;
            assert!(ticks < 200);
        }
        assert_eq!(pos.x, 440.0);
    }

    #[test]
    fn test_leap_start_near_top_forces_down() {
        for seed in 0..32 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut leap = Leap::new(KNIGHT_JUMP_SPEED);
            let mut pos = Vec2::new(500.0, 10.0);
            let mut dir = 0.0;
            leap.step(&mut pos, &mut dir, 550.0, 1.0, &mut rng);
            match leap.phase {
                Some(LeapPhase::Vertical { target_y }) => {
                    // Either jumped down 120 or clamped at the top and forced down
                    assert!(target_y == 130.0 || target_y == 0.0);
                    if target_y == 0.0 {
                        assert_eq!(dir, 1.0);
                    }
                }
                other => panic!("unexpected phase {other:?}"),
            }
        }
    }

    #[test]
    fn test_leap_at_bottom_turns_up() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut leap = Leap {
            jump_speed: KNIGHT_JUMP_SPEED,
            phase: Some(LeapPhase::Horizontal { target_x: 440.0 }),
        };
        let mut pos = Vec2::new(444.0, 550.0);
        let mut dir = 1.0;
        leap.step(&mut pos, &mut dir, 550.0, 1.0, &mut rng);
        assert_eq!(pos.x, 440.0);
        assert_eq!(dir, -1.0);
        assert_eq!(
            leap.phase,
            Some(LeapPhase::Vertical { target_y: 430.0 })
        );
    }
}
