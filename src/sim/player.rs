//! The jetpack player
//!
//! Falls under constant gravity; a jump replaces the current velocity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Hitbox;
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the sprite (x never changes)
    pub pos: Vec2,
    /// Vertical velocity, pixels per tick (positive = down)
    pub vel: f32,
    /// Sprite edge length
    pub size: f32,
    /// Current flight animation frame
    pub frame: usize,
    /// Ticks since the frame last changed
    pub anim_timer: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Self::spawn_pos(),
            vel: 0.0,
            size: PLAYER_SIZE,
            frame: 0,
            anim_timer: 0,
        }
    }
}

impl Player {
    /// Where every session starts
    pub fn spawn_pos() -> Vec2 {
        Vec2::new(PLAYER_X, ARENA_HEIGHT / 2.0)
    }

    /// Apply gravity and move one tick.
    ///
    /// Returns true if the player was clamped to the top or bottom edge this tick,
    /// in which case velocity is zeroed.
    pub fn advance(&mut self) -> bool {
        self.vel += GRAVITY;
        self.pos.y += self.vel;

        let max_y = crate::max_y(self.size);
        let mut clamped = false;
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel = 0.0;
            clamped = true;
        }
        if self.pos.y > max_y {
            self.pos.y = max_y;
            self.vel = 0.0;
            clamped = true;
        }

        self.anim_timer += 1;
        if self.anim_timer >= PLAYER_FRAME_TICKS {
            self.anim_timer = 0;
            self.frame = (self.frame + 1) % PLAYER_FRAMES;
        }

        clamped
    }

    /// Fire the jetpack (replaces velocity, repeated jumps don't stack)
    pub fn jump(&mut self) {
        self.vel = JUMP_IMPULSE;
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::inset(self.pos, Vec2::splat(self.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gravity_accumulates() {
        let mut player = Player::default();
        player.advance();
        assert_eq!(player.vel, 0.5);
        assert_eq!(player.pos.y, 300.5);
        player.advance();
        assert_eq!(player.vel, 1.0);
        assert_eq!(player.pos.y, 301.5);
    }

    #[test]
    fn test_ceiling_clamp_zeroes_velocity() {
        let mut player = Player::default();
        player.pos.y = 0.0;
        player.vel = -3.0;
        assert!(player.advance());
        assert_eq!(player.pos.y, 0.0);
        assert_eq!(player.vel, 0.0);
    }

    #[test]
    fn test_floor_clamp_zeroes_velocity() {
        let mut player = Player::default();
        player.pos.y = 539.0;
        player.vel = 4.0;
        assert!(player.advance());
        assert_eq!(player.pos.y, 540.0);
        assert_eq!(player.vel, 0.0);

        // Resting on the floor never builds up momentum
        for _ in 0..10 {
            player.advance();
        }
        assert_eq!(player.pos.y, 540.0);
        assert_eq!(player.vel, 0.0);
    }

    #[test]
    fn test_jump_overrides_velocity() {
        let mut player = Player::default();
        player.vel = 6.0;
        player.jump();
        assert_eq!(player.vel, JUMP_IMPULSE);
        player.jump();
        assert_eq!(player.vel, JUMP_IMPULSE);
        player.advance();
        assert_eq!(player.vel, JUMP_IMPULSE + GRAVITY);
    }

    #[test]
    fn test_animation_cycles() {
        let mut player = Player::default();
        for _ in 0..PLAYER_FRAME_TICKS - 1 {
            player.advance();
        }
        assert_eq!(player.frame, 0);
        player.advance();
        assert_eq!(player.frame, 1);
        for _ in 0..PLAYER_FRAME_TICKS * 3 {
            player.advance();
        }
        assert_eq!(player.frame, 0);
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_bounds(jumps in proptest::collection::vec(any::<bool>(), 1..400)) {
            let mut player = Player::default();
            for jump in jumps {
                if jump {
                    player.jump();
                }
                let clamped = player.advance();
                prop_assert!(player.pos.y >= 0.0 && player.pos.y <= ARENA_HEIGHT - PLAYER_SIZE);
                if clamped {
                    prop_assert_eq!(player.vel, 0.0);
                }
            }
        }
    }
}
