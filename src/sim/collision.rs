//! Collision detection between sprites
//!
//! Sprites collide through hitboxes that are a centered fraction of their bounds,
//! so near misses on transparent sprite corners don't end the run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::HITBOX_SCALE;

/// Axis-aligned collision rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Hitbox {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Hitbox for a sprite at `pos` with `sprite_size`, shrunk to [`HITBOX_SCALE`].
    ///
    /// Box size and centering offset are floored to whole pixels.
    pub fn inset(pos: Vec2, sprite_size: Vec2) -> Self {
        let size = (sprite_size * HITBOX_SCALE).floor();
        let offset = ((sprite_size - size) / 2.0).floor();
        Self {
            min: pos + offset,
            size,
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap test: touching edges do not collide
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_sizes() {
        let pawn = Hitbox::inset(Vec2::ZERO, Vec2::splat(50.0));
        assert_eq!(pawn.size, Vec2::splat(40.0));
        assert_eq!(pawn.min, Vec2::splat(5.0));

        let king = Hitbox::inset(Vec2::ZERO, Vec2::splat(70.0));
        assert_eq!(king.size, Vec2::splat(56.0));
        assert_eq!(king.min, Vec2::splat(7.0));

        let player = Hitbox::inset(Vec2::new(100.0, 300.0), Vec2::splat(60.0));
        assert_eq!(player.size, Vec2::splat(48.0));
        assert_eq!(player.min, Vec2::new(106.0, 306.0));
    }

    #[test]
    fn test_one_pixel_overlap() {
        let a = Hitbox::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Hitbox::new(Vec2::new(9.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_miss() {
        let a = Hitbox::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let right = Hitbox::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        let below = Hitbox::new(Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Hitbox::new(Vec2::ZERO, Vec2::splat(100.0));
        let inner = Hitbox::new(Vec2::splat(40.0), Vec2::splat(5.0));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }
}
