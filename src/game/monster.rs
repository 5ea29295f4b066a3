//! Monsters
//!
//! Hostile random walkers. Each step a monster moves `speed` units along
//! both axes in independently chosen directions, then gets pulled back
//! inside the arena.

use macroquad::math::{vec2, Vec2};
use rand::Rng;
use super::components::{Body, Bounds};
use super::tuning::Tuning;

#[derive(Debug, Clone, PartialEq)]
pub struct Monster {
    pub position: Vec2,
    pub half_extents: Vec2,
    /// Units per step, fixed for the monster's lifetime
    pub speed: i32,
    pub alive: bool,
}

impl Monster {
    /// Create a monster at `position` with a random speed
    pub fn spawn<R: Rng + ?Sized>(position: Vec2, tuning: &Tuning, rng: &mut R) -> Self {
        Self {
            position,
            half_extents: tuning.monster_half_extents,
            speed: rng.gen_range(tuning.monster_speed_min..=tuning.monster_speed_max),
            alive: true,
        }
    }

    /// One random-walk step, clamped to `bounds`
    pub fn update<R: Rng + ?Sized>(&mut self, bounds: &Bounds, rng: &mut R) {
        let step = self.speed as f32;
        let dx = if rng.gen_bool(0.5) { step } else { -step };
        let dy = if rng.gen_bool(0.5) { step } else { -step };

        self.position += vec2(dx, dy);
        self.position = bounds.clamp_box(self.position, self.half_extents);
        debug_assert!(bounds.contains_box(&self.bounding_box()));
    }
}

impl Body for Monster {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn half_extents(&self) -> Vec2 {
        self.half_extents
    }
}
