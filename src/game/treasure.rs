//! Treasures
//!
//! Passive collectibles worth a fixed number of points.

use macroquad::math::Vec2;
use rand::Rng;
use super::components::Body;
use super::tuning::Tuning;

#[derive(Debug, Clone, PartialEq)]
pub struct Treasure {
    pub position: Vec2,
    pub half_extents: Vec2,
    pub points: u32,
    pub alive: bool,
}

impl Treasure {
    /// Create a treasure at `position` with a random point value
    pub fn spawn<R: Rng + ?Sized>(position: Vec2, tuning: &Tuning, rng: &mut R) -> Self {
        Self {
            position,
            half_extents: tuning.treasure_half_extents,
            points: rng.gen_range(tuning.treasure_points_min..=tuning.treasure_points_max),
            alive: true,
        }
    }

    /// Mark as collected and hand over the points.
    /// Collecting twice yields nothing the second time.
    pub fn collect(&mut self) -> u32 {
        if !self.alive {
            return 0;
        }
        self.alive = false;
        self.points
    }
}

impl Body for Treasure {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn half_extents(&self) -> Vec2 {
        self.half_extents
    }
}
