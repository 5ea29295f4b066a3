//! Gameplay Tuning
//!
//! Every gameplay number in one place. These are fixed for the game; the
//! settings file only covers presentation and runtime options.

use macroquad::math::{vec2, Vec2};

/// Arena size in units
pub const ARENA_WIDTH: f32 = 800.0;
pub const ARENA_HEIGHT: f32 = 600.0;

/// Life bar dimensions at full health
pub const LIFE_BAR_WIDTH: f32 = 150.0;
pub const LIFE_BAR_HEIGHT: f32 = 20.0;

/// Gameplay tuning for one simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub arena_width: f32,
    pub arena_height: f32,

    // Hero
    /// Velocity applied per movement key, in units per step
    pub hero_speed: f32,
    pub hero_max_life: i32,
    /// Attack lasts this long inside `Hero::update`; also the post-hit grace window
    pub attack_duration: f64,
    /// Minimum time between two attack starts
    pub attack_cooldown: f64,
    /// The step ends an attack older than this (animation length)
    pub attack_animation: f64,
    pub hero_half_extents: Vec2,

    // Combat
    /// Life lost when touching a monster while not attacking
    pub contact_damage: i32,
    pub kill_score: u32,
    pub kill_heal: i32,

    // Monsters
    pub monster_speed_min: i32,
    pub monster_speed_max: i32,
    pub monster_half_extents: Vec2,

    // Treasures
    pub treasure_points_min: u32,
    pub treasure_points_max: u32,
    pub treasure_half_extents: Vec2,

    // Spawning
    pub initial_monsters: u32,
    pub initial_treasures: u32,
    /// Seconds between spawn waves
    pub spawn_interval: f64,
    /// Seconds between wave-size increases
    pub escalation_interval: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            hero_speed: 5.0,
            hero_max_life: 100,
            attack_duration: 2.0,
            attack_cooldown: 2.0,
            attack_animation: 1.0,
            hero_half_extents: vec2(24.0, 24.0),

            contact_damage: 3,
            kill_score: 10,
            kill_heal: 1,

            monster_speed_min: 1,
            monster_speed_max: 3,
            monster_half_extents: vec2(20.0, 20.0),

            treasure_points_min: 10,
            treasure_points_max: 50,
            treasure_half_extents: vec2(16.0, 16.0),

            initial_monsters: 2,
            initial_treasures: 3,
            spawn_interval: 5.0,
            escalation_interval: 20.0,
        }
    }
}
