//! Hero
//!
//! The player entity. Besides motion it carries life, score and the
//! attack/invincibility state machine:
//!
//! - Idle + Vulnerable: normal play
//! - Attacking + Invincible: from `start_attack` until the attack expires
//! - Idle + Invincible: post-hit grace window, cleared by `update`
//!
//! All timestamps come from the simulation clock and are passed in, so the
//! hero never reads time on its own.

use macroquad::math::Vec2;
use super::components::Body;
use super::tuning::Tuning;

/// Timestamp given to "never happened" events so the first attack is not
/// held back by the cooldown
const LONG_AGO: f64 = -5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub position: Vec2,
    /// Units per step, set directly by movement commands
    pub velocity: Vec2,
    pub half_extents: Vec2,

    /// Not clamped at zero on damage; anything <= 0 means game over
    pub life: i32,
    pub max_life: i32,
    pub score: u32,

    pub attacking: bool,
    pub invincible: bool,
    pub last_attack_time: f64,
    pub last_hit_time: f64,

    pub attack_duration: f64,
    pub attack_cooldown: f64,
}

impl Hero {
    pub fn new(position: Vec2, tuning: &Tuning) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            half_extents: tuning.hero_half_extents,
            life: tuning.hero_max_life,
            max_life: tuning.hero_max_life,
            score: 0,
            attacking: false,
            invincible: false,
            last_attack_time: LONG_AGO,
            last_hit_time: LONG_AGO,
            attack_duration: tuning.attack_duration,
            attack_cooldown: tuning.attack_cooldown,
        }
    }

    /// Start an attack if the cooldown has passed.
    /// Returns false (and changes nothing) while cooling down.
    pub fn start_attack(&mut self, now: f64) -> bool {
        if now - self.last_attack_time <= self.attack_cooldown {
            return false;
        }
        self.attacking = true;
        self.invincible = true;
        self.last_attack_time = now;
        true
    }

    pub fn end_attack(&mut self) {
        self.attacking = false;
        self.invincible = false;
    }

    /// Apply damage unless invincible. Returns true if life was reduced.
    pub fn take_damage(&mut self, amount: i32, now: f64) -> bool {
        if self.invincible {
            return false;
        }
        self.life -= amount;
        self.last_hit_time = now;
        true
    }

    /// Restore life, never above `max_life`
    pub fn heal(&mut self, amount: i32) {
        self.life = (self.life + amount).min(self.max_life);
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Life clamped to [0, max_life] for display
    pub fn display_life(&self) -> i32 {
        self.life.clamp(0, self.max_life)
    }

    /// Per-step update: integrate velocity and expire timed states.
    /// Returns true if an attack expired during this update.
    pub fn update(&mut self, now: f64) -> bool {
        self.position += self.velocity;

        let mut attack_expired = false;
        if self.attacking && now - self.last_attack_time > self.attack_duration {
            self.end_attack();
            attack_expired = true;
        }

        // Grace window after a hit; attack invincibility is owned by the attack
        if self.invincible && !self.attacking && now - self.last_hit_time > self.attack_duration {
            self.invincible = false;
        }

        attack_expired
    }
}

impl Body for Hero {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn half_extents(&self) -> Vec2 {
        self.half_extents
    }
}
