//! Render Snapshot
//!
//! A read-only copy of what the presentation layer needs for one frame.
//! Taken after `step`, so drawing never touches live simulation state.

use macroquad::math::Vec2;
use super::components::Body;
use super::runtime::GameState;
use super::tuning::{LIFE_BAR_HEIGHT, LIFE_BAR_WIDTH};

pub const GAME_OVER_TEXT: &str = "Game Over";
pub const RESTART_PROMPT: &str = "Press Space to restart game, Escape to quit";

/// Position and size of one drawable entity, in arena space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityView {
    pub position: Vec2,
    pub half_extents: Vec2,
}

impl EntityView {
    pub fn of<B: Body + ?Sized>(body: &B) -> Self {
        Self {
            position: body.position(),
            half_extents: body.half_extents(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub state: GameState,

    pub hero: EntityView,
    pub hero_attacking: bool,
    pub hero_invincible: bool,
    /// Hero took damage during the last step
    pub hero_hit: bool,
    /// Clamped to [0, max_life]
    pub life: i32,
    pub max_life: i32,
    pub score: u32,

    pub monsters: Vec<EntityView>,
    pub treasures: Vec<EntityView>,

    pub arena_width: f32,
    pub arena_height: f32,

    // Debug overlay
    pub frame: u64,
    pub time: f64,
    pub next_wave_in: f64,
    pub next_escalation_in: f64,
    pub monsters_per_wave: u32,
}

impl Snapshot {
    /// Life bar size, anchored at the top-left corner.
    /// Width shrinks with life and is never negative.
    pub fn life_bar(&self) -> (f32, f32) {
        let fraction = if self.max_life > 0 {
            self.life.clamp(0, self.max_life) as f32 / self.max_life as f32
        } else {
            0.0
        };
        (LIFE_BAR_WIDTH * fraction, LIFE_BAR_HEIGHT)
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// Headline and prompt to show, if any
    pub fn message(&self) -> Option<(&'static str, &'static str)> {
        match self.state {
            GameState::Playing => None,
            GameState::GameOver => Some((GAME_OVER_TEXT, RESTART_PROMPT)),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }
}
