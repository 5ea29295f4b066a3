//! Frame Events
//!
//! The simulation records what happened during a step in typed queues.
//! The queues are cleared at the start of the next step, so the renderer
//! and the logs see exactly one frame's worth.
//!
//! Example flow:
//! 1. Collision pass sees an attacking hero touch a monster -> MonsterKilled
//! 2. Snapshot reads HeroDamaged to flash the hero sprite
//! 3. Tests assert on the queues instead of diffing world state

use macroquad::math::Vec2;

/// A queue for events of a single type.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything that can happen in one step
#[derive(Debug, Default)]
pub struct Events {
    pub monster_killed: EventQueue<MonsterKilled>,
    pub hero_damaged: EventQueue<HeroDamaged>,
    pub treasure_collected: EventQueue<TreasureCollected>,
    pub wave_spawned: EventQueue<WaveSpawned>,
    pub escalated: EventQueue<Escalated>,
    pub attack_started: EventQueue<AttackStarted>,
    pub attack_ended: EventQueue<AttackEnded>,
    pub game_over: EventQueue<GameOver>,
    pub restarted: EventQueue<Restarted>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all event queues. Call at the start of a step.
    pub fn clear_all(&mut self) {
        self.monster_killed.clear();
        self.hero_damaged.clear();
        self.treasure_collected.clear();
        self.wave_spawned.clear();
        self.escalated.clear();
        self.attack_started.clear();
        self.attack_ended.clear();
        self.game_over.clear();
        self.restarted.clear();
    }
}

// =============================================================================
// Event Types
// =============================================================================

/// An attacking hero destroyed a monster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonsterKilled {
    pub position: Vec2,
    /// Score after the kill
    pub score: u32,
}

/// A monster touched a vulnerable hero
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroDamaged {
    pub amount: i32,
    /// Life after the hit (may be negative)
    pub life: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreasureCollected {
    pub position: Vec2,
    pub points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveSpawned {
    pub monsters: u32,
    pub treasures: u32,
}

/// Wave size grew
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escalated {
    pub monsters_per_wave: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackStarted {
    pub at: f64,
}

/// Why an attack stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackEndReason {
    /// Attack key released
    Released,
    /// `attack_duration` ran out inside the hero update
    Expired,
    /// Animation length ran out in the step
    AnimationDone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackEnded {
    pub reason: AttackEndReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restarted;
