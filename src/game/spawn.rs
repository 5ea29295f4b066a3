//! Spawn Policy
//!
//! Two independent timers driven by Playing-state frame time:
//! - every `spawn_interval` (5s) a wave of `monsters_to_spawn` monsters
//!   plus one treasure appears at random positions
//! - every `escalation_interval` (20s) the wave size grows by one, for good
//!
//! When both fire on the same step the wave goes out first, at the old size.

use rand::Rng;
use super::clock::Timer;
use super::tuning::Tuning;
use super::world::Arena;

/// Treasures added per wave
const TREASURES_PER_WAVE: u32 = 1;

/// What a single `tick` did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub monsters_spawned: u32,
    pub treasures_spawned: u32,
    /// New wave size, if it grew this tick
    pub escalated_to: Option<u32>,
}

impl SpawnReport {
    pub fn wave_spawned(&self) -> bool {
        self.monsters_spawned > 0 || self.treasures_spawned > 0
    }
}

#[derive(Debug, Clone)]
pub struct SpawnPolicy {
    wave_timer: Timer,
    escalation_timer: Timer,
    monsters_to_spawn: u32,
    initial_monsters: u32,
    initial_treasures: u32,
}

impl SpawnPolicy {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            wave_timer: Timer::new(tuning.spawn_interval),
            escalation_timer: Timer::new(tuning.escalation_interval),
            monsters_to_spawn: tuning.initial_monsters,
            initial_monsters: tuning.initial_monsters,
            initial_treasures: tuning.initial_treasures,
        }
    }

    /// Current wave size
    pub fn monsters_to_spawn(&self) -> u32 {
        self.monsters_to_spawn
    }

    pub fn wave_timer(&self) -> &Timer {
        &self.wave_timer
    }

    pub fn escalation_timer(&self) -> &Timer {
        &self.escalation_timer
    }

    /// Back to the starting wave size with both timers at zero
    pub fn reset(&mut self) {
        self.wave_timer.reset();
        self.escalation_timer.reset();
        self.monsters_to_spawn = self.initial_monsters;
    }

    /// Fill an empty arena with the opening set of entities
    pub fn populate<R: Rng + ?Sized>(&self, arena: &mut Arena, tuning: &Tuning, rng: &mut R) -> SpawnReport {
        SpawnReport {
            monsters_spawned: arena.spawn_monsters(self.monsters_to_spawn, tuning, rng),
            treasures_spawned: arena.spawn_treasures(self.initial_treasures, tuning, rng),
            escalated_to: None,
        }
    }

    /// Advance both timers by `delta` and apply whatever fired
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        delta: f64,
        arena: &mut Arena,
        tuning: &Tuning,
        rng: &mut R,
    ) -> SpawnReport {
        let mut report = SpawnReport::default();

        if self.wave_timer.tick(delta) {
            report.monsters_spawned = arena.spawn_monsters(self.monsters_to_spawn, tuning, rng);
            report.treasures_spawned = arena.spawn_treasures(TREASURES_PER_WAVE, tuning, rng);
        }

        if self.escalation_timer.tick(delta) {
            self.monsters_to_spawn += 1;
            report.escalated_to = Some(self.monsters_to_spawn);
        }

        report
    }
}
