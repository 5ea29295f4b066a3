//! Simulation Runtime
//!
//! `Simulation` owns every piece of game state and advances it one frame
//! at a time. The frame loop holds it, feeds it `Command`s as input arrives,
//! calls `step` once per rendered frame, and draws from `snapshot`.
//!
//! Game states:
//! - Playing: hero, spawning, monsters and collisions all advance
//! - GameOver: everything is frozen; only Restart and Quit are accepted

use macroquad::math::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use crate::input::{Action, Command};
use super::clock::SimClock;
use super::collision::resolve_collisions;
use super::event::{
    AttackEndReason, AttackEnded, AttackStarted, Escalated, Events, GameOver, Restarted, WaveSpawned,
};
use super::hero::Hero;
use super::snapshot::{EntityView, Snapshot};
use super::spawn::SpawnPolicy;
use super::tuning::Tuning;
use super::world::Arena;

/// High-level game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Playing,
    GameOver,
}

/// What the frame loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Simulation {
    tuning: Tuning,
    rng: StdRng,
    clock: SimClock,
    state: GameState,

    hero: Hero,
    arena: Arena,
    spawner: SpawnPolicy,

    /// Events from the most recent step (and commands applied since)
    events: Events,

    /// Steps taken since the process started
    frame: u64,
}

impl Simulation {
    /// Create a simulation and run the initial setup.
    /// The same seed always produces the same game for the same inputs.
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut sim = Self {
            tuning,
            rng: StdRng::seed_from_u64(seed),
            clock: SimClock::new(),
            state: GameState::Playing,
            hero: Hero::new(Arena::new(&tuning).bounds.center(), &tuning),
            arena: Arena::new(&tuning),
            spawner: SpawnPolicy::new(&tuning),
            events: Events::new(),
            frame: 0,
        };
        sim.setup();
        info!(seed, "simulation created");
        sim
    }

    /// (Re)initialise hero, entities and timers to their starting values
    fn setup(&mut self) {
        self.hero = Hero::new(self.arena.bounds.center(), &self.tuning);
        self.arena.clear();
        self.spawner.reset();
        let report = self.spawner.populate(&mut self.arena, &self.tuning, &mut self.rng);
        self.state = GameState::Playing;
        info!(
            monsters = report.monsters_spawned,
            treasures = report.treasures_spawned,
            "arena set up"
        );
    }

    /// Start a fresh game
    pub fn restart(&mut self) {
        let final_score = self.hero.score;
        self.setup();
        info!(previous_score = final_score, "game restarted");
        self.events.restarted.send(Restarted);
    }

    /// Run one frame of simulation
    pub fn step(&mut self, delta_time: f64) {
        self.events.clear_all();
        self.clock.advance(delta_time);
        self.frame += 1;

        if !self.hero.is_alive() {
            self.freeze();
            return;
        }

        let now = self.clock.now();

        // Hero motion and attack/invincibility expiry
        if self.hero.update(now) {
            self.attack_ended(AttackEndReason::Expired);
        }

        // Spawn policy
        let report = self
            .spawner
            .tick(delta_time, &mut self.arena, &self.tuning, &mut self.rng);
        if report.wave_spawned() {
            debug!(
                monsters = report.monsters_spawned,
                treasures = report.treasures_spawned,
                "wave spawned"
            );
            self.events.wave_spawned.send(WaveSpawned {
                monsters: report.monsters_spawned,
                treasures: report.treasures_spawned,
            });
        }
        if let Some(monsters_per_wave) = report.escalated_to {
            info!(monsters_per_wave, "difficulty escalated");
            self.events.escalated.send(Escalated { monsters_per_wave });
        }

        // Monster random walk
        let bounds = self.arena.bounds;
        for monster in &mut self.arena.monsters {
            monster.update(&bounds, &mut self.rng);
        }

        resolve_collisions(&mut self.hero, &mut self.arena, &self.tuning, now, &mut self.events);

        // Attack animation is shorter than the attack itself
        if self.hero.attacking && self.clock.since(self.hero.last_attack_time) > self.tuning.attack_animation {
            self.hero.end_attack();
            self.attack_ended(AttackEndReason::AnimationDone);
        }
    }

    fn attack_ended(&mut self, reason: AttackEndReason) {
        debug!(?reason, "attack ended");
        self.events.attack_ended.send(AttackEnded { reason });
    }

    /// GameOver handling: enter the state once, keep everything still
    fn freeze(&mut self) {
        self.hero.velocity = Vec2::ZERO;
        if self.state == GameState::Playing {
            self.state = GameState::GameOver;
            info!(score = self.hero.score, life = self.hero.life, "game over");
            self.events.game_over.send(GameOver {
                score: self.hero.score,
            });
        }
    }

    /// Apply an input command. Takes effect on the next step.
    pub fn handle(&mut self, command: Command) -> Flow {
        match self.state {
            GameState::Playing => self.handle_playing(command),
            GameState::GameOver => self.handle_game_over(command),
        }
    }

    fn handle_playing(&mut self, command: Command) -> Flow {
        let speed = self.tuning.hero_speed;
        match command {
            Command::Press(Action::MoveUp) => self.hero.velocity.y = speed,
            Command::Press(Action::MoveDown) => self.hero.velocity.y = -speed,
            Command::Press(Action::MoveLeft) => self.hero.velocity.x = -speed,
            Command::Press(Action::MoveRight) => self.hero.velocity.x = speed,
            Command::Press(Action::Attack) => {
                let now = self.clock.now();
                if self.hero.start_attack(now) {
                    debug!(at = now, "attack started");
                    self.events.attack_started.send(AttackStarted { at: now });
                }
            }
            Command::Release(Action::MoveUp | Action::MoveDown) => self.hero.velocity.y = 0.0,
            Command::Release(Action::MoveLeft | Action::MoveRight) => self.hero.velocity.x = 0.0,
            Command::Release(Action::Attack) => {
                if self.hero.attacking {
                    self.attack_ended(AttackEndReason::Released);
                }
                self.hero.end_attack();
            }
            // Restart and Quit only mean something on the game over screen
            Command::Press(Action::Restart | Action::Quit)
            | Command::Release(Action::Restart | Action::Quit) => {}
        }
        Flow::Continue
    }

    fn handle_game_over(&mut self, command: Command) -> Flow {
        match command {
            Command::Press(Action::Restart) => {
                self.restart();
                Flow::Continue
            }
            Command::Press(Action::Quit) => {
                info!(score = self.hero.score, "quit requested");
                Flow::Quit
            }
            _ => Flow::Continue,
        }
    }

    /// Read-only view for the presentation layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            hero: EntityView::of(&self.hero),
            hero_attacking: self.hero.attacking,
            hero_invincible: self.hero.invincible,
            hero_hit: !self.events.hero_damaged.is_empty(),
            life: self.hero.display_life(),
            max_life: self.hero.max_life,
            score: self.hero.score,
            monsters: self.arena.monsters.iter().map(EntityView::of).collect(),
            treasures: self.arena.treasures.iter().map(EntityView::of).collect(),
            arena_width: self.arena.bounds.width,
            arena_height: self.arena.bounds.height,
            frame: self.frame,
            time: self.clock.now(),
            next_wave_in: self.spawner.wave_timer().remaining(),
            next_escalation_in: self.spawner.escalation_timer().remaining(),
            monsters_per_wave: self.spawner.monsters_to_spawn(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn spawner(&self) -> &SpawnPolicy {
        &self.spawner
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::monster::Monster;
    use crate::game::treasure::Treasure;
    use macroquad::math::{vec2, Vec2};

    const DT: f64 = 0.25;

    fn sim() -> Simulation {
        Simulation::new(Tuning::default(), 0xA11CE)
    }

    /// Sim with no monsters or treasures, so nothing collides by accident
    fn empty_sim() -> Simulation {
        let mut sim = sim();
        sim.arena.clear();
        sim
    }

    fn monster_on_hero(sim: &Simulation) -> Monster {
        Monster {
            position: sim.hero.position,
            half_extents: sim.tuning.monster_half_extents,
            speed: 1,
            alive: true,
        }
    }

    /// Monsters far from the hero never wander into it during short tests
    fn park_monsters_in_corner(sim: &mut Simulation) {
        for m in &mut sim.arena.monsters {
            m.position = vec2(30.0, 30.0);
        }
    }

    #[test]
    fn test_initial_setup() {
        let sim = sim();
        assert_eq!(sim.state(), GameState::Playing);
        assert_eq!(sim.hero().position, vec2(400.0, 300.0));
        assert_eq!(sim.hero().life, 100);
        assert_eq!(sim.hero().score, 0);
        assert_eq!(sim.arena().monster_count(), 2);
        assert_eq!(sim.arena().treasure_count(), 3);
        assert_eq!(sim.spawner().monsters_to_spawn(), 2);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = sim();
        let mut b = sim();
        for _ in 0..100 {
            a.step(DT);
            b.step(DT);
        }
        let pa: Vec<Vec2> = a.arena().monsters.iter().map(|m| m.position).collect();
        let pb: Vec<Vec2> = b.arena().monsters.iter().map(|m| m.position).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_movement_commands() {
        let mut sim = empty_sim();
        sim.handle(Command::Press(Action::MoveUp));
        sim.handle(Command::Press(Action::MoveRight));
        sim.step(DT);
        assert_eq!(sim.hero().position, vec2(405.0, 305.0));

        sim.handle(Command::Release(Action::MoveUp));
        sim.step(DT);
        assert_eq!(sim.hero().position, vec2(410.0, 305.0));

        sim.handle(Command::Press(Action::MoveDown));
        sim.handle(Command::Press(Action::MoveLeft));
        sim.step(DT);
        assert_eq!(sim.hero().position, vec2(405.0, 300.0));

        sim.handle(Command::Release(Action::MoveLeft));
        sim.handle(Command::Release(Action::MoveDown));
        sim.step(DT);
        assert_eq!(sim.hero().velocity, Vec2::ZERO);
    }

    #[test]
    fn test_attack_cooldown_through_commands() {
        let mut sim = empty_sim();
        sim.step(DT);
        sim.handle(Command::Press(Action::Attack));
        assert!(sim.hero().attacking);
        assert_eq!(sim.events().attack_started.len(), 1);

        sim.handle(Command::Release(Action::Attack));
        assert!(!sim.hero().attacking);

        // 1s later: still cooling down
        for _ in 0..4 {
            sim.step(DT);
        }
        sim.handle(Command::Press(Action::Attack));
        assert!(!sim.hero().attacking);
        assert!(sim.events().attack_started.is_empty());

        // 2.25s after the first attack it works again
        for _ in 0..5 {
            sim.step(DT);
        }
        sim.handle(Command::Press(Action::Attack));
        assert!(sim.hero().attacking);
    }

    #[test]
    fn test_attack_animation_ends_after_one_second() {
        let mut sim = empty_sim();
        sim.handle(Command::Press(Action::Attack));

        // Exactly 1.0s elapsed: not yet expired
        for _ in 0..4 {
            sim.step(DT);
            assert!(sim.hero().attacking);
        }
        sim.step(DT);
        assert!(!sim.hero().attacking);
        assert!(!sim.hero().invincible);
        let ended: Vec<_> = sim.events().attack_ended.iter().copied().collect();
        assert_eq!(ended, vec![AttackEnded { reason: AttackEndReason::AnimationDone }]);
    }

    #[test]
    fn test_wave_after_five_seconds() {
        let mut sim = sim();
        park_monsters_in_corner(&mut sim);
        sim.arena.treasures.clear();

        for _ in 0..19 {
            sim.step(DT);
            park_monsters_in_corner(&mut sim);
        }
        assert_eq!(sim.arena().monster_count(), 2);
        assert_eq!(sim.arena().treasure_count(), 0);

        sim.step(DT);
        // A fresh spawn may land on the hero; count what the collision pass took
        assert_eq!(sim.events().wave_spawned.len(), 1);
        let collected = sim.events().treasure_collected.len();
        let killed = sim.events().monster_killed.len();
        assert_eq!(sim.arena().monster_count() + killed, 4);
        assert_eq!(sim.arena().treasure_count() + collected, 1);
    }

    #[test]
    fn test_escalation_after_twenty_seconds() {
        let mut sim = empty_sim();
        // Keep the hero alive no matter where monsters wander
        for _ in 0..80 {
            sim.hero.life = 100;
            sim.step(DT);
        }
        assert_eq!(sim.spawner().monsters_to_spawn(), 3);
        assert_eq!(sim.events().escalated.len(), 1);
        assert_eq!(sim.events().wave_spawned.iter().next().map(|w| w.monsters), Some(2));

        for _ in 0..20 {
            sim.hero.life = 100;
            sim.step(DT);
        }
        assert_eq!(sim.events().wave_spawned.iter().next().map(|w| w.monsters), Some(3));
    }

    #[test]
    fn test_treasure_scenario() {
        let mut sim = empty_sim();
        sim.arena.treasures.push(Treasure {
            position: sim.hero.position,
            half_extents: sim.tuning.treasure_half_extents,
            points: 30,
            alive: true,
        });

        sim.step(DT);
        assert_eq!(sim.hero().score, 30);
        assert_eq!(sim.hero().life, 100);
        assert_eq!(sim.arena().treasure_count(), 0);
    }

    #[test]
    fn test_contact_damage_scenario() {
        let mut sim = empty_sim();
        let monster = monster_on_hero(&sim);
        sim.arena.monsters.push(monster);

        sim.step(DT);
        // A speed-1 monster can't step out of a 48-unit hero in one step
        assert_eq!(sim.hero().life, 97);
        assert_eq!(sim.events().hero_damaged.len(), 1);
        assert!(sim.snapshot().hero_hit);
    }

    #[test]
    fn test_attack_kill_scenario() {
        let mut sim = empty_sim();
        sim.hero.life = 90;
        let monster = monster_on_hero(&sim);
        sim.arena.monsters.push(monster);
        sim.handle(Command::Press(Action::Attack));

        sim.step(DT);
        assert_eq!(sim.arena().monster_count(), 0);
        assert_eq!(sim.hero().score, 10);
        assert_eq!(sim.hero().life, 91);
        assert_eq!(sim.events().monster_killed.len(), 1);
    }

    #[test]
    fn test_game_over_and_restart() {
        let mut sim = sim();
        for _ in 0..30 {
            sim.hero.life = 100;
            sim.step(DT);
        }
        sim.handle(Command::Press(Action::MoveRight));
        sim.hero.life = 0;

        sim.step(DT);
        assert_eq!(sim.state(), GameState::GameOver);
        assert_eq!(sim.hero().velocity, Vec2::ZERO);
        assert_eq!(sim.events().game_over.len(), 1);

        // Frozen: nothing moves, no spawning, movement ignored
        let monsters_before: Vec<Vec2> = sim.arena().monsters.iter().map(|m| m.position).collect();
        let wave_timer = sim.spawner().wave_timer().accumulated();
        sim.handle(Command::Press(Action::MoveUp));
        sim.handle(Command::Press(Action::Attack));
        for _ in 0..40 {
            sim.step(DT);
        }
        let monsters_after: Vec<Vec2> = sim.arena().monsters.iter().map(|m| m.position).collect();
        assert_eq!(monsters_before, monsters_after);
        assert_eq!(sim.spawner().wave_timer().accumulated(), wave_timer);
        assert_eq!(sim.hero().velocity, Vec2::ZERO);
        assert!(!sim.hero().attacking);
        // Entered once
        assert!(sim.events().game_over.is_empty());

        assert_eq!(sim.handle(Command::Press(Action::Restart)), Flow::Continue);
        assert_eq!(sim.state(), GameState::Playing);
        assert_eq!(sim.hero().life, 100);
        assert_eq!(sim.hero().score, 0);
        assert_eq!(sim.hero().position, vec2(400.0, 300.0));
        assert_eq!(sim.spawner().monsters_to_spawn(), 2);
        assert_eq!(sim.spawner().wave_timer().accumulated(), 0.0);
        assert_eq!(sim.arena().monster_count(), 2);
        assert_eq!(sim.arena().treasure_count(), 3);
        assert_eq!(sim.events().restarted.len(), 1);
    }

    #[test]
    fn test_negative_life_is_game_over() {
        let mut sim = empty_sim();
        sim.hero.life = -2;
        sim.step(DT);
        assert_eq!(sim.state(), GameState::GameOver);
        assert_eq!(sim.snapshot().life, 0);
    }

    #[test]
    fn test_restart_and_quit_only_on_game_over() {
        let mut sim = sim();
        assert_eq!(sim.handle(Command::Press(Action::Quit)), Flow::Continue);
        sim.hero.score = 40;
        sim.handle(Command::Press(Action::Restart));
        assert_eq!(sim.hero().score, 40);

        sim.hero.life = 0;
        sim.step(DT);
        assert_eq!(sim.handle(Command::Press(Action::Quit)), Flow::Quit);
    }
}
