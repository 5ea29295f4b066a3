//! Collision Resolver
//!
//! Hero-vs-monster and hero-vs-treasure contact, resolved once per playing
//! step. Overlap is plain AABB intersection through the `Body` trait, and
//! every overlap found in a step is resolved in that same step.

use tracing::debug;
use super::components::{Aabb, Body};
use super::event::{Events, HeroDamaged, MonsterKilled, TreasureCollected};
use super::hero::Hero;
use super::tuning::Tuning;
use super::world::Arena;

/// Counts of what a collision pass resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub monsters_killed: u32,
    pub hits_taken: u32,
    pub treasures_collected: u32,
}

/// Does `a` overlap `b`?
pub fn overlaps<A: Body + ?Sized, B: Body + ?Sized>(a: &A, b: &B) -> bool {
    a.bounding_box().overlaps(&b.bounding_box())
}

/// All candidates whose box overlaps `area`
pub fn overlapping_mut<'a, T: Body>(
    area: Aabb,
    candidates: &'a mut [T],
) -> impl Iterator<Item = &'a mut T> + 'a {
    candidates
        .iter_mut()
        .filter(move |c| c.bounding_box().overlaps(&area))
}

/// Apply combat and pickup rules for everything touching the hero.
///
/// An attacking hero kills each monster it touches (+score, +life); a
/// non-attacking hero takes contact damage from each one (ignored while
/// invincible). Treasures are collected regardless. Dead entities are swept
/// from the arena before returning.
pub fn resolve_collisions(
    hero: &mut Hero,
    arena: &mut Arena,
    tuning: &Tuning,
    now: f64,
    events: &mut Events,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    let hero_box = hero.bounding_box();

    for monster in overlapping_mut(hero_box, &mut arena.monsters) {
        if !monster.alive {
            continue;
        }
        if hero.attacking {
            monster.alive = false;
            hero.score += tuning.kill_score;
            hero.heal(tuning.kill_heal);
            report.monsters_killed += 1;
            debug!(x = monster.position.x, y = monster.position.y, score = hero.score, "monster killed");
            events.monster_killed.send(MonsterKilled {
                position: monster.position,
                score: hero.score,
            });
        } else if hero.take_damage(tuning.contact_damage, now) {
            report.hits_taken += 1;
            debug!(amount = tuning.contact_damage, life = hero.life, "hero hit");
            events.hero_damaged.send(HeroDamaged {
                amount: tuning.contact_damage,
                life: hero.life,
            });
        }
    }

    for treasure in overlapping_mut(hero_box, &mut arena.treasures) {
        let points = treasure.collect();
        if points == 0 {
            continue;
        }
        hero.score += points;
        report.treasures_collected += 1;
        debug!(points, score = hero.score, "treasure collected");
        events.treasure_collected.send(TreasureCollected {
            position: treasure.position,
            points,
        });
    }

    arena.flush_despawns();
    report
}
