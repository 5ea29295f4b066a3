//! Arena
//!
//! The Arena holds the non-hero entities:
//! - Monsters and treasures, in no particular order
//! - Convenience spawners that place entities at random positions
//! - Deferred removal, so systems can mark entities dead mid-iteration
//!   and the dead are swept out once the pass is done

use rand::Rng;
use super::components::Bounds;
use super::monster::Monster;
use super::treasure::Treasure;
use super::tuning::Tuning;

pub struct Arena {
    pub bounds: Bounds,
    pub monsters: Vec<Monster>,
    pub treasures: Vec<Treasure>,
}

impl Arena {
    /// Create an empty arena sized from the tuning
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            bounds: Bounds::new(tuning.arena_width, tuning.arena_height),
            monsters: Vec::new(),
            treasures: Vec::new(),
        }
    }

    /// Spawn a monster at a uniformly random position
    pub fn spawn_monster<R: Rng + ?Sized>(&mut self, tuning: &Tuning, rng: &mut R) -> &Monster {
        let position = self.bounds.random_point(rng);
        self.monsters.push(Monster::spawn(position, tuning, rng));
        &self.monsters[self.monsters.len() - 1]
    }

    /// Spawn a treasure at a uniformly random position
    pub fn spawn_treasure<R: Rng + ?Sized>(&mut self, tuning: &Tuning, rng: &mut R) -> &Treasure {
        let position = self.bounds.random_point(rng);
        self.treasures.push(Treasure::spawn(position, tuning, rng));
        &self.treasures[self.treasures.len() - 1]
    }

    /// Spawn `count` monsters, returns how many were added
    pub fn spawn_monsters<R: Rng + ?Sized>(&mut self, count: u32, tuning: &Tuning, rng: &mut R) -> u32 {
        for _ in 0..count {
            self.spawn_monster(tuning, rng);
        }
        count
    }

    /// Spawn `count` treasures, returns how many were added
    pub fn spawn_treasures<R: Rng + ?Sized>(&mut self, count: u32, tuning: &Tuning, rng: &mut R) -> u32 {
        for _ in 0..count {
            self.spawn_treasure(tuning, rng);
        }
        count
    }

    /// Drop every monster and treasure that is no longer alive
    pub fn flush_despawns(&mut self) {
        self.monsters.retain(|m| m.alive);
        self.treasures.retain(|t| t.alive);
    }

    /// Remove everything (used on restart)
    pub fn clear(&mut self) {
        self.monsters.clear();
        self.treasures.clear();
    }

    pub fn monster_count(&self) -> usize {
        self.monsters.len()
    }

    pub fn treasure_count(&self) -> usize {
        self.treasures.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_inside_arena() {
        let tuning = Tuning::default();
        let mut arena = Arena::new(&tuning);
        let mut rng = StdRng::seed_from_u64(5);

        arena.spawn_monsters(50, &tuning, &mut rng);
        arena.spawn_treasures(50, &tuning, &mut rng);
        assert_eq!(arena.monster_count(), 50);
        assert_eq!(arena.treasure_count(), 50);

        for p in arena
            .monsters
            .iter()
            .map(|m| m.position)
            .chain(arena.treasures.iter().map(|t| t.position))
        {
            assert!(p.x >= 0.0 && p.x < 800.0);
            assert!(p.y >= 0.0 && p.y < 600.0);
        }
    }

    #[test]
    fn test_flush_despawns() {
        let tuning = Tuning::default();
        let mut arena = Arena::new(&tuning);
        let mut rng = StdRng::seed_from_u64(9);
        arena.spawn_monsters(3, &tuning, &mut rng);
        arena.spawn_treasures(2, &tuning, &mut rng);

        arena.monsters[1].alive = false;
        arena.treasures[0].alive = false;
        // Still counted until the sweep
        assert_eq!(arena.monster_count(), 3);

        arena.flush_despawns();
        assert_eq!(arena.monster_count(), 2);
        assert_eq!(arena.treasure_count(), 1);
        assert!(arena.monsters.iter().all(|m| m.alive));
    }
}
