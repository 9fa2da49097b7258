//! The lane: a strip of enemy health cells
//!
//! Index 0 is the player's end, index N-1 the spawn end. Each advance shifts
//! every cell one step toward the player and rolls a fresh spawn at the top.
//! Randomness comes in through [`SpawnRng`] so the lane stays deterministic
//! under test.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Source of spawn health values. Implementations must draw uniformly from
/// `0..=max` (0 meaning "no enemy").
pub trait SpawnRng {
    fn spawn_health(&mut self, max: u8) -> u8;
}

/// Production spawn source backed by any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct UniformSpawn<R> {
    rng: R,
}

impl<R: Rng> UniformSpawn<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformSpawn<Pcg32> {
    /// Seeded PCG source for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> SpawnRng for UniformSpawn<R> {
    fn spawn_health(&mut self, max: u8) -> u8 {
        self.rng.random_range(0..=max)
    }
}

/// Result of one lane advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Cells shifted and a new value spawned at the top
    Shifted,
    /// An enemy was already at cell 0; the lane was left untouched
    Breached,
}

/// Result of a projectile resolving against a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Cell was already empty (cleared since launch); nothing changed
    Miss,
    /// Health decremented but the enemy survives
    Damaged,
    /// Health reached 0
    Killed,
}

/// Enemy health per strip cell, 0 = empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    cells: Vec<u8>,
}

impl Lane {
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "lane needs at least one cell");
        Self {
            cells: vec![0; len],
        }
    }

    /// Build a lane from explicit cell values (hosts and tests).
    pub fn from_cells(cells: Vec<u8>) -> Self {
        debug_assert!(!cells.is_empty(), "lane needs at least one cell");
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell holds an enemy.
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|&hp| hp == 0)
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// Lowest-index occupied cell: the enemy nearest the player. This is the
    /// designed tie-break for targeting.
    pub fn first_occupied(&self) -> Option<usize> {
        self.cells.iter().position(|&hp| hp > 0)
    }

    /// Advance the lane one step toward the player.
    ///
    /// The terminal check runs first: an enemy already at cell 0 means the
    /// player loses the moment it would cross the boundary, and the lane is
    /// not mutated that tick. Otherwise every cell shifts down one index and
    /// the spawn end gets a fresh uniform roll in `0..=spawn_health_max`.
    pub fn advance(&mut self, spawn_health_max: u8, rng: &mut impl SpawnRng) -> AdvanceOutcome {
        if self.cells[0] > 0 {
            return AdvanceOutcome::Breached;
        }

        let last = self.cells.len() - 1;
        for i in 1..self.cells.len() {
            self.cells[i - 1] = self.cells[i];
        }
        self.cells[last] = rng.spawn_health(spawn_health_max);

        AdvanceOutcome::Shifted
    }

    /// Apply one point of projectile damage to `index`. A cell that emptied
    /// since the shot was launched is a miss, not an error.
    pub fn damage(&mut self, index: usize) -> HitOutcome {
        debug_assert!(index < self.cells.len(), "damage index out of bounds");
        match self.cells[index] {
            0 => HitOutcome::Miss,
            1 => {
                self.cells[index] = 0;
                HitOutcome::Killed
            }
            hp => {
                self.cells[index] = hp - 1;
                HitOutcome::Damaged
            }
        }
    }
}
