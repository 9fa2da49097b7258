//! The in-flight projectile
//!
//! At most one shot is airborne at a time. It locks onto a target cell at
//! launch and steps toward it on its own constant timer, independent of (and
//! much faster than) the lane advance timer.

use serde::{Deserialize, Serialize};

use super::lane::Lane;

/// A single shot travelling from cell 0 toward its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projectile {
    /// Current strip position
    pub pos: usize,
    /// Cell the shot was aimed at when launched
    pub target: usize,
    last_step_ms: u64,
}

impl Projectile {
    /// Aim at the enemy nearest the player. Returns `None` when the lane is
    /// empty; callers must also ensure no other shot is in flight.
    pub fn aim(lane: &Lane, now_ms: u64) -> Option<Self> {
        lane.first_occupied().map(|target| Self {
            pos: 0,
            target,
            last_step_ms: now_ms,
        })
    }

    /// Step one cell forward if `step_ms` has elapsed since the last step.
    /// Returns `true` once the shot has reached (or passed) its target and
    /// should resolve.
    pub fn advance(&mut self, now_ms: u64, step_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_step_ms) < step_ms {
            return false;
        }
        self.pos += 1;
        self.last_step_ms = now_ms;
        self.pos >= self.target
    }
}
