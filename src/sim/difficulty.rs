//! Difficulty progression
//!
//! Level and advance interval are pure functions of the kill count, so the
//! tracker can be recomputed from `kill_count` alone and never drifts.

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Difficulty level for a given kill count.
pub fn level_for(config: &Config, kill_count: u32) -> u32 {
    kill_count / config.kills_per_level
}

/// Lane advance interval for a given kill count, floored at the minimum.
pub fn interval_for(config: &Config, kill_count: u32) -> u64 {
    let reduction = u64::from(level_for(config, kill_count)) * config.interval_decrement_ms;
    config
        .start_interval_ms
        .saturating_sub(reduction)
        .max(config.min_interval_ms)
}

/// Kill-count driven difficulty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    kill_count: u32,
    level: u32,
    interval_ms: u64,
}

impl Difficulty {
    pub fn new(config: &Config) -> Self {
        Self {
            kill_count: 0,
            level: 0,
            interval_ms: config.start_interval_ms,
        }
    }

    pub fn kill_count(&self) -> u32 {
        self.kill_count
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current lane advance interval in milliseconds.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Record one kill and recompute level and interval. Returns `true` when
    /// the level increased, so the host can fire a one-shot notification.
    pub fn record_kill(&mut self, config: &Config) -> bool {
        self.kill_count += 1;
        let new_level = level_for(config, self.kill_count);
        self.interval_ms = interval_for(config, self.kill_count);
        let leveled_up = new_level > self.level;
        self.level = new_level;
        leveled_up
    }
}
