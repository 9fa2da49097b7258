//! Game configuration
//!
//! All values are fixed when a game is created; nothing here is mutated at
//! runtime. The two supported hardware setups differ only in enemy health
//! range and trigger semantics, so they are presets over one [`Config`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How the raw trigger sample is turned into launch requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TriggerMode {
    /// Launch on a rising edge of the sampled signal. The core compares the
    /// current sample against the previous tick's sample, so a button held
    /// across many ticks fires once. Use this when the host hands the core
    /// the raw level of a stable (hardware- or host-debounced) signal.
    #[default]
    Edge,
    /// Launch whenever the sample is high. This assumes the host already
    /// delivers edge-clean pulses (high for exactly one tick per press);
    /// a raw held button in this mode fires every tick.
    Level,
}

impl TriggerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerMode::Edge => "Edge",
            TriggerMode::Level => "Level",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "edge" => Some(TriggerMode::Edge),
            "level" => Some(TriggerMode::Level),
            _ => None,
        }
    }
}

/// Fixed-at-start game parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Number of cells on the strip; index 0 is the player's end
    pub strip_len: usize,
    /// Milliseconds between projectile steps
    pub bullet_step_ms: u64,
    /// Lane advance interval at level 0
    pub start_interval_ms: u64,
    /// Advance interval never drops below this
    pub min_interval_ms: u64,
    /// Advance interval reduction per level
    pub interval_decrement_ms: u64,
    /// Kills required per difficulty level
    pub kills_per_level: u32,
    /// Spawned enemies get health in 0..=spawn_health_max (0 = no enemy)
    pub spawn_health_max: u8,
    /// Trigger input semantics
    pub trigger_mode: TriggerMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strip_len: STRIP_LEN,
            bullet_step_ms: BULLET_STEP_MS,
            start_interval_ms: START_INTERVAL_MS,
            min_interval_ms: MIN_INTERVAL_MS,
            interval_decrement_ms: SPEED_INCREMENT_MS,
            kills_per_level: KILLS_PER_LEVEL,
            spawn_health_max: MAX_SPAWN_HEALTH,
            trigger_mode: TriggerMode::Edge,
        }
    }
}

impl Config {
    /// Strip on an external pin with a wired pull-up button. The raw button
    /// level is passed straight in, so the core edge-detects it. Enemies
    /// spawn with up to 3 health.
    pub fn wired_button() -> Self {
        Self::default()
    }

    /// Strip driven from a board with a built-in button whose driver reports
    /// one clean pulse per press. Enemies spawn with up to 2 health.
    pub fn onboard_button() -> Self {
        Self {
            spawn_health_max: 2,
            trigger_mode: TriggerMode::Level,
            ..Self::default()
        }
    }
}
