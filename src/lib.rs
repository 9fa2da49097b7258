//! Strip Blaster - a lane-defense shooter on a strip of addressable LEDs
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lane, projectile, difficulty, game state)
//! - `render`: Pure projection of game state to per-LED colors
//! - `config`: Fixed-at-start game parameters and hardware presets
//!
//! The simulation never touches hardware or sleeps. A host calls
//! [`sim::tick`] at a bounded cadence with a monotonic millisecond clock and
//! the sampled trigger input, then pushes [`render::project`] output to
//! whatever actually owns the LEDs.

pub mod config;
pub mod render;
pub mod sim;

pub use config::{Config, TriggerMode};
pub use render::{Palette, Rgb, project};

/// Game tuning constants (defaults for [`Config`])
pub mod consts {
    /// Number of cells on the strip
    pub const STRIP_LEN: usize = 20;
    /// Projectile step interval (milliseconds); constant, never scales
    pub const BULLET_STEP_MS: u64 = 20;
    /// Lane advance interval at level 0 (milliseconds)
    pub const START_INTERVAL_MS: u64 = 1000;
    /// Floor for the lane advance interval (milliseconds)
    pub const MIN_INTERVAL_MS: u64 = 200;
    /// Advance interval reduction per difficulty level (milliseconds)
    pub const SPEED_INCREMENT_MS: u64 = 50;
    /// Kills required to gain one difficulty level
    pub const KILLS_PER_LEVEL: u32 = 5;
    /// Highest spawnable enemy health
    pub const MAX_SPAWN_HEALTH: u8 = 3;
}
