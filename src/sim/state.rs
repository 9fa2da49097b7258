//! Game state and the win/loss state machine
//!
//! Everything the game knows lives in one [`GameState`] value. It is created
//! at startup, mutated only by [`super::tick`], and replaced wholesale on
//! reset, so there is no hidden shared state anywhere.

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::lane::Lane;
use super::projectile::Projectile;
use crate::config::{Config, TriggerMode};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// An enemy crossed the player boundary; waiting for the reset signal
    GameOver,
}

/// Observable signals for host-owned audio/visual feedback. The core emits
/// these from [`super::tick`] instead of doing any I/O itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A projectile was launched
    ShotFired,
    /// The difficulty level increased (one-shot, on the kill that crossed
    /// the threshold)
    LevelUp { level: u32 },
    /// An enemy reached the player boundary
    GameOver,
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub config: Config,
    pub phase: GamePhase,
    pub lane: Lane,
    pub projectile: Option<Projectile>,
    pub difficulty: Difficulty,
    /// Monotonic timestamp of the last lane advance
    last_advance_ms: u64,
    /// Previous raw trigger sample, for edge detection
    trigger_was_high: bool,
}

impl GameState {
    /// Fresh game: empty lane, no shot in flight, level 0.
    pub fn new(config: Config) -> Self {
        debug_assert!(config.strip_len > 0);
        debug_assert!(config.min_interval_ms <= config.start_interval_ms);
        Self {
            phase: GamePhase::Playing,
            lane: Lane::new(config.strip_len),
            projectile: None,
            difficulty: Difficulty::new(&config),
            last_advance_ms: 0,
            trigger_was_high: false,
            config,
        }
    }

    /// Non-blocking terminal query for hosts driving a game-over display.
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Reinitialize to a state identical to a fresh start. No difficulty or
    /// lane contents carry over.
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }

    /// Turn this tick's raw trigger sample into a launch request, applying
    /// edge detection when the config asks for it. Must be called exactly
    /// once per tick so the previous-sample history stays aligned.
    pub(super) fn trigger_fired(&mut self, sample: bool) -> bool {
        let fired = match self.config.trigger_mode {
            TriggerMode::Edge => sample && !self.trigger_was_high,
            TriggerMode::Level => sample,
        };
        self.trigger_was_high = sample;
        fired
    }

    pub(super) fn advance_due(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_advance_ms) >= self.difficulty.interval_ms()
    }

    pub(super) fn mark_advanced(&mut self, now_ms: u64) {
        self.last_advance_ms = now_ms;
    }
}
