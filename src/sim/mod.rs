//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Host-supplied monotonic clock only (no internal sleeps or waits)
//! - Injected spawn randomness only
//! - No rendering or hardware dependencies

pub mod difficulty;
pub mod lane;
pub mod projectile;
pub mod state;
pub mod tick;

pub use difficulty::Difficulty;
pub use lane::{AdvanceOutcome, HitOutcome, Lane, SpawnRng, UniformSpawn};
pub use projectile::Projectile;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
