//! The per-tick update entry point
//!
//! A host calls [`tick`] at a bounded cadence (at least as often as the
//! projectile step interval) with a monotonic millisecond clock. The core
//! never sleeps: the game-over wait is a phase, not a blocking call.
//!
//! Per-tick order: sample the trigger once, advance the lane if its interval
//! elapsed (terminal check first), take in a launch request, then step and
//! resolve the in-flight projectile.

use super::lane::{AdvanceOutcome, HitOutcome, SpawnRng};
use super::projectile::Projectile;
use super::state::{GameEvent, GamePhase, GameState};

/// Input samples for a single tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Raw trigger signal, read once per tick
    pub trigger: bool,
    /// Acknowledge/restart signal; only honored while game over
    pub reset: bool,
}

/// Advance the game by one tick. Returns the events the host should feed to
/// its audio/visual collaborators.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    now_ms: u64,
    rng: &mut impl SpawnRng,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        // Only the reset signal gets out of here; no timers run.
        if input.reset {
            log::info!("reset acknowledged, starting over");
            state.reset();
        }
        return events;
    }

    // Exactly one raw input sample per tick keeps edge detection honest.
    let fire = state.trigger_fired(input.trigger);

    if state.advance_due(now_ms) {
        match state.lane.advance(state.config.spawn_health_max, rng) {
            AdvanceOutcome::Breached => {
                state.phase = GamePhase::GameOver;
                log::info!(
                    "game over: kills={} level={}",
                    state.difficulty.kill_count(),
                    state.difficulty.level()
                );
                events.push(GameEvent::GameOver);
                return events;
            }
            AdvanceOutcome::Shifted => state.mark_advanced(now_ms),
        }
    }

    if fire && state.projectile.is_none() {
        if let Some(shot) = Projectile::aim(&state.lane, now_ms) {
            state.projectile = Some(shot);
            events.push(GameEvent::ShotFired);
        }
    }

    if let Some(shot) = state.projectile.as_mut() {
        if shot.advance(now_ms, state.config.bullet_step_ms) {
            let target = shot.target;
            state.projectile = None;
            // A target emptied by a lane advance since launch is a miss.
            if state.lane.damage(target) == HitOutcome::Killed
                && state.difficulty.record_kill(&state.config)
            {
                let level = state.difficulty.level();
                log::info!(
                    "level {} (advance interval {} ms)",
                    level,
                    state.difficulty.interval_ms()
                );
                events.push(GameEvent::LevelUp { level });
            }
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, TriggerMode};
    use crate::sim::lane::{Lane, UniformSpawn};

    /// Deterministic spawn source for scripted scenarios.
    struct FixedSpawn(u8);

    impl SpawnRng for FixedSpawn {
        fn spawn_health(&mut self, _max: u8) -> u8 {
            self.0
        }
    }

    fn held_trigger() -> TickInput {
        TickInput {
            trigger: true,
            reset: false,
        }
    }

    #[test]
    fn single_enemy_is_shot_before_reaching_the_player() {
        // Spawn always rolls health 1, trigger held from the start. The
        // first advance at t=1000 puts an enemy at cell 19; the shot
        // launched the same tick covers the strip in 19 * 20 ms, well
        // before the next advance at t=2000.
        let mut state = GameState::new(Config::default());
        let mut rng = FixedSpawn(1);

        for t in (1000..=1400).step_by(20) {
            tick(&mut state, &held_trigger(), t, &mut rng);
        }

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.difficulty.kill_count(), 1);
        assert!(state.projectile.is_none());
        assert!(state.lane.is_clear());
    }

    #[test]
    fn unopposed_enemy_breaches_on_the_advance_after_reaching_cell_zero() {
        let mut state = GameState::new(Config::default());
        let mut rng = FixedSpawn(1);
        let idle = TickInput::default();

        // N advances put the first spawn at cell 0
        for k in 1..=20u64 {
            let events = tick(&mut state, &idle, k * 1000, &mut rng);
            assert!(events.is_empty());
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lane.cell(0), 1);

        // The next advance is the breach, and the lane is left untouched
        let before = state.lane.clone();
        let events = tick(&mut state, &idle, 21_000, &mut rng);
        assert_eq!(events, vec![GameEvent::GameOver]);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.is_over());
        assert_eq!(state.lane, before);
    }

    #[test]
    fn launch_targets_nearest_enemy_and_fires_event() {
        let mut state = GameState::new(Config::default());
        state.lane = Lane::from_cells(vec![0, 0, 2, 0, 1, 0, 0, 0, 0, 0]);
        let mut rng = FixedSpawn(0);

        let events = tick(&mut state, &held_trigger(), 10, &mut rng);
        assert_eq!(events, vec![GameEvent::ShotFired]);
        assert_eq!(state.projectile.unwrap().target, 2);
    }

    #[test]
    fn trigger_on_empty_lane_is_a_no_op() {
        let mut state = GameState::new(Config::default());
        let mut rng = FixedSpawn(0);
        let events = tick(&mut state, &held_trigger(), 10, &mut rng);
        assert!(events.is_empty());
        assert!(state.projectile.is_none());
    }

    #[test]
    fn held_trigger_fires_once_in_edge_mode() {
        let mut state = GameState::new(Config::default());
        state.lane = Lane::from_cells(vec![0, 1, 0, 1, 0]);
        let mut rng = FixedSpawn(0);

        let events = tick(&mut state, &held_trigger(), 10, &mut rng);
        assert_eq!(events, vec![GameEvent::ShotFired]);

        // Shot resolves at t=30 (one step to cell 1), killing the enemy.
        // The still-held trigger must not launch at the second target.
        tick(&mut state, &held_trigger(), 30, &mut rng);
        assert!(state.projectile.is_none());
        assert_eq!(state.difficulty.kill_count(), 1);

        let events = tick(&mut state, &held_trigger(), 50, &mut rng);
        assert!(events.is_empty());
        assert!(state.projectile.is_none());

        // Release and press again: a new shot goes out
        tick(&mut state, &TickInput::default(), 70, &mut rng);
        let events = tick(&mut state, &held_trigger(), 90, &mut rng);
        assert_eq!(events, vec![GameEvent::ShotFired]);
    }

    #[test]
    fn held_trigger_relaunches_in_level_mode() {
        let mut state = GameState::new(Config {
            trigger_mode: TriggerMode::Level,
            ..Config::default()
        });
        state.lane = Lane::from_cells(vec![0, 1, 0, 1, 0]);
        let mut rng = FixedSpawn(0);

        tick(&mut state, &held_trigger(), 10, &mut rng);
        tick(&mut state, &held_trigger(), 30, &mut rng); // resolves kill #1

        // Same held level immediately launches at the next enemy
        let events = tick(&mut state, &held_trigger(), 50, &mut rng);
        assert_eq!(events, vec![GameEvent::ShotFired]);
        assert_eq!(state.projectile.unwrap().target, 3);
    }

    #[test]
    fn shot_arriving_at_an_emptied_cell_is_a_silent_miss() {
        let mut state = GameState::new(Config::default());
        let mut cells = vec![0u8; 20];
        cells[3] = 1;
        state.lane = Lane::from_cells(cells);
        let mut rng = FixedSpawn(0);

        tick(&mut state, &held_trigger(), 10, &mut rng);
        assert_eq!(state.projectile.unwrap().target, 3);

        // Target cleared while the shot is mid-flight
        state.lane = Lane::new(20);

        for t in [30, 50, 70] {
            tick(&mut state, &TickInput::default(), t, &mut rng);
        }

        assert!(state.projectile.is_none());
        assert_eq!(state.difficulty.kill_count(), 0);
        assert!(state.lane.is_clear());
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn fifth_kill_levels_up_once() {
        let mut state = GameState::new(Config::default());
        for _ in 0..4 {
            state.difficulty.record_kill(&state.config);
        }
        let mut cells = vec![0u8; 20];
        cells[1] = 1;
        state.lane = Lane::from_cells(cells);
        let mut rng = FixedSpawn(0);

        tick(&mut state, &held_trigger(), 10, &mut rng);
        let events = tick(&mut state, &TickInput::default(), 30, &mut rng);
        assert_eq!(events, vec![GameEvent::LevelUp { level: 1 }]);
        assert_eq!(state.difficulty.kill_count(), 5);
    }

    #[test]
    fn game_over_ignores_everything_but_reset() {
        let mut state = GameState::new(Config::default());
        let mut cells = vec![0u8; 20];
        cells[0] = 1;
        state.lane = Lane::from_cells(cells);
        let mut rng = FixedSpawn(1);

        let events = tick(&mut state, &TickInput::default(), 1000, &mut rng);
        assert_eq!(events, vec![GameEvent::GameOver]);

        let frozen = state.clone();
        for t in [1100, 1200, 5000, 60_000] {
            let events = tick(&mut state, &held_trigger(), t, &mut rng);
            assert!(events.is_empty());
        }
        assert_eq!(state, frozen);
    }

    #[test]
    fn reset_restores_the_initial_state_exactly() {
        let config = Config::default();
        let mut state = GameState::new(config.clone());

        // Accumulate some difficulty, then lose
        for _ in 0..7 {
            state.difficulty.record_kill(&state.config);
        }
        let mut cells = vec![0u8; 20];
        cells[0] = 2;
        state.lane = Lane::from_cells(cells);
        let mut rng = FixedSpawn(1);
        tick(&mut state, &TickInput::default(), 1000, &mut rng);
        assert!(state.is_over());

        let reset = TickInput {
            trigger: false,
            reset: true,
        };
        let events = tick(&mut state, &reset, 2000, &mut rng);
        assert!(events.is_empty());
        assert_eq!(state, GameState::new(config));
    }

    #[test]
    fn same_seed_and_inputs_give_identical_runs() {
        let mut a = GameState::new(Config::default());
        let mut b = GameState::new(Config::default());
        let mut rng_a = UniformSpawn::seeded(99);
        let mut rng_b = UniformSpawn::seeded(99);

        for step in 0..500u64 {
            let input = TickInput {
                trigger: step % 3 == 0,
                reset: false,
            };
            let t = step * 10;
            let ev_a = tick(&mut a, &input, t, &mut rng_a);
            let ev_b = tick(&mut b, &input, t, &mut rng_b);
            assert_eq!(ev_a, ev_b);
        }
        assert_eq!(a, b);
    }
}
