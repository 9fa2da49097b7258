//! Render projection
//!
//! Pure mapping from game state to one color per LED. The host pushes the
//! returned frame to whatever owns the strip; nothing here touches hardware.

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState};

/// One LED color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const OFF: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Color palette keyed by cell health, plus the projectile and game-over
/// colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub off: Rgb,
    pub health_1: Rgb,
    pub health_2: Rgb,
    pub health_3: Rgb,
    pub projectile: Rgb,
    pub game_over: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            off: Rgb::OFF,
            health_1: Rgb::new(0, 200, 0),
            health_2: Rgb::new(0, 0, 200),
            health_3: Rgb::new(200, 200, 200),
            projectile: Rgb::new(255, 255, 0),
            game_over: Rgb::new(200, 0, 0),
        }
    }
}

impl Palette {
    /// Color for a cell with the given health. Health above 3 clamps to the
    /// toughest color.
    pub fn for_health(&self, health: u8) -> Rgb {
        match health {
            0 => self.off,
            1 => self.health_1,
            2 => self.health_2,
            _ => self.health_3,
        }
    }
}

/// Project the game state onto the strip: health colors per cell, the
/// in-flight projectile overriding its position, and a full game-over fill
/// while waiting for reset. Call once per tick, after [`crate::sim::tick`].
pub fn project(state: &GameState, palette: &Palette) -> Vec<Rgb> {
    if state.phase == GamePhase::GameOver {
        return vec![palette.game_over; state.lane.len()];
    }

    let mut frame: Vec<Rgb> = state
        .lane
        .cells()
        .iter()
        .map(|&hp| palette.for_health(hp))
        .collect();

    if let Some(shot) = &state.projectile {
        if shot.pos < frame.len() {
            frame[shot.pos] = palette.projectile;
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::{GamePhase, Lane, Projectile};

    #[test]
    fn health_maps_to_palette_colors() {
        let palette = Palette::default();
        let mut state = GameState::new(Config::default());
        state.lane = Lane::from_cells(vec![0, 1, 2, 3, 0]);

        let frame = project(&state, &palette);
        assert_eq!(
            frame,
            vec![
                palette.off,
                palette.health_1,
                palette.health_2,
                palette.health_3,
                palette.off,
            ]
        );
    }

    #[test]
    fn projectile_overrides_its_cell() {
        let palette = Palette::default();
        let mut state = GameState::new(Config::default());
        state.lane = Lane::from_cells(vec![1, 0, 0, 2]);
        state.projectile = Projectile::aim(&state.lane, 0);

        let frame = project(&state, &palette);
        assert_eq!(frame[0], palette.projectile);
        assert_eq!(frame[3], palette.health_2);
    }

    #[test]
    fn game_over_fills_the_strip() {
        let palette = Palette::default();
        let mut state = GameState::new(Config::default());
        state.phase = GamePhase::GameOver;

        let frame = project(&state, &palette);
        assert_eq!(frame.len(), state.lane.len());
        assert!(frame.iter().all(|&c| c == palette.game_over));
    }

    #[test]
    fn health_above_three_clamps_to_toughest_color() {
        let palette = Palette::default();
        assert_eq!(palette.for_health(7), palette.health_3);
    }
}
