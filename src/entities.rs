//! All game entity types — pure data, no logic.

use crate::power_up::PowerUp;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// A point in screen pixels.  For entities this is the top-left corner of
/// their hitbox.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Position { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned rectangle a moving entity's top-left corner is clamped into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

// ── Creatures ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Moth {
    pub pos: Position,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bat {
    pub pos: Position,
    /// Pixels per tick, fixed for the bat's lifetime.
    pub speed: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LuminousDot {
    pub pos: Position,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub dragonfly: Position,
    /// Kept in spawn order; collision checks and the dragonfly's heading
    /// both depend on it.
    pub moths: Vec<Moth>,
    pub bats: Vec<Bat>,
    /// Never holds more than one dot.
    pub dots: Vec<LuminousDot>,
    pub power_up: PowerUp,
    pub score: u32,
    pub best_score: u32,
    pub max_moths: usize,
    pub status: GameStatus,
    /// Delay until the next bat, measured from `last_bat_spawn_time`.
    pub bat_spawn_interval: u64,
    pub last_bat_spawn_time: u64,
    /// Clock reading of the tick being simulated.
    pub current_time: u64,
}
