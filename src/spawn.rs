//! Spawn cadence for moths, bats and the luminous dot.
//!
//! All randomness comes through the injected `rng` so callers control
//! determinism (tests pass a seeded `StdRng`).

use rand::Rng;
use tracing::{debug, info};

use crate::entities::{Bat, GameState, LuminousDot, Moth, Position};
use crate::settings::{
    BAT_MAX_SPEED, BAT_MIN_SPEED, BAT_SPAWN_INTERVAL_MS, BAT_SPAWN_MARGIN, DOT_SIZE,
    DOT_SPAWN_CHANCE, MOTH_SIZE, PLAYABLE_HEIGHT, PLAYABLE_OFFSET_X, PLAYABLE_OFFSET_Y,
    PLAYABLE_WIDTH, POINTS_PER_EXTRA_MOTH, SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// Moth cap for a given score: one extra moth per 50 points.
pub fn max_moths_for(score: u32) -> usize {
    ((score / POINTS_PER_EXTRA_MOTH) as usize + 1).max(1)
}

/// Uniform whole-pixel position for a square entity of side `size` that
/// fits entirely inside the playable area.
fn random_playable_position(rng: &mut impl Rng, size: f32) -> Position {
    let min_x = PLAYABLE_OFFSET_X as i32;
    let min_y = PLAYABLE_OFFSET_Y as i32;
    let max_x = (PLAYABLE_OFFSET_X + PLAYABLE_WIDTH - size) as i32;
    let max_y = (PLAYABLE_OFFSET_Y + PLAYABLE_HEIGHT - size) as i32;
    Position {
        x: rng.gen_range(min_x..=max_x) as f32,
        y: rng.gen_range(min_y..=max_y) as f32,
    }
}

/// Independent 2% roll each tick while no dot is live.
pub fn maybe_spawn_dot(state: &GameState, rng: &mut impl Rng) -> GameState {
    if !state.dots.is_empty() || !rng.gen_bool(DOT_SPAWN_CHANCE) {
        return state.clone();
    }
    let pos = random_playable_position(rng, DOT_SIZE);
    debug!(x = pos.x, y = pos.y, "luminous dot spawned");
    GameState {
        dots: vec![LuminousDot { pos }],
        ..state.clone()
    }
}

/// Add a single moth if below the cap.  A larger deficit closes one moth
/// per tick.
pub fn maybe_spawn_moth(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.moths.len() >= state.max_moths {
        return state.clone();
    }
    let mut moths = state.moths.clone();
    moths.push(Moth {
        pos: random_playable_position(rng, MOTH_SIZE),
    });
    GameState {
        moths,
        ..state.clone()
    }
}

/// A bat 40 px outside a random screen edge, with a random fixed speed.
pub fn random_bat(rng: &mut impl Rng) -> Bat {
    let along_x = rng.gen_range(0..=SCREEN_WIDTH as i32) as f32;
    let along_y = rng.gen_range(0..=SCREEN_HEIGHT as i32) as f32;
    let pos = match rng.gen_range(0..4) {
        0 => Position::new(along_x, -BAT_SPAWN_MARGIN),
        1 => Position::new(along_x, SCREEN_HEIGHT + BAT_SPAWN_MARGIN),
        2 => Position::new(-BAT_SPAWN_MARGIN, along_y),
        _ => Position::new(SCREEN_WIDTH + BAT_SPAWN_MARGIN, along_y),
    };
    Bat {
        pos,
        speed: rng.gen_range(BAT_MIN_SPEED..=BAT_MAX_SPEED),
    }
}

/// Spawn a bat once `bat_spawn_interval` has elapsed since the last one.
/// The first interval is the short initial delay; every later one is 15 s.
pub fn maybe_spawn_bat(state: &GameState, rng: &mut impl Rng) -> GameState {
    let elapsed = state.current_time.saturating_sub(state.last_bat_spawn_time);
    if elapsed < state.bat_spawn_interval {
        return state.clone();
    }
    let bat = random_bat(rng);
    info!(x = bat.pos.x, y = bat.pos.y, speed = bat.speed, "bat spawned");
    let mut bats = state.bats.clone();
    bats.push(bat);
    GameState {
        bats,
        last_bat_spawn_time: state.current_time,
        bat_spawn_interval: BAT_SPAWN_INTERVAL_MS,
        ..state.clone()
    }
}
