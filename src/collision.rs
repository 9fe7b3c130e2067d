//! Collision rules — overlap tests and their score/removal effects.
//!
//! Every public function takes the current `GameState` and returns a new one,
//! like the rest of the simulation core.

use tracing::{debug, info};

use crate::entities::{GameState, GameStatus, Position};
use crate::power_up::PowerUp;
use crate::settings::{
    BAT_HITBOX, BAT_POINTS, DOT_SIZE, DRAGONFLY_POWERED_SIZE, DRAGONFLY_SIZE, MOTH_POINTS,
    MOTH_SIZE,
};

/// Axis-aligned overlap of box `a` (`a_w`×`a_h`) and box `b` (`b_w`×`b_h`).
/// Touching edges do not count.
pub fn boxes_overlap(a: Position, a_w: f32, a_h: f32, b: Position, b_w: f32, b_h: f32) -> bool {
    a.x < b.x + b_w && a.x + a_w > b.x && a.y < b.y + b_h && a.y + a_h > b.y
}

/// Square-box shorthand for `boxes_overlap`.
fn squares_overlap(a: Position, a_size: f32, b: Position, b_size: f32) -> bool {
    boxes_overlap(a, a_size, a_size, b, b_size, b_size)
}

/// Side of the dragonfly's hitbox for moth and bat checks.
pub fn dragonfly_hitbox(power_up: &PowerUp) -> f32 {
    if power_up.is_active() {
        DRAGONFLY_POWERED_SIZE
    } else {
        DRAGONFLY_SIZE
    }
}

/// Pick up the luminous dot.  The pickup box is always the unscaled 50×50.
pub fn check_power_up_pickup(state: &GameState) -> GameState {
    let Some(dot) = state.dots.first() else {
        return state.clone();
    };
    if !squares_overlap(state.dragonfly, DRAGONFLY_SIZE, dot.pos, DOT_SIZE) {
        return state.clone();
    }
    info!(now = state.current_time, "power-up activated");
    GameState {
        dots: Vec::new(),
        power_up: PowerUp::activate(state.current_time),
        ..state.clone()
    }
}

/// Moth, bat and game-over checks, in that order.
///
/// At most one moth and one bat are eaten per tick: the first overlapping
/// entity in collection order wins and the scan stops there.
pub fn check_collisions(state: &GameState) -> GameState {
    let hitbox = dragonfly_hitbox(&state.power_up);
    let mut moths = state.moths.clone();
    let mut bats = state.bats.clone();
    let mut score = state.score;
    let mut status = state.status;

    // ── Moths ────────────────────────────────────────────────────────────────
    if let Some(i) = moths
        .iter()
        .position(|m| squares_overlap(state.dragonfly, hitbox, m.pos, MOTH_SIZE))
    {
        moths.remove(i);
        score += MOTH_POINTS;
        debug!(score, "moth eaten");
    }

    // ── Bats (edible only while powered up) ──────────────────────────────────
    if state.power_up.is_active() {
        if let Some(i) = bats
            .iter()
            .position(|b| squares_overlap(state.dragonfly, hitbox, b.pos, BAT_HITBOX))
        {
            bats.remove(i);
            score += BAT_POINTS;
            debug!(score, "bat eaten");
        }
    } else if bats
        .iter()
        .any(|b| squares_overlap(state.dragonfly, DRAGONFLY_SIZE, b.pos, BAT_HITBOX))
    {
        // ── Game over ────────────────────────────────────────────────────────
        status = GameStatus::GameOver;
        info!(score, "dragonfly caught by a bat");
    }

    GameState {
        moths,
        bats,
        score,
        status,
        ..state.clone()
    }
}
