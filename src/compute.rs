//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG and tracing.

use rand::Rng;
use tracing::info;

use crate::collision::{check_collisions, check_power_up_pickup};
use crate::entities::{Bat, GameState, GameStatus, LuminousDot, Moth, Position};
use crate::input::HeldDirections;
use crate::motion::{move_away_from, move_toward, playable_bounds};
use crate::power_up::PowerUp;
use crate::settings::{
    DOT_SIZE, DOT_SPEED, DRAGONFLY_SIZE, DRAGONFLY_STEP, FIRST_BAT_DELAY_MS, MOTH_SIZE,
    MOTH_SPEED, PLAYABLE_HEIGHT, PLAYABLE_OFFSET_X, PLAYABLE_OFFSET_Y, PLAYABLE_WIDTH,
    SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::spawn::{max_moths_for, maybe_spawn_bat, maybe_spawn_dot, maybe_spawn_moth};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the state for a fresh round starting at `now`.  The first moth is
/// spawned immediately and the first bat is due 5 s later.
pub fn init_state(best_score: u32, now: u64, rng: &mut impl Rng) -> GameState {
    let state = GameState {
        dragonfly: Position::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
        moths: Vec::new(),
        bats: Vec::new(),
        dots: Vec::new(),
        power_up: PowerUp::Inactive,
        score: 0,
        best_score,
        max_moths: max_moths_for(0),
        status: GameStatus::Playing,
        bat_spawn_interval: FIRST_BAT_DELAY_MS,
        last_bat_spawn_time: now,
        current_time: now,
    };
    maybe_spawn_moth(&state, rng)
}

/// Start a new round after a game over, folding the finished round's score
/// into the best score.
pub fn restart(state: &GameState, now: u64, rng: &mut impl Rng) -> GameState {
    let best_score = state.best_score.max(state.score);
    info!(score = state.score, best_score, "starting new round");
    init_state(best_score, now, rng)
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Apply held directions (8 px per axis, diagonals not normalised) and wrap
/// the dragonfly around the playable area.
pub fn steer(state: &GameState, held: &HeldDirections) -> GameState {
    let mut pos = state.dragonfly;
    if state.status == GameStatus::Playing {
        if held.left {
            pos.x -= DRAGONFLY_STEP;
        }
        if held.right {
            pos.x += DRAGONFLY_STEP;
        }
        if held.up {
            pos.y -= DRAGONFLY_STEP;
        }
        if held.down {
            pos.y += DRAGONFLY_STEP;
        }
    }
    GameState {
        dragonfly: wrap_dragonfly(pos),
        ..state.clone()
    }
}

/// Toroidal wrap: leaving one side by more than the dragonfly's own size
/// re-enters from the opposite side.
pub fn wrap_dragonfly(pos: Position) -> Position {
    let left = PLAYABLE_OFFSET_X - DRAGONFLY_SIZE;
    let right = PLAYABLE_OFFSET_X + PLAYABLE_WIDTH;
    let top = PLAYABLE_OFFSET_Y - DRAGONFLY_SIZE;
    let bottom = PLAYABLE_OFFSET_Y + PLAYABLE_HEIGHT;

    let x = if pos.x < left {
        right
    } else if pos.x > right {
        left
    } else {
        pos.x
    };
    let y = if pos.y < top {
        bottom
    } else if pos.y > bottom {
        top
    } else {
        pos.y
    };
    Position { x, y }
}

// ── Creature movement ────────────────────────────────────────────────────────

pub fn move_bats(state: &GameState) -> GameState {
    let bats = state
        .bats
        .iter()
        .map(|b| Bat {
            pos: move_toward(b.pos, state.dragonfly, b.speed as f32),
            ..b.clone()
        })
        .collect();
    GameState {
        bats,
        ..state.clone()
    }
}

pub fn move_moths(state: &GameState) -> GameState {
    let bounds = playable_bounds(MOTH_SIZE);
    let moths = state
        .moths
        .iter()
        .map(|m| Moth {
            pos: move_away_from(m.pos, state.dragonfly, MOTH_SPEED, &bounds),
        })
        .collect();
    GameState {
        moths,
        ..state.clone()
    }
}

pub fn move_dot(state: &GameState) -> GameState {
    let bounds = playable_bounds(DOT_SIZE);
    let dots = state
        .dots
        .iter()
        .map(|d| LuminousDot {
            pos: move_away_from(d.pos, state.dragonfly, DOT_SPEED, &bounds),
        })
        .collect();
    GameState {
        dots,
        ..state.clone()
    }
}

// ── Per-tick update (nearly pure — RNG is injected) ─────────────────────────

/// Advance the simulation by one tick at clock reading `now`.  A finished
/// round is returned unchanged.
pub fn tick(state: &GameState, now: u64, rng: &mut impl Rng) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }

    // ── 1. Clock & power-up expiry ───────────────────────────────────────────
    let power_up = state.power_up.update(now);
    if state.power_up.is_active() && !power_up.is_active() {
        info!(now, "power-up expired");
    }
    let s = GameState {
        current_time: now,
        power_up,
        ..state.clone()
    };

    // ── 2. Spawning that happens before movement ─────────────────────────────
    let s = maybe_spawn_dot(&s, rng);
    let s = GameState {
        max_moths: max_moths_for(s.score),
        ..s
    };
    let s = maybe_spawn_bat(&s, rng);

    // ── 3. Movement ──────────────────────────────────────────────────────────
    let s = move_bats(&s);
    let s = move_moths(&s);
    let s = move_dot(&s);

    // ── 4. Collisions ────────────────────────────────────────────────────────
    let s = check_power_up_pickup(&s);
    let s = check_collisions(&s);

    // ── 5. Replenish moths ───────────────────────────────────────────────────
    maybe_spawn_moth(&s, rng)
}
