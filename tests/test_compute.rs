use moth_hunt::compute::*;
use moth_hunt::entities::*;
use moth_hunt::input::HeldDirections;
use moth_hunt::power_up::PowerUp;
use moth_hunt::settings::*;
use moth_hunt::spawn::max_moths_for;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn make_state() -> GameState {
    GameState {
        dragonfly: Position::new(800.0, 400.0),
        moths: Vec::new(),
        bats: Vec::new(),
        dots: Vec::new(),
        power_up: PowerUp::Inactive,
        score: 0,
        best_score: 0,
        max_moths: 1,
        status: GameStatus::Playing,
        bat_spawn_interval: FIRST_BAT_DELAY_MS,
        last_bat_spawn_time: 0,
        current_time: 0,
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn held(up: bool, down: bool, left: bool, right: bool) -> HeldDirections {
    HeldDirections { up, down, left, right }
}

// ── init_state / restart ──────────────────────────────────────────────────────

#[test]
fn init_state_starts_centred_with_one_moth() {
    let s = init_state(0, 1_000, &mut seeded_rng());
    assert_eq!(s.dragonfly, Position::new(800.0, 400.0));
    assert_eq!(s.moths.len(), 1);
    assert!(s.bats.is_empty());
    assert!(s.dots.is_empty());
    assert_eq!(s.score, 0);
    assert_eq!(s.max_moths, 1);
    assert_eq!(s.status, GameStatus::Playing);
    assert_eq!(s.power_up, PowerUp::Inactive);
    assert_eq!(s.bat_spawn_interval, FIRST_BAT_DELAY_MS);
    assert_eq!(s.last_bat_spawn_time, 1_000);
}

#[test]
fn init_state_keeps_best_score() {
    let s = init_state(85, 0, &mut seeded_rng());
    assert_eq!(s.best_score, 85);
}

#[test]
fn restart_folds_score_into_best() {
    let mut s = make_state();
    s.score = 120;
    s.best_score = 40;
    s.status = GameStatus::GameOver;
    s.power_up = PowerUp::Active { started_at: 0 };
    s.dots.push(LuminousDot { pos: Position::new(100.0, 100.0) });
    s.bats.push(Bat { pos: Position::new(800.0, 400.0), speed: 5 });
    s.dragonfly = Position::new(10.0, 10.0);

    let s2 = restart(&s, 30_000, &mut seeded_rng());
    assert_eq!(s2.best_score, 120);
    assert_eq!(s2.score, 0);
    assert_eq!(s2.status, GameStatus::Playing);
    assert_eq!(s2.power_up, PowerUp::Inactive);
    assert!(s2.dots.is_empty());
    assert!(s2.bats.is_empty());
    assert_eq!(s2.moths.len(), 1);
    assert_eq!(s2.dragonfly, Position::new(800.0, 400.0));
    assert_eq!(s2.last_bat_spawn_time, 30_000);
}

#[test]
fn restart_never_lowers_best() {
    let mut s = make_state();
    s.score = 10;
    s.best_score = 95;
    let s2 = restart(&s, 0, &mut seeded_rng());
    assert_eq!(s2.best_score, 95);
}

// ── steer ─────────────────────────────────────────────────────────────────────

#[test]
fn steer_each_direction() {
    let s = make_state();
    assert_eq!(steer(&s, &held(true, false, false, false)).dragonfly, Position::new(800.0, 392.0));
    assert_eq!(steer(&s, &held(false, true, false, false)).dragonfly, Position::new(800.0, 408.0));
    assert_eq!(steer(&s, &held(false, false, true, false)).dragonfly, Position::new(792.0, 400.0));
    assert_eq!(steer(&s, &held(false, false, false, true)).dragonfly, Position::new(808.0, 400.0));
}

#[test]
fn steer_diagonal_is_not_normalised() {
    let s = make_state();
    let s2 = steer(&s, &held(true, false, false, true));
    assert_eq!(s2.dragonfly, Position::new(808.0, 392.0));
}

#[test]
fn steer_opposite_keys_cancel() {
    let s = make_state();
    let s2 = steer(&s, &held(true, true, true, true));
    assert_eq!(s2.dragonfly, s.dragonfly);
}

#[test]
fn steer_ignored_after_game_over() {
    let mut s = make_state();
    s.status = GameStatus::GameOver;
    let s2 = steer(&s, &held(false, false, true, false));
    assert_eq!(s2.dragonfly, s.dragonfly);
}

#[test]
fn steer_does_not_mutate_original() {
    let s = make_state();
    let _ = steer(&s, &held(false, false, false, true));
    assert_eq!(s.dragonfly, Position::new(800.0, 400.0));
}

// ── wrap_dragonfly ────────────────────────────────────────────────────────────

#[test]
fn wrap_left_to_right() {
    let p = wrap_dragonfly(Position::new(-21.0, 400.0));
    assert_eq!(p, Position::new(1570.0, 400.0));
}

#[test]
fn wrap_right_to_left() {
    let p = wrap_dragonfly(Position::new(1571.0, 400.0));
    assert_eq!(p, Position::new(-20.0, 400.0));
}

#[test]
fn wrap_top_to_bottom_and_back() {
    assert_eq!(wrap_dragonfly(Position::new(800.0, -21.0)), Position::new(800.0, 770.0));
    assert_eq!(wrap_dragonfly(Position::new(800.0, 771.0)), Position::new(800.0, -20.0));
}

#[test]
fn wrap_leaves_edges_alone() {
    for p in [
        Position::new(-20.0, -20.0),
        Position::new(1570.0, 770.0),
        Position::new(800.0, 400.0),
    ] {
        assert_eq!(wrap_dragonfly(p), p);
    }
}

#[test]
fn steering_off_the_left_edge_wraps() {
    let mut s = make_state();
    s.dragonfly = Position::new(-16.0, 400.0);
    let s2 = steer(&s, &held(false, false, true, false));
    assert_eq!(s2.dragonfly.x, PLAYABLE_OFFSET_X + PLAYABLE_WIDTH);
}

// ── creature movement ─────────────────────────────────────────────────────────

#[test]
fn bats_close_in_at_their_own_speed() {
    let mut s = make_state();
    s.bats.push(Bat { pos: Position::new(-40.0, 400.0), speed: 3 });
    s.bats.push(Bat { pos: Position::new(800.0, 840.0), speed: 6 });
    let s2 = move_bats(&s);
    assert_eq!(s2.bats[0].pos, Position::new(-37.0, 400.0));
    assert_eq!(s2.bats[1].pos, Position::new(800.0, 834.0));
    assert_eq!(s2.bats[0].speed, 3);
}

#[test]
fn moths_and_dot_flee() {
    let mut s = make_state();
    s.moths.push(Moth { pos: Position::new(900.0, 400.0) });
    s.dots.push(LuminousDot { pos: Position::new(800.0, 300.0) });
    let s2 = move_dot(&move_moths(&s));
    assert_eq!(s2.moths[0].pos, Position::new(902.0, 400.0));
    assert_eq!(s2.dots[0].pos, Position::new(800.0, 298.0));
}

// ── tick ──────────────────────────────────────────────────────────────────────

#[test]
fn tick_records_time() {
    let s = make_state();
    let s2 = tick(&s, 16, &mut seeded_rng());
    assert_eq!(s2.current_time, 16);
}

#[test]
fn tick_recomputes_moth_cap() {
    for (score, expected) in [(0, 1), (49, 1), (50, 2), (120, 3)] {
        let mut s = make_state();
        s.score = score;
        s.max_moths = 1;
        let s2 = tick(&s, 16, &mut seeded_rng());
        assert_eq!(s2.max_moths, expected, "score {score}");
    }
}

#[test]
fn tick_spawns_moth_when_below_cap() {
    let s = make_state();
    let s2 = tick(&s, 16, &mut seeded_rng());
    assert_eq!(s2.moths.len(), 1);
}

#[test]
fn tick_eats_at_most_one_moth() {
    let mut s = make_state();
    for _ in 0..3 {
        // Sitting exactly on the dragonfly: zero-distance guard keeps them put.
        s.moths.push(Moth { pos: s.dragonfly });
    }
    let s2 = tick(&s, 16, &mut seeded_rng());
    assert_eq!(s2.score, 5);
    assert_eq!(s2.moths.len(), 2);
}

#[test]
fn tick_is_noop_after_game_over() {
    let mut s = make_state();
    s.status = GameStatus::GameOver;
    s.score = 25;
    let s2 = tick(&s, 99_000, &mut seeded_rng());
    assert_eq!(s2.status, GameStatus::GameOver);
    assert_eq!(s2.current_time, s.current_time);
    assert_eq!(s2.score, 25);
}

#[test]
fn tick_bat_contact_ends_round() {
    let mut s = make_state();
    s.last_bat_spawn_time = 0;
    s.bats.push(Bat { pos: Position::new(810.0, 410.0), speed: 3 });
    let s2 = tick(&s, 16, &mut seeded_rng());
    assert_eq!(s2.status, GameStatus::GameOver);
}

#[test]
fn tick_power_up_turns_bat_into_prey() {
    let mut s = make_state();
    s.power_up = PowerUp::Active { started_at: 0 };
    s.bats.push(Bat { pos: Position::new(810.0, 410.0), speed: 3 });
    let s2 = tick(&s, 16, &mut seeded_rng());
    assert_eq!(s2.status, GameStatus::Playing);
    assert!(s2.bats.is_empty());
    assert_eq!(s2.score, 10);
}

#[test]
fn tick_expires_power_up_before_collisions() {
    let mut s = make_state();
    s.power_up = PowerUp::Active { started_at: 0 };
    s.bats.push(Bat { pos: Position::new(810.0, 410.0), speed: 3 });

    let still = tick(&s, POWER_UP_DURATION_MS - 1, &mut seeded_rng());
    assert!(still.power_up.is_active());

    // Expired on this tick, so the same bat is now lethal.
    let expired = tick(&s, POWER_UP_DURATION_MS, &mut seeded_rng());
    assert_eq!(expired.power_up, PowerUp::Inactive);
    assert_eq!(expired.status, GameStatus::GameOver);
}

#[test]
fn tick_dot_pickup_starts_timer_at_tick_time() {
    let mut s = make_state();
    s.dots.push(LuminousDot { pos: Position::new(820.0, 420.0) });
    let s2 = tick(&s, 2_000, &mut seeded_rng());
    assert!(s2.dots.len() <= 1);
    assert_eq!(s2.power_up, PowerUp::Active { started_at: 2_000 });

    let later = tick(&s2, 2_000 + POWER_UP_DURATION_MS, &mut seeded_rng());
    assert!(!later.power_up.is_active());
}

#[test]
fn first_bat_after_five_seconds_then_every_fifteen() {
    let mut rng = seeded_rng();
    let s = init_state(0, 0, &mut rng);

    let s = tick(&s, 4_999, &mut rng);
    assert!(s.bats.is_empty());

    let s = tick(&s, 5_000, &mut rng);
    assert_eq!(s.bats.len(), 1);
    assert_eq!(s.last_bat_spawn_time, 5_000);

    let s = tick(&s, 19_999, &mut rng);
    assert_eq!(s.bats.len(), 1);

    let s = tick(&s, 20_000, &mut rng);
    assert_eq!(s.bats.len(), 2);
    assert_eq!(s.last_bat_spawn_time, 20_000);
}

#[test]
fn invariants_hold_over_long_random_run() {
    let mut rng = seeded_rng();
    let mut s = init_state(0, 0, &mut rng);
    // Keep bats away so the run lasts.
    s.bat_spawn_interval = u64::MAX;
    let mut now = 0;

    for _ in 0..3_000 {
        now += 16;
        let steer_keys = held(rng.gen(), rng.gen(), rng.gen(), rng.gen());
        let next = tick(&steer(&s, &steer_keys), now, &mut rng);

        assert!(next.score >= s.score);
        assert!(next.score - s.score <= 5 + 10);
        assert_eq!(next.max_moths, max_moths_for(next.score));
        assert!(next.moths.len() <= next.max_moths);
        assert!(next.dots.len() <= 1);
        assert!(next.bats.is_empty());
        s = next;
    }
    assert_eq!(s.status, GameStatus::Playing);
}
