//! Static game constants — geometry is in screen pixels, times in milliseconds.

use crossterm::style::Color;

// ── Screen & playable area ────────────────────────────────────────────────────

pub const SCREEN_WIDTH: f32 = 1600.0;
pub const SCREEN_HEIGHT: f32 = 800.0;

/// The playable area is the screen inset by 30 px on every side.
pub const PLAYABLE_OFFSET_X: f32 = 30.0;
pub const PLAYABLE_OFFSET_Y: f32 = 30.0;
pub const PLAYABLE_WIDTH: f32 = SCREEN_WIDTH - 2.0 * PLAYABLE_OFFSET_X;
pub const PLAYABLE_HEIGHT: f32 = SCREEN_HEIGHT - 2.0 * PLAYABLE_OFFSET_Y;

// ── Entity sizes ──────────────────────────────────────────────────────────────

pub const DRAGONFLY_SIZE: f32 = 50.0;
/// Dragonfly hitbox while the power-up is active.
pub const DRAGONFLY_POWERED_SIZE: f32 = 100.0;
pub const MOTH_SIZE: f32 = 30.0;
/// Bat sprite size; the bat hitbox is smaller (`BAT_HITBOX`).
pub const BAT_SIZE: f32 = 40.0;
pub const BAT_HITBOX: f32 = 20.0;
pub const DOT_SIZE: f32 = 10.0;
pub const DOT_RADIUS: f32 = 5.0;

// ── Speeds (px per tick) ──────────────────────────────────────────────────────

pub const DRAGONFLY_STEP: f32 = 8.0;
pub const MOTH_SPEED: f32 = 2.0;
pub const DOT_SPEED: f32 = 2.0;
pub const BAT_MIN_SPEED: u32 = 3;
pub const BAT_MAX_SPEED: u32 = 6;

// ── Scoring ───────────────────────────────────────────────────────────────────

pub const MOTH_POINTS: u32 = 5;
pub const BAT_POINTS: u32 = 10;
/// Every this many points raises the moth cap by one.
pub const POINTS_PER_EXTRA_MOTH: u32 = 50;

// ── Timing ────────────────────────────────────────────────────────────────────

pub const TICKS_PER_SECOND: u64 = 60;
pub const POWER_UP_DURATION_MS: u64 = 10_000;
pub const FIRST_BAT_DELAY_MS: u64 = 5_000;
pub const BAT_SPAWN_INTERVAL_MS: u64 = 15_000;
/// Half-period of the power-up countdown flash.
pub const POWER_UP_FLASH_MS: u64 = 500;

// ── Spawning ──────────────────────────────────────────────────────────────────

pub const DOT_SPAWN_CHANCE: f64 = 0.02;
/// Bats appear this far outside a screen edge.
pub const BAT_SPAWN_MARGIN: f32 = 40.0;

// ── Colours ───────────────────────────────────────────────────────────────────

pub const DARK_BLUE: Color = Color::Rgb { r: 25, g: 25, b: 112 };
pub const WHITE: Color = Color::Rgb { r: 255, g: 255, b: 255 };
pub const GREEN: Color = Color::Rgb { r: 0, g: 255, b: 0 };
pub const DARK_GREEN: Color = Color::Rgb { r: 0, g: 100, b: 0 };
