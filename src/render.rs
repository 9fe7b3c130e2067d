//! Drawing contract and the per-frame render pass.
//!
//! The pass only reads state and issues `Renderer` calls in a fixed order;
//! the backend decides what a sprite or a circle looks like.

use std::io;

use crossterm::style::Color;

use crate::assets::{AssetProvider, Sprite};
use crate::entities::{GameState, Position};
use crate::motion::facing_degrees;
use crate::settings::{
    DARK_GREEN, DOT_RADIUS, DRAGONFLY_SIZE, GREEN, POWER_UP_FLASH_MS, SCREEN_HEIGHT,
    SCREEN_WIDTH, WHITE,
};

pub trait Renderer {
    fn draw_background(&mut self) -> io::Result<()>;
    /// `position` is the sprite's top-left corner in screen pixels;
    /// `rotation_degrees` is counter-clockwise from facing right.
    fn draw_sprite(&mut self, sprite: &Sprite, position: Position, rotation_degrees: f32)
        -> io::Result<()>;
    fn draw_text(&mut self, text: &str, position: Position, color: Color) -> io::Result<()>;
    fn draw_circle(&mut self, center: Position, radius: f32, color: Color) -> io::Result<()>;
    fn present(&mut self) -> io::Result<()>;
}

// ── HUD layout ───────────────────────────────────────────────────────────────

const SCORE_POS: Position = Position::new(10.0, 10.0);
const BEST_POS: Position = Position::new(10.0, 50.0);
const POWER_UP_POS: Position = Position::new(SCREEN_WIDTH - 200.0, 10.0);
const REACHED_POS: Position = Position::new(SCREEN_WIDTH / 2.0 - 100.0, SCREEN_HEIGHT / 2.0 - 50.0);
const GAME_OVER_BEST_POS: Position = Position::new(SCREEN_WIDTH / 2.0 - 100.0, SCREEN_HEIGHT / 2.0);
const PROMPT_POS: Position = Position::new(SCREEN_WIDTH / 2.0 - 100.0, SCREEN_HEIGHT / 2.0 + 50.0);

/// Countdown colour alternates every half second.
pub fn power_up_color(now: u64) -> Color {
    if (now / POWER_UP_FLASH_MS) % 2 == 0 {
        GREEN
    } else {
        DARK_GREEN
    }
}

/// Render one in-play frame.
pub fn render_playing<R: Renderer>(
    renderer: &mut R,
    assets: &AssetProvider,
    state: &GameState,
) -> io::Result<()> {
    renderer.draw_background()?;

    // The dragonfly is drawn centred on its position and faces the oldest moth.
    let heading = state
        .moths
        .first()
        .map(|m| facing_degrees(state.dragonfly, m.pos))
        .unwrap_or(0.0);
    let half = DRAGONFLY_SIZE / 2.0;
    let dragonfly_corner = Position::new(state.dragonfly.x - half, state.dragonfly.y - half);
    renderer.draw_sprite(&assets.dragonfly, dragonfly_corner, heading)?;

    for moth in &state.moths {
        renderer.draw_sprite(&assets.moth, moth.pos, 0.0)?;
    }

    // Bat sprites (40×40) rotate about their centre, so the unrotated corner
    // is the bat's position even though its hitbox is only 20×20.
    for bat in &state.bats {
        let heading = facing_degrees(bat.pos, state.dragonfly);
        renderer.draw_sprite(&assets.bat, bat.pos, heading)?;
    }

    if let Some(dot) = state.dots.first() {
        renderer.draw_circle(dot.pos, DOT_RADIUS, GREEN)?;
    }

    if state.power_up.is_active() {
        let text = format!("Power-Up: {}s", state.power_up.remaining_secs(state.current_time));
        renderer.draw_text(&text, POWER_UP_POS, power_up_color(state.current_time))?;
    }

    renderer.draw_text(&format!("Score: {}", state.score), SCORE_POS, WHITE)?;
    renderer.draw_text(&format!("Best Score: {}", state.best_score), BEST_POS, WHITE)?;

    renderer.present()
}

/// Render the game-over frame: background, reached score, best score.
pub fn render_game_over<R: Renderer>(renderer: &mut R, state: &GameState) -> io::Result<()> {
    renderer.draw_background()?;
    renderer.draw_text(&format!("Reached Score: {}", state.score), REACHED_POS, WHITE)?;
    renderer.draw_text(
        &format!("Best Score: {}", state.best_score),
        GAME_OVER_BEST_POS,
        WHITE,
    )?;
    renderer.draw_text("SPACE - Play Again  Q - Quit", PROMPT_POS, WHITE)?;
    renderer.present()
}
