//! Terminal layer — all terminal I/O lives here.
//!
//! `TerminalRenderer` implements `Renderer` on top of any `Write`r.  Screen
//! pixels are scaled onto the terminal grid; no game logic is performed.
//! `TerminalInput` turns crossterm key events into the `InputSource` queries.

mod keyboard;
mod session;

pub use keyboard::{TerminalInput, HOLD_WINDOW};
pub use session::TerminalSession;

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::assets::{Background, Sprite};
use crate::entities::Position;
use crate::render::Renderer;
use crate::settings::{SCREEN_HEIGHT, SCREEN_WIDTH};

const DOT_GLYPH: &str = "●";

pub struct TerminalRenderer<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    /// Re-read the terminal size every frame.
    follow_terminal: bool,
    background: Background,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, cols: u16, rows: u16, background: Background) -> Self {
        TerminalRenderer {
            out,
            cols,
            rows,
            follow_terminal: false,
            background,
        }
    }

    /// Renderer sized to the live terminal, tracking resizes.
    pub fn for_terminal(out: W, background: Background) -> std::io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(TerminalRenderer {
            follow_terminal: true,
            ..Self::new(out, cols, rows, background)
        })
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Terminal cell containing screen pixel `p`, or `None` when it lies off
    /// the grid (bats approaching from outside the screen).
    pub fn cell_for(&self, p: Position) -> Option<(u16, u16)> {
        let col = (p.x / SCREEN_WIDTH * self.cols as f32).floor();
        let row = (p.y / SCREEN_HEIGHT * self.rows as f32).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f32 || row >= self.rows as f32 {
            return None;
        }
        Some((col as u16, row as u16))
    }

    fn put(&mut self, col: u16, row: u16, text: &str, color: Color) -> std::io::Result<()> {
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(text))?;
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw_background(&mut self) -> std::io::Result<()> {
        if self.follow_terminal {
            (self.cols, self.rows) = terminal::size()?;
        }
        self.out.queue(style::SetBackgroundColor(self.background.color))?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.queue(style::SetForegroundColor(self.background.star_color))?;

        let tile = &self.background.tile;
        if tile.is_empty() {
            return Ok(());
        }
        for row in 0..self.rows {
            let pattern: Vec<char> = tile[row as usize % tile.len()].chars().collect();
            if pattern.is_empty() {
                continue;
            }
            let line: String = pattern.iter().cycle().take(self.cols as usize).collect();
            self.out.queue(cursor::MoveTo(0, row))?;
            self.out.queue(Print(line))?;
        }
        Ok(())
    }

    fn draw_sprite(
        &mut self,
        sprite: &Sprite,
        position: Position,
        rotation_degrees: f32,
    ) -> std::io::Result<()> {
        // One glyph at the cell under the sprite's centre.
        let centre = Position::new(
            position.x + sprite.width / 2.0,
            position.y + sprite.height / 2.0,
        );
        let Some((col, row)) = self.cell_for(centre) else {
            return Ok(());
        };
        let glyph = sprite.glyph_for(rotation_degrees).to_string();
        self.put(col, row, &glyph, sprite.color)
    }

    fn draw_text(&mut self, text: &str, position: Position, color: Color) -> std::io::Result<()> {
        let Some((col, row)) = self.cell_for(position) else {
            return Ok(());
        };
        // Clip at the right edge instead of wrapping onto the next row.
        let room = self.cols.saturating_sub(col) as usize;
        let clipped: String = text.chars().take(room).collect();
        self.put(col, row, &clipped, color)
    }

    fn draw_circle(&mut self, center: Position, _radius: f32, color: Color) -> std::io::Result<()> {
        // A 5 px dot is far smaller than a cell.
        let Some((col, row)) = self.cell_for(center) else {
            return Ok(());
        };
        self.put(col, row, DOT_GLYPH, color)
    }

    fn present(&mut self) -> std::io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}
