//! Sprite assets.  Built once at startup, immutable afterwards, and passed
//! explicitly to the render pass.
//!
//! A sprite file holds eight glyphs separated by whitespace, one per 45°
//! heading starting at "facing right" and turning counter-clockwise. The
//! background file holds a star tile repeated across the screen. Lines
//! starting with `#` are comments.

use std::fs;
use std::path::{Path, PathBuf};

use crossterm::style::Color;
use tracing::info;

use crate::settings::{BAT_SIZE, DRAGONFLY_SIZE, MOTH_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};

pub const HEADINGS: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("cannot read asset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed asset {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    /// Glyph per heading, index 0 = facing right.
    pub glyphs: [char; HEADINGS],
    pub color: Color,
    /// Pre-scaled size in screen pixels.
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    /// Glyph for a rotation in degrees, snapped to the nearest 45°.
    pub fn glyph_for(&self, rotation_degrees: f32) -> char {
        let step = 360.0 / HEADINGS as f32;
        let index = (rotation_degrees / step).round().rem_euclid(HEADINGS as f32) as usize;
        self.glyphs[index % HEADINGS]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Background {
    /// Star tile, repeated across the whole screen.
    pub tile: Vec<String>,
    pub color: Color,
    pub star_color: Color,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssetProvider {
    pub dragonfly: Sprite,
    pub moth: Sprite,
    pub bat: Sprite,
    pub background: Background,
}

// ── Built-in art ──────────────────────────────────────────────────────────────

const DRAGONFLY_GLYPHS: [char; HEADINGS] = ['→', '↗', '↑', '↖', '←', '↙', '↓', '↘'];
const MOTH_GLYPHS: [char; HEADINGS] = ['ж'; HEADINGS];
const BAT_GLYPHS: [char; HEADINGS] = ['▶', '◥', '▲', '◤', '◀', '◣', '▼', '◢'];
const NIGHT_SKY: &[&str] = &[
    "  .          *                .        ",
    "         .            .                ",
    "*                  .          *       .",
    "      .      *                         ",
];

const C_DRAGONFLY: Color = Color::Cyan;
const C_MOTH: Color = Color::Rgb { r: 230, g: 220, b: 170 };
const C_BAT: Color = Color::Red;
const C_SKY: Color = Color::Rgb { r: 10, g: 10, b: 40 };
const C_STAR: Color = Color::DarkGrey;

fn sprite(glyphs: [char; HEADINGS], color: Color, size: f32) -> Sprite {
    Sprite {
        glyphs,
        color,
        width: size,
        height: size,
    }
}

fn background(tile: Vec<String>) -> Background {
    Background {
        tile,
        color: C_SKY,
        star_color: C_STAR,
        width: SCREEN_WIDTH,
        height: SCREEN_HEIGHT,
    }
}

impl AssetProvider {
    /// The art compiled into the binary.
    pub fn builtin() -> Self {
        AssetProvider {
            dragonfly: sprite(DRAGONFLY_GLYPHS, C_DRAGONFLY, DRAGONFLY_SIZE),
            moth: sprite(MOTH_GLYPHS, C_MOTH, MOTH_SIZE),
            bat: sprite(BAT_GLYPHS, C_BAT, BAT_SIZE),
            background: background(NIGHT_SKY.iter().map(|s| s.to_string()).collect()),
        }
    }

    /// Load `dragonfly.txt`, `moth.txt`, `bat.txt` and `night_sky.txt` from
    /// `dir`.  Any missing or malformed file fails the whole load.
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let assets = AssetProvider {
            dragonfly: sprite(
                load_glyphs(&dir.join("dragonfly.txt"))?,
                C_DRAGONFLY,
                DRAGONFLY_SIZE,
            ),
            moth: sprite(load_glyphs(&dir.join("moth.txt"))?, C_MOTH, MOTH_SIZE),
            bat: sprite(load_glyphs(&dir.join("bat.txt"))?, C_BAT, BAT_SIZE),
            background: background(load_tile(&dir.join("night_sky.txt"))?),
        };
        info!(dir = %dir.display(), "assets loaded");
        Ok(assets)
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

fn read(path: &Path) -> Result<String, AssetError> {
    fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .filter(|l| !l.trim().is_empty() && !l.trim_start().starts_with('#'))
}

fn malformed(path: &Path, reason: impl Into<String>) -> AssetError {
    AssetError::Malformed {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

pub fn parse_glyphs(path: &Path, text: &str) -> Result<[char; HEADINGS], AssetError> {
    let line = content_lines(text)
        .next()
        .ok_or_else(|| malformed(path, "no glyph line"))?;

    let mut glyphs = [' '; HEADINGS];
    let mut count = 0;
    for token in line.split_whitespace() {
        let mut chars = token.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(malformed(path, format!("`{token}` is not a single glyph")));
        };
        if count == HEADINGS {
            return Err(malformed(path, format!("more than {HEADINGS} glyphs")));
        }
        glyphs[count] = c;
        count += 1;
    }
    if count != HEADINGS {
        return Err(malformed(path, format!("expected {HEADINGS} glyphs, found {count}")));
    }
    Ok(glyphs)
}

fn load_glyphs(path: &Path) -> Result<[char; HEADINGS], AssetError> {
    parse_glyphs(path, &read(path)?)
}

fn load_tile(path: &Path) -> Result<Vec<String>, AssetError> {
    let text = read(path)?;
    let tile: Vec<String> = text
        .lines()
        .filter(|l| !l.trim_start().starts_with('#'))
        .map(|l| l.to_string())
        .collect();
    if tile.iter().all(|l| l.trim().is_empty()) {
        return Err(malformed(path, "empty star tile"));
    }
    Ok(tile)
}
