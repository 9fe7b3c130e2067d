//! Entity motion — pure vector arithmetic, no state.

use crate::entities::{Bounds, Position};
use crate::settings::{PLAYABLE_HEIGHT, PLAYABLE_OFFSET_X, PLAYABLE_OFFSET_Y, PLAYABLE_WIDTH};

fn clamp_into(p: Position, bounds: &Bounds) -> Position {
    Position {
        x: p.x.max(bounds.min_x).min(bounds.max_x),
        y: p.y.max(bounds.min_y).min(bounds.max_y),
    }
}

/// Bounds for the top-left corner of a square entity of side `size` kept
/// fully inside the playable area.
pub fn playable_bounds(size: f32) -> Bounds {
    Bounds {
        min_x: PLAYABLE_OFFSET_X,
        min_y: PLAYABLE_OFFSET_Y,
        max_x: PLAYABLE_OFFSET_X + PLAYABLE_WIDTH - size,
        max_y: PLAYABLE_OFFSET_Y + PLAYABLE_HEIGHT - size,
    }
}

/// Step `entity` by `speed` directly away from `anchor`, then clamp it into
/// `bounds`.  Used for fleeing moths and the luminous dot.
pub fn move_away_from(entity: Position, anchor: Position, speed: f32, bounds: &Bounds) -> Position {
    let dx = entity.x - anchor.x;
    let dy = entity.y - anchor.y;
    // Floored at 1: an entity sitting on its anchor takes a zero-length step.
    let distance = entity.distance_to(&anchor).max(1.0);
    let stepped = Position {
        x: entity.x + dx / distance * speed,
        y: entity.y + dy / distance * speed,
    };
    clamp_into(stepped, bounds)
}

/// Step `entity` by `speed` directly toward `target`.  Not clamped: bats
/// approach from outside the screen.
pub fn move_toward(entity: Position, target: Position, speed: f32) -> Position {
    let dx = target.x - entity.x;
    let dy = target.y - entity.y;
    let distance = entity.distance_to(&target).max(1.0);
    Position {
        x: entity.x + dx / distance * speed,
        y: entity.y + dy / distance * speed,
    }
}

/// Heading from `from` to `to` in degrees, counter-clockwise from "facing
/// right", in (-180, 180].  Screen y grows downward, so dy is taken as
/// `from.y - to.y`; a level target straight behind gives +180, not -180.
pub fn facing_degrees(from: Position, to: Position) -> f32 {
    let dx = to.x - from.x;
    let dy = from.y - to.y;
    dy.atan2(dx).to_degrees()
}
