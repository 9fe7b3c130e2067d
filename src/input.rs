//! Input contract.  Movement reads level-triggered "is held" state; quit and
//! restart read discrete key-down events.  The two are kept as separate
//! queries.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Discrete keys the game reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Space,
    Q,
    Other,
}

/// Result of draining pending input events for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PolledInput {
    /// Window closed / Ctrl-C.
    pub quit: bool,
    /// First game-relevant key pressed since the previous poll.
    pub key_pressed: Option<Key>,
}

pub trait InputSource {
    fn poll_events(&mut self) -> PolledInput;
    fn is_key_held(&self, direction: Direction) -> bool;
}

/// Snapshot of the four movement directions for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct HeldDirections {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldDirections {
    pub fn sample(input: &impl InputSource) -> Self {
        HeldDirections {
            up: input.is_key_held(Direction::Up),
            down: input.is_key_held(Direction::Down),
            left: input.is_key_held(Direction::Left),
            right: input.is_key_held(Direction::Right),
        }
    }
}
