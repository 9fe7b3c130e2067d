use std::collections::HashMap;
use std::sync::mpsc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::{Direction, InputSource, Key, PolledInput};

/// A key is considered "held" if its last press/repeat event arrived within
/// this many polls.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 polls (≈133 ms at
/// 60 FPS) is always refreshed before expiry.
pub const HOLD_WINDOW: u64 = 8;

/// `InputSource` over crossterm events delivered on a channel by a
/// dedicated reader thread.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol): proper `Press` /
///   `Repeat` / `Release` events, so keys are dropped on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire after `HOLD_WINDOW` polls of silence.
pub struct TerminalInput {
    rx: mpsc::Receiver<Event>,
    /// Maps each held key to the poll it was last seen on.
    key_poll: HashMap<KeyCode, u64>,
    poll: u64,
}

impl TerminalInput {
    pub fn new(rx: mpsc::Receiver<Event>) -> Self {
        TerminalInput {
            rx,
            key_poll: HashMap::new(),
            poll: 0,
        }
    }

    fn is_fresh(&self, key: &KeyCode) -> bool {
        self.key_poll
            .get(key)
            .map(|&last| self.poll.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }
}

fn key_codes(direction: Direction) -> [KeyCode; 3] {
    match direction {
        Direction::Up => [KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')],
        Direction::Down => [KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')],
        Direction::Left => [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
        Direction::Right => [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
    }
}

fn classify(code: &KeyCode) -> Key {
    match code {
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char('q') | KeyCode::Char('Q') => Key::Q,
        _ => Key::Other,
    }
}

impl InputSource for TerminalInput {
    fn poll_events(&mut self) -> PolledInput {
        self.poll += 1;
        let mut polled = PolledInput::default();

        loop {
            let event = match self.rx.try_recv() {
                Ok(event) => event,
                Err(mpsc::TryRecvError::Empty) => break,
                // Reader thread gone: the terminal is unusable.
                Err(mpsc::TryRecvError::Disconnected) => {
                    polled.quit = true;
                    break;
                }
            };
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event
            else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    self.key_poll.insert(code.clone(), self.poll);
                    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                        polled.quit = true;
                        continue;
                    }
                    let key = classify(&code);
                    if key != Key::Other && polled.key_pressed.is_none() {
                        polled.key_pressed = Some(key);
                    }
                }
                KeyEventKind::Repeat => {
                    self.key_poll.insert(code, self.poll);
                }
                KeyEventKind::Release => {
                    self.key_poll.remove(&code);
                }
            }
        }
        polled
    }

    fn is_key_held(&self, direction: Direction) -> bool {
        key_codes(direction).iter().any(|code| self.is_fresh(code))
    }
}
