use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};

/// Raw-mode, alternate-screen terminal session.  Dropping it restores the
/// terminal, including when setup fails halfway.
pub struct TerminalSession<W: Write> {
    out: W,
    disable_raw_mode: fn() -> io::Result<()>,
    keyboard_enhanced: bool,
}

impl<W: Write> TerminalSession<W> {
    pub fn enter(out: W) -> io::Result<Self> {
        Self::enter_with(out, terminal::enable_raw_mode, terminal::disable_raw_mode)
    }

    /// `enter` with the raw-mode switches supplied by the caller.
    pub fn enter_with(
        out: W,
        enable_raw_mode: fn() -> io::Result<()>,
        disable_raw_mode: fn() -> io::Result<()>,
    ) -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on an early return drops `session`, which restores.
        let mut session = TerminalSession {
            out,
            disable_raw_mode,
            keyboard_enhanced: false,
        };
        session.out.execute(terminal::EnterAlternateScreen)?;
        session.out.execute(cursor::Hide)?;

        // Request key-release (and key-repeat) events from the terminal.
        // kitty-protocol terminals support this; others fall back gracefully.
        session.keyboard_enhanced = session
            .out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
        Ok(session)
    }

    pub fn keyboard_enhanced(&self) -> bool {
        self.keyboard_enhanced
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if self.keyboard_enhanced {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        let _ = (self.disable_raw_mode)();
    }
}
