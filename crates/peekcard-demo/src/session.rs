#![forbid(unsafe_code)]

//! Raw-mode terminal session for the demo.
//!
//! Entering raw mode and the alternate screen happens in [`Session::new`];
//! both are undone on drop and from a panic hook, so a crash never leaves
//! the shell in raw mode.

use std::io::{self, Write};
use std::sync::OnceLock;

use crossterm::{cursor, execute, queue, terminal};

/// RAII guard for raw mode plus the alternate screen.
#[derive(Debug)]
pub struct Session {
    _private: (),
}

impl Session {
    /// Enter raw mode, switch to the alternate screen and hide the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal refuses any of the mode switches.
    pub fn new() -> io::Result<Self> {
        install_panic_hook();
        terminal::enable_raw_mode()?;
        let session = Self { _private: () };
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(session)
    }

    /// Current terminal size (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Replace the screen contents with `frame`.
    ///
    /// Lines are written with explicit carriage returns since raw mode does
    /// not translate `\n`.
    pub fn draw(&self, frame: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::All)
        )?;
        for (i, line) in frame.split('\n').enumerate() {
            if i > 0 {
                stdout.write_all(b"\r\n")?;
            }
            stdout.write_all(line.as_bytes())?;
        }
        stdout.flush()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        best_effort_cleanup();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

fn best_effort_cleanup() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}
