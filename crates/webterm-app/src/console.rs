//! Console backed by a raw-mode terminal.

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use webterm_types::console::Console;

/// Writes console output to any byte sink, normally stdout.
///
/// Raw mode disables output post-processing, so line ends are written as
/// CRLF. Write failures are logged and otherwise dropped because the core
/// has no way to act on them.
pub struct TermConsole<W: Write> {
    out: W,
}

impl<W: Write> TermConsole<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, parts: &[&str]) {
        let result = parts
            .iter()
            .try_for_each(|p| self.out.write_all(p.as_bytes()))
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            log::warn!("Console write failed: {e}");
        }
    }
}

impl<W: Write> Console for TermConsole<W> {
    fn write_line(&mut self, text: &str) {
        self.emit(&[text, "\r\n"]);
    }

    fn write(&mut self, text: &str) {
        self.emit(&[text]);
    }

    fn clear(&mut self) {
        let result = queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            log::warn!("Console clear failed: {e}");
        }
    }
}
