//! Key-driven line editor with incremental redraw.
//!
//! The editor never repaints the whole line. Each key event emits only the
//! control sequences needed to bring the surface in line with the buffer,
//! assuming the surface cursor sits where the buffer cursor is.

use webterm_types::config::TerminalConfig;
use webterm_types::console::Console;
use webterm_types::input::KeyEvent;

use crate::history::History;
use crate::interpreter::CommandRegistry;

/// Erase the glyph left of the cursor.
const ERASE: &str = "\x08 \x08";
/// Move the cursor one cell left without erasing.
const BACK: &str = "\x08";
const CURSOR_RIGHT: &str = "\x1b[C";
const CURSOR_LEFT: &str = "\x1b[D";
const NEWLINE: &str = "\r\n";

/// Single-line input state for one terminal session.
#[derive(Debug, Clone)]
pub struct LineEditor {
    buffer: Vec<char>,
    /// Character offset into `buffer`, always `<= buffer.len()`.
    cursor: usize,
    history: History,
    prompt: String,
    banner: Vec<String>,
}

impl LineEditor {
    /// Create an editor with the given prompt and no banner.
    pub fn new(prompt: &str) -> Self {
        Self {
            buffer: Vec::new(),
            cursor: 0,
            history: History::new(),
            prompt: prompt.to_string(),
            banner: Vec::new(),
        }
    }

    /// Create an editor using the prompt and banner from `config`.
    pub fn from_config(config: &TerminalConfig) -> Self {
        Self {
            banner: config.banner.clone(),
            ..Self::new(&config.prompt)
        }
    }

    /// Write the banner lines and the first prompt.
    pub fn greet(&self, console: &mut dyn Console) {
        for line in &self.banner {
            console.write_line(line);
        }
        console.write(&self.prompt);
    }

    /// Classify a raw xterm-style data chunk and handle it.
    pub fn handle_data(
        &mut self,
        data: &str,
        registry: &CommandRegistry,
        console: &mut dyn Console,
    ) {
        self.handle_key(&KeyEvent::from_data(data), registry, console);
    }

    /// Apply one key event. Submitted lines are dispatched through `registry`.
    pub fn handle_key(
        &mut self,
        key: &KeyEvent,
        registry: &CommandRegistry,
        console: &mut dyn Console,
    ) {
        match key {
            KeyEvent::Enter => self.submit(registry, console),
            KeyEvent::Backspace => self.backspace(console),
            KeyEvent::ArrowUp => {
                if let Some(entry) = self.history.previous().map(str::to_string) {
                    self.replace_line(&entry, console);
                }
            },
            KeyEvent::ArrowDown => {
                if let Some(entry) = self.history.next().map(str::to_string) {
                    self.replace_line(&entry, console);
                }
            },
            KeyEvent::ArrowRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor += 1;
                    console.write(CURSOR_RIGHT);
                }
            },
            KeyEvent::ArrowLeft => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    console.write(CURSOR_LEFT);
                }
            },
            KeyEvent::Text(text) => self.insert(text, console),
            KeyEvent::Other => {},
        }
    }

    /// The line being edited.
    pub fn line(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Lines submitted so far in this session.
    pub fn history(&self) -> &History {
        &self.history
    }

    fn submit(&mut self, registry: &CommandRegistry, console: &mut dyn Console) {
        let line = self.line();
        let trimmed = line.trim();
        self.history.push(trimmed);
        console.write(NEWLINE);
        if !trimmed.is_empty() {
            log::debug!("Submitting line: {trimmed}");
            registry.dispatch(trimmed, console);
        }
        self.buffer.clear();
        self.cursor = 0;
        console.write(&self.prompt);
    }

    fn backspace(&mut self, console: &mut dyn Console) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.buffer.remove(self.cursor);

        let mut out = String::from(ERASE);
        let tail = &self.buffer[self.cursor..];
        if !tail.is_empty() {
            out.extend(tail);
            out.push(' ');
            out.push_str(&BACK.repeat(tail.len() + 1));
        }
        console.write(&out);
    }

    fn insert(&mut self, text: &str, console: &mut dyn Console) {
        let inserted: Vec<char> = text.chars().filter(|c| !c.is_control()).collect();
        if inserted.is_empty() {
            return;
        }
        let at = self.cursor;
        self.buffer.splice(at..at, inserted.iter().copied());
        self.cursor += inserted.len();

        let mut out: String = inserted.iter().collect();
        let tail = &self.buffer[self.cursor..];
        if !tail.is_empty() {
            out.extend(tail);
            out.push_str(&BACK.repeat(tail.len()));
        }
        console.write(&out);
    }

    /// Swap the whole line for `line`, leaving the cursor at its end.
    fn replace_line(&mut self, line: &str, console: &mut dyn Console) {
        log::debug!(
            "History recall {}/{}",
            self.history.index(),
            self.history.len()
        );
        let mut out = CURSOR_RIGHT.repeat(self.buffer.len() - self.cursor);
        out.push_str(&ERASE.repeat(self.buffer.len()));
        out.push_str(line);

        self.buffer = line.chars().collect();
        self.cursor = self.buffer.len();
        if !out.is_empty() {
            console.write(&out);
        }
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::from_config(&TerminalConfig::default())
    }
}
