//! The display surface the terminal core writes to.
//!
//! Both the line editor and the command handlers talk to the surface only
//! through [`Console`]. [`MemoryConsole`] records every call and is what the
//! tests (and any headless driver) use in place of a real surface.

/// Output capabilities of a display surface.
pub trait Console {
    /// Append `text` followed by a newline.
    fn write_line(&mut self, text: &str);

    /// Append `text` as-is (control sequences included).
    fn write(&mut self, text: &str);

    /// Erase all prior output.
    fn clear(&mut self);
}

/// A single recorded call against a [`MemoryConsole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleOp {
    Line(String),
    Raw(String),
    Clear,
}

/// In-memory console that records every operation in order.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    ops: Vec<ConsoleOp>,
}

impl MemoryConsole {
    /// Create a console with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded operation, oldest first.
    pub fn ops(&self) -> &[ConsoleOp] {
        &self.ops
    }

    /// Text of every `write_line` call, in order.
    pub fn lines(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                ConsoleOp::Line(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Concatenation of every `write` call.
    pub fn raw(&self) -> String {
        self.ops
            .iter()
            .filter_map(|op| match op {
                ConsoleOp::Raw(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of `clear` calls.
    pub fn clear_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, ConsoleOp::Clear))
            .count()
    }

    /// Whether no operation has been recorded.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Drop everything recorded so far.
    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl Console for MemoryConsole {
    fn write_line(&mut self, text: &str) {
        self.ops.push(ConsoleOp::Line(text.to_string()));
    }

    fn write(&mut self, text: &str) {
        self.ops.push(ConsoleOp::Raw(text.to_string()));
    }

    fn clear(&mut self) {
        self.ops.push(ConsoleOp::Clear);
    }
}
