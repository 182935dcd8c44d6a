//! Submitted-line history with a browsing index.

/// Lines submitted during one session, oldest first.
///
/// The browsing index ranges over `0..=len`. An index equal to `len` means
/// the user is not browsing and the edit buffer is live.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    /// Create an empty history, not browsing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line. Blank lines are not stored.
    ///
    /// The line is trimmed first. The browsing index is reset to the end
    /// either way. Returns whether an entry was appended.
    pub fn push(&mut self, line: &str) -> bool {
        let trimmed = line.trim();
        let added = !trimmed.is_empty();
        if added {
            self.entries.push(trimmed.to_string());
        }
        self.index = self.entries.len();
        added
    }

    /// Step back to the previous (older) entry.
    ///
    /// Returns `None` when already at the oldest entry or the history is empty.
    pub fn previous(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index).map(String::as_str)
    }

    /// Step forward to the next (newer) entry.
    ///
    /// Stepping past the newest entry yields an empty line. Returns `None`
    /// when not browsing.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&str> {
        if self.index >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.entries.get(self.index).map_or("", String::as_str))
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been submitted yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Current browsing index.
    pub fn index(&self) -> usize {
        self.index
    }
}
