//! Key event classification.
//!
//! Every display surface maps its native key input to [`KeyEvent`]. The line
//! editor never sees raw surface data; surfaces that deliver xterm-style
//! data chunks can use [`KeyEvent::from_data`].

/// A classified key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// Submit the current line.
    Enter,
    /// Delete the character left of the cursor.
    Backspace,
    /// Previous history entry.
    ArrowUp,
    /// Next history entry.
    ArrowDown,
    /// Move the cursor one cell right.
    ArrowRight,
    /// Move the cursor one cell left.
    ArrowLeft,
    /// Printable text (a single keystroke or a pasted chunk).
    Text(String),
    /// Any other control input. Ignored by the editor.
    Other,
}

const CR: char = '\r';
const DEL: char = '\u{7f}';
const ESC: u8 = 0x1b;

impl KeyEvent {
    /// Classify one data chunk as delivered by an xterm-compatible surface.
    ///
    /// Only the leading character decides the class, except for escape
    /// sequences where the final byte of a 3-byte `ESC ? X` sequence picks
    /// the arrow. Longer or unknown escape sequences are [`KeyEvent::Other`].
    pub fn from_data(data: &str) -> Self {
        let Some(first) = data.chars().next() else {
            return Self::Other;
        };
        match first {
            CR => Self::Enter,
            DEL => Self::Backspace,
            '\u{1b}' => match data.as_bytes() {
                [ESC, _, b'A'] => Self::ArrowUp,
                [ESC, _, b'B'] => Self::ArrowDown,
                [ESC, _, b'C'] => Self::ArrowRight,
                [ESC, _, b'D'] => Self::ArrowLeft,
                _ => Self::Other,
            },
            c if u32::from(c) >= 0x20 => Self::Text(data.to_string()),
            _ => Self::Other,
        }
    }
}
