//! Map crossterm events to editor key events.

use crossterm::event::{Event, KeyCode, KeyEvent as TermKey, KeyEventKind, KeyModifiers};
use webterm_types::input::KeyEvent;

/// What the event loop should do with one terminal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Key(KeyEvent),
    Quit,
    Ignore,
}

pub fn translate(event: Event) -> Action {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Paste(text) => Action::Key(KeyEvent::Text(text)),
        _ => Action::Ignore,
    }
}

fn translate_key(key: TermKey) -> Action {
    // Windows reports releases as well as presses.
    if key.kind == KeyEventKind::Release {
        return Action::Ignore;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'd') => Action::Quit,
            _ => Action::Key(KeyEvent::Other),
        };
    }
    let event = match key.code {
        KeyCode::Enter => KeyEvent::Enter,
        KeyCode::Backspace => KeyEvent::Backspace,
        KeyCode::Up => KeyEvent::ArrowUp,
        KeyCode::Down => KeyEvent::ArrowDown,
        KeyCode::Right => KeyEvent::ArrowRight,
        KeyCode::Left => KeyEvent::ArrowLeft,
        KeyCode::Char(c) => KeyEvent::Text(c.to_string()),
        _ => KeyEvent::Other,
    };
    Action::Key(event)
}
