//! WebTerm desktop entry point.
//!
//! Puts the host terminal in raw mode and feeds its key events to the line
//! editor. Ctrl+C or Ctrl+D exits. Logs go to the file named by
//! `WEBTERM_LOG` and are off otherwise.

mod console;
mod input;
mod logging;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use console::TermConsole;
use input::Action;
use webterm_platform::DesktopPlatform;
use webterm_terminal::{CommandRegistry, LineEditor};
use webterm_types::config::TerminalConfig;
use webterm_types::console::Console;

/// Restores the host terminal when dropped, including on early return.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        crossterm::execute!(io::stdout(), EnableBracketedPaste)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = crossterm::execute!(io::stdout(), DisableBracketedPaste);
        let _ = disable_raw_mode();
    }
}

fn main() -> Result<()> {
    let sink = logging::LogSink::from_setting(std::env::var(logging::LOG_FILE_ENV).ok());
    logging::init(&sink)?;
    logging::install_panic_hook();

    // Config from CLI arg, WEBTERM_CONFIG env var, or built-in defaults.
    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("WEBTERM_CONFIG").ok())
    {
        Some(path) => TerminalConfig::load(Path::new(&path))?,
        None => TerminalConfig::default(),
    };

    let registry = CommandRegistry::with_builtins(Box::new(DesktopPlatform::new()));
    log::info!(
        "Starting WebTerm ({} commands)",
        registry.list_commands().len()
    );

    let mut editor = LineEditor::from_config(&config);
    let mut console = TermConsole::new(io::stdout());

    let _guard = RawModeGuard::enable()?;
    editor.greet(&mut console);
    loop {
        match input::translate(event::read()?) {
            Action::Key(key) => editor.handle_key(&key, &registry, &mut console),
            Action::Quit => break,
            Action::Ignore => {},
        }
    }
    console.write_line("");
    log::info!("WebTerm exiting");
    Ok(())
}
