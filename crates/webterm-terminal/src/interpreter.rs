//! Command trait, registry, and dispatch logic.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use webterm_platform::{DesktopPlatform, Platform};
use webterm_types::console::Console;
use webterm_types::error::Result;

/// Capabilities passed to every command.
///
/// The console is the only thing a command may change. The command table
/// and platform providers are read-only.
pub struct Environment<'a> {
    /// Display surface for command output.
    pub console: &'a mut dyn Console,
    /// Every registered command, in registration order.
    pub commands: &'a [Box<dyn Command>],
    /// Clock and host information.
    pub platform: &'a dyn Platform,
}

/// A single executable command.
pub trait Command: Send + Sync {
    /// The command name (what the user types). Matched case-insensitively.
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "echo <text>"), if the command takes arguments.
    fn usage(&self) -> Option<&str> {
        None
    }

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()>;
}

/// Fallback message when a failure carries no text.
const UNKNOWN_ERROR: &str = "Unknown error";

/// Ordered table of available commands with dispatch.
///
/// Built once with [`register`](Self::register), then only read. Dispatch
/// takes `&self`, so one registry can serve any number of sessions.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    platform: Box<dyn Platform>,
}

impl CommandRegistry {
    /// Create an empty registry backed by the given platform providers.
    pub fn new(platform: Box<dyn Platform>) -> Self {
        Self {
            commands: Vec::new(),
            platform,
        }
    }

    /// Create a registry with every built-in command installed.
    pub fn with_builtins(platform: Box<dyn Platform>) -> Self {
        let mut reg = Self::new(platform);
        crate::register_builtins(&mut reg);
        reg
    }

    /// Register a command. Replaces any existing command with the same name,
    /// keeping its position.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let lower = cmd.name().to_lowercase();
        let pos = self
            .commands
            .iter()
            .position(|c| c.name().to_lowercase() == lower);
        match pos {
            Some(i) => self.commands[i] = cmd,
            None => self.commands.push(cmd),
        }
    }

    /// Look up a command by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&dyn Command> {
        let lower = name.to_lowercase();
        self.commands
            .iter()
            .find(|c| c.name().to_lowercase() == lower)
            .map(|c| &**c)
    }

    /// Every registered command, in registration order.
    pub fn list_commands(&self) -> &[Box<dyn Command>] {
        &self.commands
    }

    /// Parse and execute a command line, writing all output to `console`.
    ///
    /// Blank lines produce nothing. Unknown commands and failing commands
    /// are reported on the console; nothing is returned to the caller.
    pub fn dispatch(&self, line: &str, console: &mut dyn Console) {
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            return;
        };
        let name = first.to_lowercase();
        let args: Vec<&str> = tokens.collect();

        let Some(cmd) = self.find(&name) else {
            log::debug!("Unknown command: {name}");
            console.write_line(&format!("Command not found: {name}"));
            console.write_line("Type 'help' for available commands");
            return;
        };

        log::debug!("Dispatching {} ({} args)", cmd.name(), args.len());
        let mut env = Environment {
            console: &mut *console,
            commands: &self.commands,
            platform: &*self.platform,
        };
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| cmd.execute(&args, &mut env)));
        let message = match outcome {
            Ok(Ok(())) => return,
            Ok(Err(e)) => e.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };
        let message = if message.is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        };
        log::warn!("Command {} failed: {message}", cmd.name());
        console.write_line(&format!("Error executing command: {message}"));
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new(Box::new(DesktopPlatform::new()))
    }
}

/// Extract the text of a panic payload, or an empty string.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::new()
    }
}
