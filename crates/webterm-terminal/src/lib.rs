//! Line editor and command interpreter.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. The line editor turns key
//! events into an edited line and hands each submitted line to the
//! registry, which resolves the command name and runs `execute()`.

mod commands;
mod fun_commands;
mod history;
mod interpreter;
mod line_editor;
mod math_commands;
mod system_commands;
#[cfg(test)]
mod testing;

/// Register all built-in commands into a registry.
pub use commands::register_builtins;
/// Submitted-line history with a browsing index.
pub use history::History;
/// A single executable command trait.
pub use interpreter::Command;
/// Ordered command table with dispatch.
pub use interpreter::CommandRegistry;
/// Capabilities handed to every command.
pub use interpreter::Environment;
/// Key-driven line editor with incremental redraw.
pub use line_editor::LineEditor;
/// Sandboxed arithmetic evaluator used by `calc`.
pub use math_commands::eval_expr;
