//! Built-in commands for the WebTerm terminal.

use webterm_types::error::Result;

use crate::interpreter::{Command, CommandRegistry, Environment};

/// Column width the command names are padded to in `help`.
const HELP_NAME_WIDTH: usize = 15;

/// Register all built-in commands into a registry.
///
/// Registration order is the order `help` lists them in.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(EchoCmd));
    // date, whoami, uname
    crate::system_commands::register_system_commands(reg);
    // calc
    crate::math_commands::register_math_commands(reg);
    // random, lorem
    crate::fun_commands::register_fun_commands(reg);
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Display available commands"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let usage_indent = " ".repeat(HELP_NAME_WIDTH + 4);
        env.console.write_line("Available commands:");
        env.console.write_line("");
        for cmd in env.commands {
            env.console.write_line(&format!(
                "  {:<width$} - {}",
                cmd.name(),
                cmd.description(),
                width = HELP_NAME_WIDTH
            ));
            if let Some(usage) = cmd.usage() {
                env.console
                    .write_line(&format!("{usage_indent}Usage: {usage}"));
            }
        }
        env.console.write_line("");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal screen"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        env.console.clear();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print text to the terminal"
    }
    fn usage(&self) -> Option<&str> {
        Some("echo <text>")
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        env.console.write_line(&args.join(" "));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{builtins, run};
    use webterm_types::console::ConsoleOp;

    const BUILTIN_ORDER: [&str; 9] = [
        "help", "clear", "echo", "date", "whoami", "uname", "calc", "random", "lorem",
    ];

    #[test]
    fn builtins_registered_in_order() {
        let reg = builtins();
        let names: Vec<&str> = reg.list_commands().iter().map(|c| c.name()).collect();
        assert_eq!(names, BUILTIN_ORDER);
    }

    #[test]
    fn every_builtin_has_description() {
        let reg = builtins();
        for cmd in reg.list_commands() {
            assert!(!cmd.description().is_empty(), "{} lacks a description", cmd.name());
        }
    }

    #[test]
    fn help_lists_every_command_in_order() {
        let reg = builtins();
        let console = run(&reg, "help");
        let lines = console.lines();
        assert_eq!(lines[0], "Available commands:");
        assert_eq!(lines[1], "");
        assert_eq!(*lines.last().unwrap(), "");

        let described: Vec<&str> = lines
            .iter()
            .filter(|l| l.contains(" - "))
            .map(|l| l.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(described, BUILTIN_ORDER);
    }

    #[test]
    fn help_adds_usage_line_per_command_with_usage() {
        let reg = builtins();
        let console = run(&reg, "help");
        let lines = console.lines();
        let with_usage = reg
            .list_commands()
            .iter()
            .filter(|c| c.usage().is_some())
            .count();
        let usage_lines = lines.iter().filter(|l| l.trim_start().starts_with("Usage: ")).count();
        assert_eq!(usage_lines, with_usage);
        // header + blank + one per command + usages + trailing blank
        assert_eq!(lines.len(), 3 + reg.list_commands().len() + with_usage);
    }

    #[test]
    fn help_usage_line_follows_its_command() {
        let console = run(&builtins(), "help");
        let lines = console.lines();
        let echo = lines.iter().position(|l| l.trim_start().starts_with("echo")).unwrap();
        assert_eq!(lines[echo + 1], "                   Usage: echo <text>");
    }

    #[test]
    fn help_pads_names_to_fixed_column() {
        let console = run(&builtins(), "help");
        let lines = console.lines();
        assert!(lines.contains(&"  help            - Display available commands"));
        assert!(lines.contains(&"  whoami          - Display current user information"));
    }

    #[test]
    fn help_is_case_insensitive() {
        let reg = builtins();
        assert_eq!(run(&reg, "HELP").ops(), run(&reg, "help").ops());
    }

    #[test]
    fn clear_only_clears() {
        let console = run(&builtins(), "clear");
        assert_eq!(console.ops(), &[ConsoleOp::Clear]);
    }

    #[test]
    fn echo_joins_arguments() {
        let console = run(&builtins(), "echo a b c");
        assert_eq!(console.lines(), vec!["a b c"]);
    }

    #[test]
    fn echo_without_arguments_prints_empty_line() {
        let console = run(&builtins(), "echo");
        assert_eq!(console.lines(), vec![""]);
    }

    #[test]
    fn empty_and_blank_lines_are_silent() {
        let reg = builtins();
        assert!(run(&reg, "").is_empty());
        assert!(run(&reg, "   ").is_empty());
    }

    #[test]
    fn unknown_command_hint() {
        let console = run(&builtins(), "unknown");
        assert_eq!(
            console.lines(),
            vec!["Command not found: unknown", "Type 'help' for available commands"]
        );
    }
}
