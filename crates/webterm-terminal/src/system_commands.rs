//! System information commands: date, whoami, uname.

use webterm_types::error::Result;

use crate::interpreter::{Command, CommandRegistry, Environment};

/// Product line printed first by `uname`.
const PRODUCT_LINE: &str = "Web Terminal v1.0.0";

/// Same layout as a browser's `Date.toString()`, minus the zone name.
const DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Display current date and time"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let now = env.platform.now()?;
        env.console
            .write_line(&now.format(DATE_FORMAT).to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Display current user information"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        env.console.write_line("guest");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// uname
// ---------------------------------------------------------------------------

struct UnameCmd;
impl Command for UnameCmd {
    fn name(&self) -> &str {
        "uname"
    }
    fn description(&self) -> &str {
        "Display system information"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let platform = env.platform.platform();
        let agent = env.platform.user_agent();
        env.console.write_line(PRODUCT_LINE);
        env.console.write_line(&format!("Platform: {platform}"));
        env.console.write_line(&format!("User Agent: {agent}"));
        Ok(())
    }
}

/// Register system commands.
pub fn register_system_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(UnameCmd));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FixedPlatform, builtins, run};
    use chrono::{FixedOffset, TimeZone};

    fn registry_with(platform: FixedPlatform) -> CommandRegistry {
        let mut reg = CommandRegistry::new(Box::new(platform));
        register_system_commands(&mut reg);
        reg
    }

    #[test]
    fn whoami_returns_guest() {
        assert_eq!(run(&builtins(), "whoami").lines(), vec!["guest"]);
    }

    #[test]
    fn whoami_ignores_arguments() {
        assert_eq!(run(&builtins(), "whoami --all").lines(), vec!["guest"]);
    }

    #[test]
    fn date_formats_injected_clock() {
        let console = run(&builtins(), "date");
        assert_eq!(console.lines(), vec!["Tue Jan 02 2024 03:04:05 GMT+0000"]);
    }

    #[test]
    fn date_keeps_offset() {
        let platform = FixedPlatform {
            now: FixedOffset::west_opt(5 * 3600)
                .unwrap()
                .with_ymd_and_hms(2025, 12, 31, 23, 59, 58)
                .unwrap(),
            ..FixedPlatform::default()
        };
        let console = run(&registry_with(platform), "date");
        assert_eq!(console.lines(), vec!["Wed Dec 31 2025 23:59:58 GMT-0500"]);
    }

    #[test]
    fn uname_prints_product_and_host() {
        let console = run(&builtins(), "uname");
        assert_eq!(
            console.lines(),
            vec![
                "Web Terminal v1.0.0",
                "Platform: TestOS",
                "User Agent: TestAgent/1.0",
            ]
        );
    }

    #[test]
    fn uname_passes_host_strings_through_opaquely() {
        let platform = FixedPlatform {
            platform: "MacIntel".to_string(),
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)".to_string(),
            ..FixedPlatform::default()
        };
        let console = run(&registry_with(platform), "uname -a");
        assert_eq!(console.lines()[1], "Platform: MacIntel");
        assert_eq!(
            console.lines()[2],
            "User Agent: Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)"
        );
    }
}
