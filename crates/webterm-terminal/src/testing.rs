//! Shared test doubles.

use chrono::{DateTime, FixedOffset, TimeZone};
use webterm_platform::{HostInfoService, TimeService};
use webterm_types::console::MemoryConsole;
use webterm_types::error::Result;

use crate::CommandRegistry;

/// Platform with a frozen clock and fixed host strings.
pub(crate) struct FixedPlatform {
    pub now: DateTime<FixedOffset>,
    pub platform: String,
    pub user_agent: String,
}

impl Default for FixedPlatform {
    fn default() -> Self {
        Self {
            now: FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
                .unwrap(),
            platform: "TestOS".to_string(),
            user_agent: "TestAgent/1.0".to_string(),
        }
    }
}

impl TimeService for FixedPlatform {
    fn now(&self) -> Result<DateTime<FixedOffset>> {
        Ok(self.now)
    }
}

impl HostInfoService for FixedPlatform {
    fn platform(&self) -> String {
        self.platform.clone()
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }
}

/// Registry with every builtin, backed by [`FixedPlatform`].
pub(crate) fn builtins() -> CommandRegistry {
    CommandRegistry::with_builtins(Box::new(FixedPlatform::default()))
}

/// Dispatch one line into a fresh console and return what was recorded.
pub(crate) fn run(reg: &CommandRegistry, line: &str) -> MemoryConsole {
    let mut console = MemoryConsole::new();
    reg.dispatch(line, &mut console);
    console
}
