//! Platform service traits and desktop implementation.

use chrono::{DateTime, FixedOffset, Local};
use webterm_types::error::Result;

// ---------------------------------------------------------------------------
// Time service
// ---------------------------------------------------------------------------

/// Abstraction over the wall clock.
pub trait TimeService {
    /// Current local time, with the UTC offset it was observed at.
    fn now(&self) -> Result<DateTime<FixedOffset>>;
}

// ---------------------------------------------------------------------------
// Host info service
// ---------------------------------------------------------------------------

/// Opaque descriptive strings about the host the terminal runs in.
pub trait HostInfoService {
    /// Host platform string (e.g. "linux x86_64").
    fn platform(&self) -> String;

    /// Agent string identifying the program hosting the terminal.
    fn user_agent(&self) -> String;
}

/// Aggregate trait providing access to all environment providers.
///
/// `Send + Sync` so a registry holding one can be shared across threads.
pub trait Platform: TimeService + HostInfoService + Send + Sync {}

impl<T: TimeService + HostInfoService + Send + Sync> Platform for T {}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Default platform for native builds: local clock plus build-target strings.
#[derive(Debug, Clone)]
pub struct DesktopPlatform {
    platform: String,
    user_agent: String,
}

impl DesktopPlatform {
    pub fn new() -> Self {
        let os = std::env::consts::OS;
        let arch = std::env::consts::ARCH;
        Self {
            platform: format!("{os} {arch}"),
            user_agent: format!(
                "WebTerm/{} ({os}; {arch}) rust",
                env!("CARGO_PKG_VERSION")
            ),
        }
    }

    /// Override the reported host strings (e.g. with values handed over by
    /// an embedding surface).
    pub fn with_host_info(platform: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            user_agent: user_agent.into(),
        }
    }
}

impl Default for DesktopPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeService for DesktopPlatform {
    fn now(&self) -> Result<DateTime<FixedOffset>> {
        Ok(Local::now().fixed_offset())
    }
}

impl HostInfoService for DesktopPlatform {
    fn platform(&self) -> String {
        self.platform.clone()
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }
}
