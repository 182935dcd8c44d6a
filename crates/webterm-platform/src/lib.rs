//! Environment providers for WebTerm.
//!
//! Commands that report on their surroundings (`date`, `uname`) read them
//! through these traits, so the dispatcher can be driven with fixed values
//! in tests.

pub mod services;

pub use services::{DesktopPlatform, HostInfoService, Platform, TimeService};
