//! Foundation types for WebTerm.
//!
//! This crate holds the pieces shared by every WebTerm crate: the error
//! type, key event classification, the console (display surface) trait,
//! and the terminal configuration.

pub mod config;
pub mod console;
pub mod error;
pub mod input;
