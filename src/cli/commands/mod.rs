//! CLI command handlers for `qbank`.
//!
//! Each command is implemented in its own submodule. Handlers print results
//! to stdout and, on failure, a `✗` message to stderr before exiting with
//! status 1.

pub mod catalog;
pub mod config;
pub mod events;
pub mod report;

use qbank::error;
use std::fmt::Display;

/// Log and print a failure, then exit with status 1
pub fn fail(context: &str, err: impl Display) -> ! {
    error!("{context}: {err}");
    eprintln!("✗ {context}: {err}");
    std::process::exit(1);
}
