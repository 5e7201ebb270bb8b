//! Core module: domain models, stores and the query engines built on them

pub mod catalog;
pub mod config;
pub mod events;
pub mod models;
pub mod report;
pub mod store;

/// Returns the current version of the `qbank` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
