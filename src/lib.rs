//! Shared library for `qbank`
//! Catalog engine, record stores, event board and configuration used by the CLI

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
