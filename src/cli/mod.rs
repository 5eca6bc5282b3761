//! CLI module for the cake binaries.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `display`: Counter output formatting
//! - `logging`: Tracing subscriber setup

pub mod commands;
pub mod display;
pub mod logging;

pub use commands::{CountdownCli, CounterCli};
pub use display::{show_error, CounterDisplay};
pub use logging::init_tracing;
