//! Cake Counter Library
//!
//! This library provides the core functionality for the two cake binaries:
//! - Persistent cake counter backed by a plain-text file
//! - Countdown timer with `HH:MM` / minutes-from-now input
//! - CLI command parsing and display utilities
//! - Type definitions for counts and countdown state

pub mod cli;
pub mod countdown;
pub mod counter;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{CakeCount, CountdownPhase, CountdownState, CountdownTarget};

pub use counter::{CounterError, CounterOutcome, CounterRequest, CounterStore, CounterUpdate};

pub use countdown::{
    parse_time_input, parse_time_input_at, CountdownDriver, CountdownError, CountdownOutcome,
    CountdownView, InputPrompt, RecordingView, ScriptedPrompt, TerminalPrompt, TerminalView,
};
