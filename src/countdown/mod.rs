//! Cake countdown timer.
//!
//! This module provides the interactive countdown:
//! - `parser`: `HH:MM` and minutes-from-now input parsing
//! - `clock`: wall-clock abstraction
//! - `prompt`: line input from the terminal
//! - `view`: progress and status output
//! - `celebration`: the cake shown at zero
//! - `driver`: the state machine tying them together

pub mod celebration;
pub mod clock;
pub mod driver;
mod error;
pub mod parser;
pub mod prompt;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use driver::{CountdownDriver, CountdownOutcome};
pub use error::CountdownError;
pub use parser::{parse_time_input, parse_time_input_at};
pub use prompt::{InputPrompt, ScriptedPrompt, TerminalPrompt};
pub use view::{CountdownView, RecordingView, TerminalView, ViewEvent};

/// Resolves when the user presses Ctrl+C.
///
/// If the signal handler cannot be installed the countdown simply runs
/// to completion.
pub async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
