//! Display utilities for the cake counter CLI.
//!
//! This module provides formatted output for:
//! - Applied updates
//! - The current count
//! - Error messages

use std::io::{self, Write};

use crate::counter::{CounterOutcome, CounterUpdate};
use crate::types::CakeCount;

// ============================================================================
// CounterDisplay
// ============================================================================

/// Writes counter results to an output stream.
pub struct CounterDisplay<W: Write> {
    out: W,
}

impl CounterDisplay<io::Stdout> {
    /// Creates a display writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CounterDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the display, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Shows the outcome of one invocation.
    pub fn show_outcome(&mut self, outcome: &CounterOutcome) -> io::Result<()> {
        for update in &outcome.updates {
            self.show_update(update)?;
        }
        if outcome.show {
            self.show_count(outcome.count)?;
        }
        self.out.flush()
    }

    /// Shows a single applied update.
    pub fn show_update(&mut self, update: &CounterUpdate) -> io::Result<()> {
        match update {
            CounterUpdate::Added(cakes) => writeln!(self.out, "Added {} cakes.", cakes),
            CounterUpdate::Removed(cakes) => writeln!(self.out, "Removed {} cakes.", cakes),
        }
    }

    /// Shows the current count.
    pub fn show_count(&mut self, count: CakeCount) -> io::Result<()> {
        writeln!(self.out, "Current cake count: {}", count)
    }
}

/// Shows an error message.
pub fn show_error(message: &str) {
    eprintln!("Error: {}", message);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn render(outcome: &CounterOutcome) -> String {
        let mut display = CounterDisplay::new(Vec::new());
        display.show_outcome(outcome).unwrap();
        String::from_utf8(display.into_inner()).unwrap()
    }

    #[test]
    fn test_show_count_only() {
        let outcome = CounterOutcome {
            count: CakeCount::new(5),
            updates: vec![],
            show: true,
        };
        assert_eq!(render(&outcome), "Current cake count: 5\n");
    }

    #[test]
    fn test_show_updates_without_count() {
        let outcome = CounterOutcome {
            count: CakeCount::new(2),
            updates: vec![CounterUpdate::Added(5), CounterUpdate::Removed(3)],
            show: false,
        };
        assert_eq!(render(&outcome), "Added 5 cakes.\nRemoved 3 cakes.\n");
    }

    #[test]
    fn test_show_updates_and_count() {
        let outcome = CounterOutcome {
            count: CakeCount::new(-1),
            updates: vec![CounterUpdate::Removed(1)],
            show: true,
        };
        assert_eq!(
            render(&outcome),
            "Removed 1 cakes.\nCurrent cake count: -1\n"
        );
    }

    #[test]
    fn test_show_error() {
        // This test verifies the function doesn't panic
        show_error("Test error message");
    }
}
