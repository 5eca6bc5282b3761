//! Core data types for the cake counter and countdown timer.
//!
//! This module defines the data structures used for:
//! - The persisted cake tally
//! - Countdown phases and state
//! - The countdown target derived from user input

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

// ============================================================================
// CakeCount
// ============================================================================

/// The cumulative cake tally stored in the counter file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct CakeCount(i64);

impl CakeCount {
    /// Creates a new count with the given value.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw integer value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Adds cakes, saturating at the integer bounds.
    #[must_use]
    pub fn add(self, cakes: i64) -> Self {
        Self(self.0.saturating_add(cakes))
    }

    /// Removes cakes, saturating at the integer bounds.
    #[must_use]
    pub fn remove(self, cakes: i64) -> Self {
        Self(self.0.saturating_sub(cakes))
    }
}

impl fmt::Display for CakeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CakeCount {
    type Err = std::num::ParseIntError;

    /// Parses a decimal integer, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

// ============================================================================
// CountdownPhase
// ============================================================================

/// Represents the current phase of the countdown driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownPhase {
    /// Waiting for the user to enter a target time
    #[default]
    AwaitingInput,
    /// Checking the entered time
    Validating,
    /// Ticking down once per second
    Counting,
    /// Countdown reached zero
    Finished,
    /// Interrupted by the user while counting
    Cancelled,
}

impl CountdownPhase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            CountdownPhase::AwaitingInput => "awaiting_input",
            CountdownPhase::Validating => "validating",
            CountdownPhase::Counting => "counting",
            CountdownPhase::Finished => "finished",
            CountdownPhase::Cancelled => "cancelled",
        }
    }

    /// Returns true if no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, CountdownPhase::Finished | CountdownPhase::Cancelled)
    }
}

// ============================================================================
// CountdownTarget
// ============================================================================

/// A validated point in time to count down to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownTarget {
    /// Local wall-clock time of the target
    pub at: NaiveDateTime,
    /// Whole seconds between the moment of validation and the target
    pub total_seconds: u64,
}

impl CountdownTarget {
    /// Computes the countdown length from `now`.
    ///
    /// Returns `None` when the target is not at least one whole second away.
    pub fn from_now(at: NaiveDateTime, now: NaiveDateTime) -> Option<Self> {
        let seconds = (at - now).num_seconds();
        if seconds <= 0 {
            return None;
        }
        Some(Self {
            at,
            total_seconds: seconds as u64,
        })
    }

    /// Formats the target as a 12-hour clock time, e.g. `02:30 PM`.
    pub fn clock_label(&self) -> String {
        self.at.format("%I:%M %p").to_string()
    }
}

// ============================================================================
// CountdownState
// ============================================================================

/// Progress of a running countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownState {
    /// Current phase
    pub phase: CountdownPhase,
    /// Number of ticks the countdown will perform
    pub total_seconds: u64,
    /// Ticks still to go
    pub remaining_seconds: u64,
}

impl CountdownState {
    /// Creates a counting state for the given target.
    pub fn new(target: &CountdownTarget) -> Self {
        Self {
            phase: CountdownPhase::Counting,
            total_seconds: target.total_seconds,
            remaining_seconds: target.total_seconds,
        }
    }

    /// Decrements the countdown by one second.
    ///
    /// Returns true if the countdown has completed (reached 0).
    pub fn tick(&mut self) -> bool {
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        self.remaining_seconds == 0
    }

    /// Number of ticks performed so far.
    pub fn elapsed_seconds(&self) -> u64 {
        self.total_seconds - self.remaining_seconds
    }

    /// Fraction of the countdown already elapsed, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 1.0;
        }
        self.elapsed_seconds() as f64 / self.total_seconds as f64
    }

    /// Marks the countdown as finished.
    pub fn finish(&mut self) {
        self.remaining_seconds = 0;
        self.phase = CountdownPhase::Finished;
    }

    /// Marks the countdown as cancelled.
    pub fn cancel(&mut self) {
        self.phase = CountdownPhase::Cancelled;
    }
}

/// Formats seconds as `M:SS`.
pub fn format_clock(total_seconds: u64) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

// ============================================================================
// Tests
// ============================================================================
