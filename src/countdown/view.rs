//! Output for the countdown timer.
//!
//! The driver never prints directly; it reports what happened to a
//! [`CountdownView`]. [`TerminalView`] renders to the terminal with an
//! indicatif progress bar, [`RecordingView`] records events for tests.

use std::io::{self, Write};
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use super::celebration;
use crate::types::{format_clock, CountdownTarget};

/// Receives countdown progress for display.
pub trait CountdownView {
    /// Shows the banner and input instructions.
    fn show_intro(&mut self);

    /// Reports input that could not be parsed.
    fn show_invalid_input(&mut self);

    /// Reports a target that is already in the past.
    fn show_past_target(&mut self);

    /// Announces the accepted target and starts the progress display.
    fn start(&mut self, target: &CountdownTarget);

    /// Updates the display after one tick.
    fn tick(&mut self, remaining_seconds: u64);

    /// Completes the progress display.
    fn finish(&mut self);

    /// Shows the celebration screen.
    fn celebrate(&mut self);

    /// Reports that the countdown was cancelled.
    fn show_cancelled(&mut self);

    /// Says goodbye when the user leaves the prompt.
    fn show_goodbye(&mut self);
}

// ============================================================================
// TerminalView
// ============================================================================

/// Terminal rendering with a progress bar.
pub struct TerminalView<W: Write> {
    out: W,
    bar: Option<ProgressBar>,
    draw_bar: bool,
}

impl TerminalView<io::Stdout> {
    /// Creates a view writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout(), true)
    }
}

impl<W: Write> TerminalView<W> {
    /// Creates a view writing status lines to `out`.
    ///
    /// The progress bar is only drawn when `draw_bar` is set.
    pub fn new(out: W, draw_bar: bool) -> Self {
        Self {
            out,
            bar: None,
            draw_bar,
        }
    }

    /// Consumes the view, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl std::fmt::Display) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            tracing::warn!("Failed to write countdown output: {}", e);
        }
    }

    fn progress_style() -> ProgressStyle {
        ProgressStyle::with_template(
            "🎂 Cake Timer [{bar:40.green/white}] {percent:>3}% • {msg:.cyan} • Until {prefix:.yellow}",
        )
        .map(|s| s.progress_chars("█▉ "))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
    }
}

impl<W: Write> CountdownView for TerminalView<W> {
    fn show_intro(&mut self) {
        self.line(style("🎂 Cake Countdown Timer 🎂").cyan().bold());
        self.line("Set your cake timer and watch the countdown!");
        self.line("");
        self.line(style("How would you like to set your cake timer?").yellow());
        self.line(style("• Enter time as HH:MM (e.g., 14:30 for 2:30 PM)").dim());
        self.line(style("• Enter minutes from now (e.g., 25 for 25 minutes)").dim());
        self.line("");
    }

    fn show_invalid_input(&mut self) {
        self.line(style("Invalid time format! Please try again.").red());
    }

    fn show_past_target(&mut self) {
        self.line(style("That time has already passed! Please enter a future time.").red());
    }

    fn start(&mut self, target: &CountdownTarget) {
        self.line(style(format!("✅ Cake timer set for {}", target.clock_label())).green());
        self.line(style(format!("⏰ Counting down {} seconds...", target.total_seconds)).yellow());
        self.line("");
        if let Err(e) = self.out.flush() {
            tracing::warn!("Failed to flush countdown output: {}", e);
        }

        if !self.draw_bar {
            return;
        }

        let bar = ProgressBar::with_draw_target(
            Some(target.total_seconds),
            ProgressDrawTarget::stdout(),
        );
        bar.set_style(Self::progress_style());
        bar.set_prefix(target.clock_label());
        bar.set_message(format_clock(target.total_seconds));
        bar.enable_steady_tick(Duration::from_millis(250));
        self.bar = Some(bar);
    }

    fn tick(&mut self, remaining_seconds: u64) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
            bar.set_message(format_clock(remaining_seconds));
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.set_message(format_clock(0));
            bar.finish();
        }
    }

    fn celebrate(&mut self) {
        if self.draw_bar {
            if let Err(e) = console::Term::stdout().clear_screen() {
                tracing::warn!("Failed to clear the screen: {}", e);
            }
        }
        for line in celebration::render() {
            self.line(line);
        }
    }

    fn show_cancelled(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.abandon();
        }
        self.line("");
        self.line(style("⏹️  Cake countdown cancelled!").red());
    }

    fn show_goodbye(&mut self) {
        self.line("");
        self.line(style("👋 Goodbye!").red());
    }
}

// ============================================================================
// RecordingView
// ============================================================================

/// Events observed by a [`RecordingView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Intro,
    InvalidInput,
    PastTarget,
    Started { total_seconds: u64 },
    Tick { remaining_seconds: u64 },
    Finished,
    Celebrated,
    Cancelled,
    Goodbye,
}

/// View that records every event, for testing.
#[derive(Debug, Default)]
pub struct RecordingView {
    events: Vec<ViewEvent>,
}

impl RecordingView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events in order.
    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    /// Number of ticks displayed.
    pub fn tick_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ViewEvent::Tick { .. }))
            .count()
    }

    /// Returns true if the celebration was shown.
    pub fn celebrated(&self) -> bool {
        self.events.contains(&ViewEvent::Celebrated)
    }
}

impl CountdownView for RecordingView {
    fn show_intro(&mut self) {
        self.events.push(ViewEvent::Intro);
    }

    fn show_invalid_input(&mut self) {
        self.events.push(ViewEvent::InvalidInput);
    }

    fn show_past_target(&mut self) {
        self.events.push(ViewEvent::PastTarget);
    }

    fn start(&mut self, target: &CountdownTarget) {
        self.events.push(ViewEvent::Started {
            total_seconds: target.total_seconds,
        });
    }

    fn tick(&mut self, remaining_seconds: u64) {
        self.events.push(ViewEvent::Tick { remaining_seconds });
    }

    fn finish(&mut self) {
        self.events.push(ViewEvent::Finished);
    }

    fn celebrate(&mut self) {
        self.events.push(ViewEvent::Celebrated);
    }

    fn show_cancelled(&mut self) {
        self.events.push(ViewEvent::Cancelled);
    }

    fn show_goodbye(&mut self) {
        self.events.push(ViewEvent::Goodbye);
    }
}

// ============================================================================
// Tests
// ============================================================================
