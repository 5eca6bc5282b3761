//! Countdown driver.
//!
//! This module runs the countdown state machine:
//! - Prompt until a valid, future target is entered
//! - Tick once per second with tokio::time::interval
//! - Celebrate on completion, or stop early on cancellation

use std::future::Future;

use tokio::time::{interval, sleep, Duration, MissedTickBehavior};

use super::clock::Clock;
use super::error::CountdownError;
use super::parser::parse_time_input_at;
use super::prompt::InputPrompt;
use super::view::CountdownView;
use crate::types::{CountdownPhase, CountdownState, CountdownTarget};

/// Pause between the last tick and the celebration.
const CELEBRATION_DELAY: Duration = Duration::from_millis(500);

/// How a countdown run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    /// All ticks were performed and the celebration was shown
    Completed,
    /// The user interrupted the countdown
    Cancelled,
}

/// Drives a countdown from user input to celebration.
pub struct CountdownDriver<P, V, C> {
    prompt: P,
    view: V,
    clock: C,
    phase: CountdownPhase,
}

impl<P, V, C> CountdownDriver<P, V, C>
where
    P: InputPrompt,
    V: CountdownView,
    C: Clock,
{
    /// Creates a new driver in the `AwaitingInput` phase.
    pub fn new(prompt: P, view: V, clock: C) -> Self {
        Self {
            prompt,
            view,
            clock,
            phase: CountdownPhase::AwaitingInput,
        }
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    /// Returns the view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Returns the prompt.
    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Prompts until the user enters a valid future target.
    ///
    /// Invalid and past times are reported to the view and asked again.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt is interrupted or input runs out.
    pub fn acquire_target(&mut self) -> Result<CountdownTarget, CountdownError> {
        loop {
            self.phase = CountdownPhase::AwaitingInput;
            let input = self.prompt.ask()?;

            self.phase = CountdownPhase::Validating;
            let Some(at) = parse_time_input_at(&input, self.clock.now()) else {
                tracing::debug!("Rejected cake time input {:?}", input.trim());
                self.view.show_invalid_input();
                continue;
            };

            // Time passes between parsing and here; a target can expire in between.
            match CountdownTarget::from_now(at, self.clock.now()) {
                Some(target) => {
                    tracing::info!(
                        "Cake timer set for {} ({} seconds)",
                        at,
                        target.total_seconds
                    );
                    return Ok(target);
                }
                None => {
                    tracing::debug!("Cake time {} has already passed", at);
                    self.view.show_past_target();
                }
            }
        }
    }

    /// Counts down to `target`, one tick per second.
    ///
    /// Performs exactly `target.total_seconds` ticks and then celebrates,
    /// unless `cancel` resolves first.
    pub async fn count_down<F>(&mut self, target: &CountdownTarget, cancel: F) -> CountdownOutcome
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(cancel);

        let mut state = CountdownState::new(target);
        self.phase = state.phase;
        self.view.start(target);

        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately.
        ticker.tick().await;

        while state.remaining_seconds > 0 {
            tokio::select! {
                biased;
                _ = &mut cancel => {
                    state.cancel();
                    self.phase = state.phase;
                    tracing::info!(
                        "Cake countdown cancelled with {} seconds left",
                        state.remaining_seconds
                    );
                    self.view.show_cancelled();
                    return CountdownOutcome::Cancelled;
                }
                _ = ticker.tick() => {
                    state.tick();
                    tracing::trace!("Tick, {} seconds left", state.remaining_seconds);
                    self.view.tick(state.remaining_seconds);
                }
            }
        }

        self.view.finish();

        // Still counting until the pause is over
        tokio::select! {
            biased;
            _ = &mut cancel => {
                state.cancel();
                self.phase = state.phase;
                tracing::info!("Cake countdown cancelled before the celebration");
                self.view.show_cancelled();
                return CountdownOutcome::Cancelled;
            }
            _ = sleep(CELEBRATION_DELAY) => {}
        }

        state.finish();
        self.phase = state.phase;
        self.view.celebrate();

        CountdownOutcome::Completed
    }

    /// Shows the intro and prompts for a target.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails. Leaving the prompt is reported
    /// to the view as a goodbye before the error is returned.
    pub fn prompt_for_target(&mut self) -> Result<CountdownTarget, CountdownError> {
        self.view.show_intro();

        self.acquire_target().inspect_err(|e| {
            if e.is_user_exit() {
                self.view.show_goodbye();
            }
        })
    }

    /// Runs the full flow: intro, prompt, countdown and celebration.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails, see [`Self::prompt_for_target`].
    pub async fn run<F>(&mut self, cancel: F) -> Result<CountdownOutcome, CountdownError>
    where
        F: Future<Output = ()>,
    {
        let target = self.prompt_for_target()?;
        Ok(self.count_down(&target, cancel).await)
    }
}

// ============================================================================
// Tests
// ============================================================================
