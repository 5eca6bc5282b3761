//! Cake Countdown Timer - counts down to cake time
//!
//! Prompts for a time as `HH:MM` or minutes from now, shows a progress
//! bar ticking once per second and celebrates at zero. Ctrl+C cancels.

use anyhow::{Context, Result};
use clap::Parser;

use cake_counter::cli::{init_tracing, show_error, CountdownCli};
use cake_counter::countdown::{
    self, CountdownDriver, CountdownView, SystemClock, TerminalPrompt, TerminalView,
};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // No options besides --help and --version
    let CountdownCli {} = CountdownCli::parse();

    // Initialize logging
    init_tracing(false);

    if let Err(e) = execute().await {
        show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Runs the interactive countdown.
///
/// Ctrl+C is handled for the whole run: at the prompt it says goodbye,
/// while counting it cancels the countdown.
async fn execute() -> Result<()> {
    let interrupted = countdown::ctrl_c();
    tokio::pin!(interrupted);

    let mut driver = CountdownDriver::new(TerminalPrompt::new(), TerminalView::stdout(), SystemClock);

    // Reading stdin blocks, so the prompt runs off the runtime thread
    let prompting = tokio::task::spawn_blocking(move || {
        let target = driver.prompt_for_target();
        (driver, target)
    });

    let (mut driver, target) = tokio::select! {
        biased;
        _ = &mut interrupted => {
            tracing::debug!("Interrupted at the prompt");
            TerminalView::stdout().show_goodbye();
            // The blocked stdin read cannot be joined
            std::process::exit(0);
        }
        joined = prompting => joined.context("Prompt task failed")?,
    };

    match target {
        Ok(target) => {
            let outcome = driver.count_down(&target, interrupted).await;
            tracing::debug!("Countdown ended: {:?}", outcome);
            Ok(())
        }
        // Ctrl+C or end of input at the prompt
        Err(e) if e.is_user_exit() => Ok(()),
        Err(e) => Err(e.into()),
    }
}
