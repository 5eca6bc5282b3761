//! Cake Counter CLI - keeps a tally of cakes
//!
//! Each invocation reads the count from `cake_count.txt`, applies
//! `--add` and `--remove`, prints the result and writes it back.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use cake_counter::cli::{init_tracing, show_error, CounterCli, CounterDisplay};
use cake_counter::counter::{self, CounterStore};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = CounterCli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = execute(cli).await {
        show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Executes the counter command.
async fn execute(cli: CounterCli) -> Result<()> {
    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return Ok(());
    }

    tracing::debug!("Counter request: {:?}", cli.request());

    let store = CounterStore::new(&cli.file);
    let outcome = counter::run(&store, &cli.request())?;

    CounterDisplay::stdout()
        .show_outcome(&outcome)
        .context("Failed to write cake count to stdout")?;

    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = CounterCli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
