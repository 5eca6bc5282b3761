//! Command definitions for the cake binaries.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::counter::{CounterRequest, DEFAULT_COUNTER_FILE};

// ============================================================================
// Counter CLI
// ============================================================================

/// Cake Counter CLI
#[derive(Parser, Debug)]
#[command(
    name = "cake",
    version,
    about = "Cake Counter CLI",
    long_about = "Keeps a running tally of cakes in a plain-text file.\n\
                  Without --add or --remove the current count is shown."
)]
pub struct CounterCli {
    /// Add cakes to the counter
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub add: Option<i64>,

    /// Remove cakes from the counter
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub remove: Option<i64>,

    /// Show current cake count
    #[arg(long)]
    pub show: bool,

    /// Counter file location
    #[arg(long, env = "CAKE_COUNT_FILE", default_value = DEFAULT_COUNTER_FILE)]
    pub file: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

impl CounterCli {
    /// Returns the counter operations requested on the command line.
    pub fn request(&self) -> CounterRequest {
        CounterRequest {
            add: self.add,
            remove: self.remove,
            show: self.show,
        }
    }
}

// ============================================================================
// Countdown CLI
// ============================================================================

/// Cake Countdown Timer
#[derive(Parser, Debug)]
#[command(
    name = "cake-countdown",
    version,
    about = "Cake Countdown Timer",
    long_about = "Counts down to a cake time entered as HH:MM or as minutes from now,\n\
                  then celebrates. Press Ctrl+C to cancel."
)]
pub struct CountdownCli {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Counter CLI Tests
    // ------------------------------------------------------------------------

    mod counter_cli_tests {
        use super::*;

        #[test]
        fn test_parse_no_args() {
            let cli = CounterCli::parse_from(["cake"]);
            assert!(cli.add.is_none());
            assert!(cli.remove.is_none());
            assert!(!cli.show);
            assert!(!cli.verbose);
            assert!(cli.completions.is_none());
            assert!(cli.request().should_show());
        }

        #[test]
        fn test_parse_add() {
            let cli = CounterCli::parse_from(["cake", "--add", "5"]);
            assert_eq!(cli.add, Some(5));
            assert!(!cli.request().should_show());
        }

        #[test]
        fn test_parse_remove_and_show() {
            let cli = CounterCli::parse_from(["cake", "--remove", "3", "--show"]);
            assert_eq!(cli.remove, Some(3));
            assert!(cli.show);
            assert!(cli.request().should_show());
        }

        #[test]
        fn test_parse_negative_delta() {
            let cli = CounterCli::parse_from(["cake", "--add", "-2"]);
            assert_eq!(cli.add, Some(-2));
        }

        #[test]
        fn test_parse_remove_before_add() {
            let cli = CounterCli::parse_from(["cake", "--remove", "1", "--add", "4"]);
            let request = cli.request();
            assert_eq!(request.add, Some(4));
            assert_eq!(request.remove, Some(1));
        }

        #[test]
        fn test_parse_file() {
            let cli = CounterCli::parse_from(["cake", "--file", "/tmp/cakes.txt"]);
            assert_eq!(cli.file, PathBuf::from("/tmp/cakes.txt"));
        }

        #[test]
        fn test_parse_verbose() {
            let cli = CounterCli::parse_from(["cake", "-v"]);
            assert!(cli.verbose);
        }

        #[test]
        fn test_parse_completions() {
            let cli = CounterCli::parse_from(["cake", "--completions", "zsh"]);
            assert_eq!(cli.completions, Some(clap_complete::Shell::Zsh));
        }
    }

    // ------------------------------------------------------------------------
    // Error Case Tests (using try_parse)
    // ------------------------------------------------------------------------

    mod error_tests {
        use super::*;

        #[test]
        fn test_add_not_number() {
            assert!(CounterCli::try_parse_from(["cake", "--add", "abc"]).is_err());
        }

        #[test]
        fn test_add_missing_value() {
            assert!(CounterCli::try_parse_from(["cake", "--add"]).is_err());
        }

        #[test]
        fn test_unknown_flag() {
            assert!(CounterCli::try_parse_from(["cake", "--eat"]).is_err());
        }

        #[test]
        fn test_invalid_shell() {
            assert!(CounterCli::try_parse_from(["cake", "--completions", "invalid"]).is_err());
        }

        #[test]
        fn test_countdown_takes_no_arguments() {
            assert!(CountdownCli::try_parse_from(["cake-countdown"]).is_ok());
            assert!(CountdownCli::try_parse_from(["cake-countdown", "25"]).is_err());
        }
    }
}
