//! Line input for the countdown prompt.

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

use console::Term;
use dialoguer::Input;

use super::error::CountdownError;

/// Prompt text shown when asking for the target time.
pub const PROMPT_TEXT: &str = "Enter cake time";

/// Source of user-entered lines.
pub trait InputPrompt {
    /// Asks the user for one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error when the user interrupts the prompt, input is
    /// exhausted, or the terminal cannot be read.
    fn ask(&mut self) -> Result<String, CountdownError>;
}

// ============================================================================
// TerminalPrompt
// ============================================================================

/// Interactive prompt on the controlling terminal.
///
/// Falls back to reading plain lines from stdin when stdin is not a
/// terminal, e.g. when input is piped.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn ask_interactive(&self) -> Result<String, CountdownError> {
        let line: String = Input::new()
            .with_prompt(PROMPT_TEXT)
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    }
}

impl InputPrompt for TerminalPrompt {
    fn ask(&mut self) -> Result<String, CountdownError> {
        if reads_interactively(io::stdin().is_terminal(), Term::stderr().is_term()) {
            self.ask_interactive()
        } else {
            read_plain_line(io::stdin().lock(), io::stdout().lock())
        }
    }
}

/// dialoguer reads keys from the tty and draws on stderr, so both must be
/// terminals. Piped stdin always wins, whatever stdout is attached to.
fn reads_interactively(stdin_is_term: bool, stderr_is_term: bool) -> bool {
    stdin_is_term && stderr_is_term
}

/// Writes the prompt to `out` and reads one line from `input`.
fn read_plain_line<R, W>(mut input: R, mut out: W) -> Result<String, CountdownError>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{}: ", PROMPT_TEXT)?;
    out.flush()?;
    // Others may print while this thread waits on input
    drop(out);

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CountdownError::InputClosed);
    }
    Ok(line)
}

// ============================================================================
// ScriptedPrompt
// ============================================================================

/// Prompt replaying a fixed list of answers, for testing.
///
/// Once the script is exhausted every further `ask` reports closed input.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: usize,
}

impl ScriptedPrompt {
    #[must_use]
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: 0,
        }
    }

    /// Number of times the prompt was asked.
    pub fn asked(&self) -> usize {
        self.asked
    }
}

impl InputPrompt for ScriptedPrompt {
    fn ask(&mut self) -> Result<String, CountdownError> {
        self.asked += 1;
        self.answers.pop_front().ok_or(CountdownError::InputClosed)
    }
}
