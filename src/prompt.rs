// Interactive input.
// The pipeline has exactly one suspension point: a yes/no question per
// platform branch. The handle is injected into the installer at
// construction so it is dropped on every exit path, and so tests can
// script responses instead of blocking on stdin.

use std::io::{self, BufRead, Write};

use crate::error::SetupError;

/// Capability interface over the interactive channel.
pub trait Prompter {
    /// Prints `prompt`, then blocks until one line of input is entered.
    /// The returned string has surrounding whitespace trimmed. There is
    /// no timeout; the call waits indefinitely.
    fn ask(&mut self, prompt: &str) -> Result<String, SetupError>;
}

/// Production `Prompter` over stdin/stdout.
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, SetupError> {
        print!("{prompt} ");
        io::stdout().flush().map_err(SetupError::Prompt)?;

        let mut input = String::new();
        io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(SetupError::Prompt)?;

        Ok(input.trim().to_string())
    }
}

/// Whether a captured response is the affirmative token.
///
/// The response is trimmed and lowercased, then compared against `"y"`.
/// Anything else, including empty input, counts as a decline.
pub fn is_affirmative(response: &str) -> bool {
    response.trim().to_lowercase() == "y"
}
