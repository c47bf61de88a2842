//! Line-based console input with validation.

use std::io::{BufRead, Write};

use tracing::trace;

use crate::core::error::{GameError, Result};

/// Printed after rejected input, before reading again.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please try again: ";

/// Printed by `wait_for_enter` when no message is given.
pub const DEFAULT_WAIT_MESSAGE: &str = "Press <enter> to continue... ";

/// Reader side of the terminal.
#[derive(Debug)]
pub struct Console<R> {
    input: R,
}

impl<R: BufRead> Console<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Read numbers until one satisfies `is_valid`.
    ///
    /// The first whitespace-separated token of each line is parsed. Blank
    /// lines are skipped; anything else that fails to parse or is rejected
    /// prints [`INVALID_INPUT_MESSAGE`] to `out` and reads again.
    pub fn read_validated<W: Write>(
        &mut self,
        out: &mut W,
        is_valid: impl Fn(u32) -> bool,
    ) -> Result<u32> {
        loop {
            let line = self.read_line()?;
            let Some(token) = line.split_whitespace().next() else {
                continue;
            };
            match token.parse::<u32>() {
                Ok(n) if is_valid(n) => return Ok(n),
                _ => {
                    trace!(token, "rejected input");
                    write!(out, "{INVALID_INPUT_MESSAGE}")?;
                    out.flush()?;
                }
            }
        }
    }

    /// Print `message` and block until a line is entered.
    pub fn wait_for_enter<W: Write>(&mut self, out: &mut W, message: &str) -> Result<()> {
        write!(out, "{message}")?;
        out.flush()?;
        self.read_line().map(drop)
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line)
    }
}
