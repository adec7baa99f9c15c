//! Interactive agent count prompt.

use std::io::{self, BufRead, Write};

/// Errors that can occur while reading the philosopher count
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Failed to read philosopher count: {0}")]
    Io(#[from] io::Error),

    #[error("No philosopher count given (input closed)")]
    Closed,

    #[error("Invalid philosopher count: {input:?}")]
    Invalid { input: String },
}

/// Ask for the number of philosophers and read one line of input.
///
/// Any surrounding whitespace is ignored; the value must be a
/// non-negative integer.
pub fn prompt_agent_count<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> Result<usize, PromptError> {
    write!(output, "Enter the number of philosophers: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::Closed);
    }

    let trimmed = line.trim();
    trimmed.parse().map_err(|_| PromptError::Invalid {
        input: trimmed.to_string(),
    })
}
