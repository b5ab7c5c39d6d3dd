//! Line-oriented token reader (the Input Reader)
//!
//! Reads one line at a time from any `BufRead` source and splits it on
//! whitespace into tokens.
//!
//! # Error Handling
//!
//! - A low-level read failure is reported on the error stream (through
//!   `tracing`) and otherwise ignored; whatever was read is tokenized.
//! - Bytes that are not valid UTF-8 become U+FFFD instead of discarding
//!   the line.
//! - A line with fewer tokens than required yields
//!   [`AtmError::InsufficientArgs`], which the session treats as fatal.
//! - End of input reads as an empty line.

use crate::types::AtmError;
use std::io::BufRead;

/// Reads whitespace-delimited tokens, one line per call
#[derive(Debug)]
pub struct TokenReader<R> {
    input: R,
}

impl<R: BufRead> TokenReader<R> {
    /// Wrap a buffered input source
    pub fn new(input: R) -> Self {
        TokenReader { input }
    }

    /// Read one line and return its tokens, possibly none
    pub fn read_tokens(&mut self) -> Vec<String> {
        let mut line = Vec::new();
        if let Err(e) = self.input.read_until(b'\n', &mut line) {
            tracing::error!(error = %e, "failed to read from input");
        }
        tokenize(&String::from_utf8_lossy(&line))
    }

    /// Read one line that must hold at least `min_args` tokens
    ///
    /// # Errors
    ///
    /// Returns [`AtmError::InsufficientArgs`] when the line is short.
    pub fn read_args(&mut self, min_args: usize) -> Result<Vec<String>, AtmError> {
        let tokens = self.read_tokens();
        if tokens.len() < min_args {
            return Err(AtmError::insufficient_args(min_args, tokens.len()));
        }
        Ok(tokens)
    }

    /// Unwrap the underlying source
    pub fn into_inner(self) -> R {
        self.input
    }
}

/// Split a line into owned, non-empty whitespace-delimited tokens
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_owned).collect()
}
