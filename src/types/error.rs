//! Error types for the ATM simulator
//!
//! This module defines all error types that can occur during a session.
//! Messages are written for the person at the terminal, not for a log.
//!
//! # Error Categories
//!
//! - **Fatal**: end the session with exit code 1 (too few arguments,
//!   PIN lockout, retry limit reached, output failure)
//! - **Recoverable**: reported, then control returns to the enclosing prompt
//!   (bad PIN format, bad amount, insufficient funds, unknown command)

use super::account::Amount;
use thiserror::Error;

/// Main error type for the ATM simulator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AtmError {
    /// A prompt received fewer tokens than it needs
    ///
    /// Fatal. `required` counts the command flag itself.
    #[error("At least {required} arguments are needed\n >> Got {got} Args instead")]
    InsufficientArgs {
        /// Minimum number of tokens
        required: usize,
        /// Number of tokens actually read
        got: usize,
    },

    /// Too many wrong PINs were entered
    ///
    /// Fatal. There is no recovery from a lockout within the process.
    #[error("Too many incorrect pin attempts ({limit} allowed)")]
    TooManyPinAttempts {
        /// Number of failed attempts allowed
        limit: u32,
    },

    /// A bounded re-prompt loop ran out of retries
    ///
    /// Fatal. Only raised when a retry limit is configured.
    #[error("Too many invalid entries at the {prompt} prompt (limit {limit})")]
    RetryLimitExceeded {
        /// Which prompt gave up
        prompt: &'static str,
        /// Configured number of retries
        limit: u32,
    },

    /// Writing to the terminal failed
    ///
    /// Fatal, since no further prompt can be shown.
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// A PIN did not consist of at least four digits
    #[error("Invalid pin format, ensure pin is a 4 digit number")]
    InvalidPinFormat,

    /// An amount was not a non-negative integer
    #[error("Invalid Amount '{amount}', Ensure amount is an integer not less than Zero")]
    InvalidAmount {
        /// The rejected token
        amount: String,
    },

    /// A withdrawal asked for more than the balance
    #[error("Insufficient Balance for withdrawal operation: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Balance at the time of the request
        balance: Amount,
        /// Requested withdrawal amount
        requested: Amount,
    },

    /// Adding to the balance would overflow
    #[error("Balance overflow in {operation}")]
    BalanceOverflow {
        /// Operation that would overflow
        operation: &'static str,
    },

    /// The first token of a command line matched no menu flag
    #[error("Invalid Command '{command}', check menu options below and try again")]
    UnknownCommand {
        /// The unmatched token
        command: String,
    },
}

impl AtmError {
    /// Whether this error ends the session
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AtmError::InsufficientArgs { .. }
                | AtmError::TooManyPinAttempts { .. }
                | AtmError::RetryLimitExceeded { .. }
                | AtmError::Io { .. }
        )
    }

    /// Create an InsufficientArgs error
    pub fn insufficient_args(required: usize, got: usize) -> Self {
        AtmError::InsufficientArgs { required, got }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str) -> Self {
        AtmError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create an UnknownCommand error
    pub fn unknown_command(command: &str) -> Self {
        AtmError::UnknownCommand {
            command: command.to_string(),
        }
    }
}

// Conversion from io::Error to AtmError
impl From<std::io::Error> for AtmError {
    fn from(error: std::io::Error) -> Self {
        AtmError::Io {
            message: error.to_string(),
        }
    }
}
