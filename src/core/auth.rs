//! Authentication gate
//!
//! Prompts for a PIN until the stored one is entered, a fatal limit is hit,
//! or input runs out.
//!
//! # States
//!
//! - **Awaiting PIN**: prompt, read one token, then
//!   - malformed → format error, re-prompt (no attempt consumed)
//!   - well-formed but wrong → count a failed attempt; lock out at the limit
//!   - correct → **Authenticated**, return to the caller
//!
//! The failed-attempt counter lives in the gate, not in a single call, so
//! failures accumulate across every authentication in a session unless
//! `reset_on_success` is set.

use crate::core::account_manager::AccountManager;
use crate::core::pin;
use crate::io::{Console, TokenReader};
use crate::types::AtmError;
use std::io::{BufRead, Write};

/// Failed attempts allowed before lockout
pub const DEFAULT_MAX_PIN_ATTEMPTS: u32 = 3;

const PIN_PROMPT: &str =
    "Kindly input your 4-digit pin: \n >>>> if you have not changed your pin, use default '0000'";

/// PIN challenge with a persistent failed-attempt counter
#[derive(Debug, Clone)]
pub struct AuthGate {
    failed_attempts: u32,
    max_attempts: u32,
    max_retries: Option<u32>,
    reset_on_success: bool,
}

impl AuthGate {
    /// Create a gate
    ///
    /// # Arguments
    ///
    /// * `max_attempts` - Wrong PINs allowed before lockout (at least 1)
    /// * `max_retries` - Consecutive malformed entries tolerated, `None` for no limit
    /// * `reset_on_success` - Clear the failed-attempt counter after a correct PIN
    pub fn new(max_attempts: u32, max_retries: Option<u32>, reset_on_success: bool) -> Self {
        AuthGate {
            failed_attempts: 0,
            max_attempts: max_attempts.max(1),
            max_retries,
            reset_on_success,
        }
    }

    /// Wrong PINs entered so far
    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// Run the challenge until the correct PIN is entered
    ///
    /// # Errors
    ///
    /// All errors are fatal:
    /// - [`AtmError::TooManyPinAttempts`] when the attempt limit is reached
    /// - [`AtmError::RetryLimitExceeded`] when too many malformed PINs in a row
    /// - [`AtmError::InsufficientArgs`] on a blank line or end of input
    /// - [`AtmError::Io`] if the prompt cannot be written
    pub fn authenticate<R: BufRead, W: Write>(
        &mut self,
        accounts: &AccountManager,
        input: &mut TokenReader<R>,
        console: &mut Console<W>,
    ) -> Result<(), AtmError> {
        let mut malformed = 0;

        loop {
            console.say(PIN_PROMPT)?;
            let tokens = input.read_args(1)?;
            let candidate = tokens[0].as_str();

            if !pin::is_well_formed(candidate) {
                malformed += 1;
                if let Some(limit) = self.max_retries {
                    if malformed > limit {
                        return Err(AtmError::RetryLimitExceeded {
                            prompt: "pin",
                            limit,
                        });
                    }
                }
                console.say("Error: incorrectly formed pin, ensure inputted pin is 4 digits long")?;
                continue;
            }
            malformed = 0;

            if accounts.pin_matches(candidate) {
                tracing::debug!(failed_attempts = self.failed_attempts, "authenticated");
                if self.reset_on_success {
                    self.failed_attempts = 0;
                }
                return Ok(());
            }

            self.failed_attempts += 1;
            tracing::debug!(failed_attempts = self.failed_attempts, "incorrect pin");

            let remaining = self.max_attempts.saturating_sub(self.failed_attempts);
            if remaining == 0 {
                return Err(AtmError::TooManyPinAttempts {
                    limit: self.max_attempts,
                });
            }
            console.say(&format!(
                "Error: incorrect pin try again, you have {} attempt(s) remaining",
                remaining
            ))?;
        }
    }
}

impl Default for AuthGate {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PIN_ATTEMPTS, None, false)
    }
}
