//! Command dispatcher
//!
//! Routes a tokenized command line to its operation handler. The first token
//! is matched against the menu flags; the whole token list is handed to the
//! handler once the argument count is checked.
//!
//! # Error Handling
//!
//! - Unmatched flag: [`AtmError::UnknownCommand`] is returned so the session
//!   can restart its authenticate-and-dispatch cycle.
//! - Too few arguments for a matched item: [`AtmError::InsufficientArgs`]
//!   (fatal) is returned.
//! - Handler failures (bad PIN format, bad amount, insufficient funds) are
//!   reported here and the dispatch completes normally.

use crate::core::account_manager::AccountManager;
use crate::io::Console;
use crate::types::{menu, AtmError, MenuItem, Operation};
use std::io::Write;

/// Currency symbol shown with balances
pub const DEFAULT_CURRENCY: &str = "₦";

/// What the session should do after a dispatched command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Offer another operation
    Continue,
    /// The exit command was issued
    Exit,
}

/// Binds menu operations to account handlers
#[derive(Debug, Clone)]
pub struct Dispatcher {
    currency: String,
}

impl Dispatcher {
    /// Create a dispatcher that displays amounts with `currency`
    pub fn new(currency: impl Into<String>) -> Self {
        Dispatcher {
            currency: currency.into(),
        }
    }

    /// Dispatch one command line
    ///
    /// # Arguments
    ///
    /// * `tokens` - The command line, flag first
    /// * `accounts` - Account the handler operates on
    /// * `console` - Where results and recoverable errors are written
    ///
    /// # Errors
    ///
    /// - [`AtmError::UnknownCommand`] if no menu item has the flag (or `tokens` is empty)
    /// - [`AtmError::InsufficientArgs`] if the item needs more tokens
    /// - [`AtmError::Io`] if output fails
    pub fn dispatch<W: Write>(
        &self,
        tokens: &[String],
        accounts: &mut AccountManager,
        console: &mut Console<W>,
    ) -> Result<Flow, AtmError> {
        let flag = tokens.first().map(String::as_str).unwrap_or_default();
        let item = menu::lookup(flag).ok_or_else(|| AtmError::unknown_command(flag))?;

        if tokens.len() < item.min_args {
            return Err(AtmError::insufficient_args(item.min_args, tokens.len()));
        }

        tracing::debug!(operation = ?item.operation, "dispatching");

        match self.run_handler(item, tokens, accounts, console) {
            Err(e) if !e.is_fatal() => {
                console.error(&e)?;
                Ok(Flow::Continue)
            }
            other => other,
        }
    }

    fn run_handler<W: Write>(
        &self,
        item: &MenuItem,
        tokens: &[String],
        accounts: &mut AccountManager,
        console: &mut Console<W>,
    ) -> Result<Flow, AtmError> {
        match item.operation {
            Operation::ChangePin => {
                console.say(">>>>>>>>>> PIN CHANGE <<<<<<<<<<")?;
                accounts.change_pin(argument(tokens)?)?;
                console.say("Your pin has been changed")?;
            }
            Operation::Deposit => {
                console.say(">>>>>>>>>> DEPOSIT FUNDS <<<<<<<<<<")?;
                let balance = accounts.deposit(argument(tokens)?)?;
                console.say(&format!(
                    "Deposit successful, your balance is now {}{}",
                    self.currency, balance
                ))?;
            }
            Operation::Withdraw => {
                console.say(">>>>>>>>>> WITHDRAW FUNDS <<<<<<<<<<")?;
                let balance = accounts.withdraw(argument(tokens)?)?;
                console.say(&format!(
                    "Withdrawal successful, your balance is now {}{}",
                    self.currency, balance
                ))?;
            }
            Operation::Balance => {
                console.say(">>>>>>>>>> ACCOUNT BALANCE <<<<<<<<<<")?;
                console.say(&format!(
                    "Your Account Balance is : {}{}",
                    self.currency,
                    accounts.balance()
                ))?;
            }
            Operation::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }
}

/// The handler argument following the flag
///
/// `min_args` is checked before a handler runs, but a menu item that takes an
/// argument with `min_args < 2` must still fail cleanly.
fn argument(tokens: &[String]) -> Result<&str, AtmError> {
    tokens
        .get(1)
        .map(String::as_str)
        .ok_or_else(|| AtmError::insufficient_args(2, tokens.len()))
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}
