//! Session loop
//!
//! Drives one ATM session from welcome banner to farewell:
//!
//! ```text
//! welcome
//! loop:
//!     authenticate ─┐
//!     show menu     │ repeated while the command is unknown
//!     read command  │
//!     dispatch ─────┘
//!     exit command?              → end (exit code 0)
//!     "another operation?" ≠ y   → end (exit code 0)
//! fatal error anywhere           → end (exit code 1)
//! ```
//!
//! All state (account, attempt counter, configuration) is owned by the
//! [`Session`]; input and output are injected so a whole session can run
//! against in-memory buffers.

use crate::core::account_manager::AccountManager;
use crate::core::auth::{AuthGate, DEFAULT_MAX_PIN_ATTEMPTS};
use crate::core::dispatcher::{Dispatcher, Flow, DEFAULT_CURRENCY};
use crate::core::pin;
use crate::io::{Console, TokenReader, FAREWELL};
use crate::types::{Account, Amount, AtmError, DepositMode, DEFAULT_PIN, MENU};
use std::io::{BufRead, Write};

const WELCOME: &str = "########## Welcome to ATM CLI APP ##########";

const CONTINUE_PROMPT: &str =
    "Would you like to perform another operation (y for yes, or press any other key to exit)";

/// Configuration for a session
///
/// `Default` reproduces the classic behavior: PIN `0000`, zero balance,
/// three attempts that never reset, deposits that overwrite the balance and
/// unbounded re-prompting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// PIN the account starts with
    pub pin: String,
    /// Balance the account starts with
    pub initial_balance: Amount,
    /// Wrong PINs allowed before lockout
    pub max_pin_attempts: u32,
    /// Clear the failed-attempt counter after each successful authentication
    pub reset_attempts_on_success: bool,
    /// Whether a deposit replaces or adds to the balance
    pub deposit_mode: DepositMode,
    /// Bound on consecutive malformed PINs and consecutive unknown commands
    pub max_retries: Option<u32>,
    /// Symbol printed in front of amounts
    pub currency: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pin: DEFAULT_PIN.to_string(),
            initial_balance: 0,
            max_pin_attempts: DEFAULT_MAX_PIN_ATTEMPTS,
            reset_attempts_on_success: false,
            deposit_mode: DepositMode::default(),
            max_retries: None,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl SessionConfig {
    /// Replace invalid values with defaults
    ///
    /// A malformed PIN or a zero attempt limit falls back to the default
    /// with a warning.
    pub fn validated(self) -> Self {
        let default = Self::default();

        let pin = if pin::is_well_formed(&self.pin) {
            self.pin
        } else {
            tracing::warn!("invalid pin in configuration, using default");
            default.pin
        };

        let max_pin_attempts = if self.max_pin_attempts == 0 {
            tracing::warn!(
                "invalid max_pin_attempts (0), using default ({})",
                default.max_pin_attempts
            );
            default.max_pin_attempts
        } else {
            self.max_pin_attempts
        };

        Self {
            pin,
            max_pin_attempts,
            ..self
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The exit command was issued
    Exited,
    /// The user declined another operation
    Declined,
    /// A fatal error stopped the session
    Failed(AtmError),
}

impl SessionEnd {
    /// Process exit code for this ending
    pub fn exit_code(&self) -> i32 {
        match self {
            SessionEnd::Exited | SessionEnd::Declined => 0,
            SessionEnd::Failed(_) => 1,
        }
    }
}

/// One interactive ATM session
pub struct Session<R, W> {
    input: TokenReader<R>,
    console: Console<W>,
    accounts: AccountManager,
    gate: AuthGate,
    dispatcher: Dispatcher,
    max_retries: Option<u32>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session reading commands from `input` and writing to `output`
    pub fn new(config: SessionConfig, input: R, output: W) -> Self {
        let config = config.validated();

        Session {
            input: TokenReader::new(input),
            console: Console::new(output),
            accounts: AccountManager::new(
                Account::new(config.pin, config.initial_balance),
                config.deposit_mode,
            ),
            gate: AuthGate::new(
                config.max_pin_attempts,
                config.max_retries,
                config.reset_attempts_on_success,
            ),
            dispatcher: Dispatcher::new(config.currency),
            max_retries: config.max_retries,
        }
    }

    /// Account state as it stands
    pub fn account(&self) -> &Account {
        self.accounts.account()
    }

    /// Run until exit, decline, or a fatal error
    ///
    /// Fatal errors are reported to the user before the farewell; the
    /// farewell is printed on every ending.
    pub fn run(&mut self) -> SessionEnd {
        let end = match self.drive() {
            Ok(end) => end,
            Err(e) => {
                if let Err(write_error) = self.console.error(&e) {
                    tracing::error!(error = %write_error, "failed to report fatal error");
                }
                SessionEnd::Failed(e)
            }
        };

        if let Err(e) = self.console.say(FAREWELL) {
            tracing::error!(error = %e, "failed to write farewell");
        }

        tracing::debug!(?end, "session ended");
        end
    }

    /// Consume the session, returning its output sink
    pub fn into_output(self) -> W {
        self.console.into_inner()
    }

    fn drive(&mut self) -> Result<SessionEnd, AtmError> {
        self.console.say(WELCOME)?;

        loop {
            if self.run_operation()? == Flow::Exit {
                return Ok(SessionEnd::Exited);
            }

            self.console.say(CONTINUE_PROMPT)?;
            let answer = self.input.read_tokens();
            if !matches!(answer.first().map(String::as_str), Some("y" | "Y")) {
                return Ok(SessionEnd::Declined);
            }
        }
    }

    /// Authenticate, show the menu and dispatch one command
    ///
    /// An unknown command restarts the whole cycle, authentication included.
    fn run_operation(&mut self) -> Result<Flow, AtmError> {
        let mut invalid_commands = 0;

        loop {
            self.gate
                .authenticate(&self.accounts, &mut self.input, &mut self.console)?;
            self.console.show_menu(&MENU)?;

            let tokens = self.input.read_args(1)?;
            match self
                .dispatcher
                .dispatch(&tokens, &mut self.accounts, &mut self.console)
            {
                Err(e @ AtmError::UnknownCommand { .. }) => {
                    invalid_commands += 1;
                    if let Some(limit) = self.max_retries {
                        if invalid_commands > limit {
                            return Err(AtmError::RetryLimitExceeded {
                                prompt: "command",
                                limit,
                            });
                        }
                    }
                    self.console.error(&e)?;
                }
                other => return other,
            }
        }
    }
}
