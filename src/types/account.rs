//! Account-related types for the ATM simulator
//!
//! This module defines the Account structure holding the single in-memory
//! account the session operates on.

use clap::ValueEnum;

/// PIN assigned to a fresh account
pub const DEFAULT_PIN: &str = "0000";

/// Balance amount in whole currency units
///
/// There is no fractional precision; amounts are non-negative integers.
pub type Amount = u64;

/// How a deposit changes the balance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DepositMode {
    /// The deposited amount becomes the new balance
    #[default]
    Overwrite,
    /// The deposited amount is added to the balance
    Accumulate,
}

/// Account state for one session
///
/// Lives for the life of the process and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Numeric credential gating access to account operations
    pub pin: String,

    /// Current balance
    ///
    /// Unsigned, so the balance can never go negative. Withdrawals larger
    /// than the balance are rejected before they reach this field.
    pub balance: Amount,
}

impl Account {
    /// Create an account with the given PIN and opening balance
    pub fn new(pin: impl Into<String>, balance: Amount) -> Self {
        Account {
            pin: pin.into(),
            balance,
        }
    }
}

impl Default for Account {
    /// Account with PIN `0000` and a zero balance
    fn default() -> Self {
        Account::new(DEFAULT_PIN, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_account() {
        let account = Account::default();
        assert_eq!(account.pin, "0000");
        assert_eq!(account.balance, 0);
    }

    #[test]
    fn test_deposit_mode_names() {
        assert_eq!(DepositMode::default(), DepositMode::Overwrite);
        assert_eq!(
            DepositMode::from_str("accumulate", false),
            Ok(DepositMode::Accumulate)
        );
        assert_eq!(
            DepositMode::from_str("overwrite", false),
            Ok(DepositMode::Overwrite)
        );
    }
}
