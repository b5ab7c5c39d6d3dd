//! Account management module
//!
//! This module provides the `AccountManager` struct which owns the session's
//! account and implements the operation handlers that mutate it:
//! - Changing the PIN
//! - Depositing (overwriting or accumulating, see [`DepositMode`])
//! - Withdrawing, never below zero
//! - Reading the balance
//!
//! Every handler validates its input before touching the account, so a
//! rejected request leaves the account exactly as it was.

use crate::core::pin;
use crate::types::{Account, Amount, AtmError, DepositMode};

/// Owns the account and applies operations to it
#[derive(Debug, Clone)]
pub struct AccountManager {
    account: Account,
    deposit_mode: DepositMode,
}

impl AccountManager {
    /// Create a manager over `account`
    pub fn new(account: Account, deposit_mode: DepositMode) -> Self {
        AccountManager {
            account,
            deposit_mode,
        }
    }

    /// Current account state
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Whether `candidate` equals the stored PIN
    pub fn pin_matches(&self, candidate: &str) -> bool {
        self.account.pin == candidate
    }

    /// Current balance
    pub fn balance(&self) -> Amount {
        self.account.balance
    }

    /// Replace the stored PIN
    ///
    /// # Errors
    ///
    /// Returns [`AtmError::InvalidPinFormat`] if `new_pin` is not at least
    /// four digits; the stored PIN is unchanged.
    pub fn change_pin(&mut self, new_pin: &str) -> Result<(), AtmError> {
        if !pin::is_well_formed(new_pin) {
            return Err(AtmError::InvalidPinFormat);
        }
        self.account.pin = new_pin.to_string();
        tracing::debug!("pin changed");
        Ok(())
    }

    /// Deposit the amount given as text
    ///
    /// In [`DepositMode::Overwrite`] the balance becomes the amount; in
    /// [`DepositMode::Accumulate`] the amount is added.
    ///
    /// # Returns
    ///
    /// The balance after the deposit.
    ///
    /// # Errors
    ///
    /// - [`AtmError::InvalidAmount`] if the text is not an integer ≥ 0
    /// - [`AtmError::BalanceOverflow`] if accumulating would overflow
    pub fn deposit(&mut self, amount: &str) -> Result<Amount, AtmError> {
        let amount = parse_amount(amount)?;

        let new_balance = match self.deposit_mode {
            DepositMode::Overwrite => amount,
            DepositMode::Accumulate => self
                .account
                .balance
                .checked_add(amount)
                .ok_or(AtmError::BalanceOverflow {
                    operation: "deposit",
                })?,
        };

        self.account.balance = new_balance;
        tracing::debug!(amount, balance = new_balance, mode = ?self.deposit_mode, "deposit");
        Ok(new_balance)
    }

    /// Withdraw the amount given as text
    ///
    /// # Returns
    ///
    /// The balance after the withdrawal.
    ///
    /// # Errors
    ///
    /// - [`AtmError::InvalidAmount`] if the text is not an integer ≥ 0
    /// - [`AtmError::InsufficientFunds`] if the amount exceeds the balance
    pub fn withdraw(&mut self, amount: &str) -> Result<Amount, AtmError> {
        let amount = parse_amount(amount)?;

        let new_balance =
            self.account
                .balance
                .checked_sub(amount)
                .ok_or(AtmError::InsufficientFunds {
                    balance: self.account.balance,
                    requested: amount,
                })?;

        self.account.balance = new_balance;
        tracing::debug!(amount, balance = new_balance, "withdrawal");
        Ok(new_balance)
    }
}

impl Default for AccountManager {
    fn default() -> Self {
        Self::new(Account::default(), DepositMode::default())
    }
}

/// Parse a signed integer token and require it to be non-negative
fn parse_amount(token: &str) -> Result<Amount, AtmError> {
    token
        .parse::<i64>()
        .ok()
        .and_then(|value| Amount::try_from(value).ok())
        .ok_or_else(|| AtmError::invalid_amount(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn manager_with_balance(balance: Amount, mode: DepositMode) -> AccountManager {
        AccountManager::new(Account::new("0000", balance), mode)
    }

    #[rstest]
    #[case::four_digits("4321")]
    #[case::longer("123456")]
    fn test_change_pin(#[case] new_pin: &str) {
        let mut manager = AccountManager::default();
        manager.change_pin(new_pin).unwrap();
        assert!(manager.pin_matches(new_pin));
        assert!(!manager.pin_matches("0000"));
    }

    #[rstest]
    #[case::short("123")]
    #[case::letters("abcd")]
    fn test_change_pin_rejects_malformed(#[case] new_pin: &str) {
        let mut manager = AccountManager::default();
        assert_eq!(
            manager.change_pin(new_pin).unwrap_err(),
            AtmError::InvalidPinFormat
        );
        assert!(manager.pin_matches("0000"));
    }

    #[test]
    fn test_deposit_overwrites_balance() {
        let mut manager = AccountManager::default();
        assert_eq!(manager.deposit("500").unwrap(), 500);
        assert_eq!(manager.deposit("300").unwrap(), 300);
        assert_eq!(manager.balance(), 300);
    }

    #[test]
    fn test_deposit_accumulates_when_configured() {
        let mut manager = manager_with_balance(0, DepositMode::Accumulate);
        manager.deposit("500").unwrap();
        manager.deposit("300").unwrap();
        assert_eq!(manager.balance(), 800);
    }

    #[test]
    fn test_deposit_overflow_leaves_balance() {
        let mut manager = manager_with_balance(Amount::MAX, DepositMode::Accumulate);
        assert_eq!(
            manager.deposit("1").unwrap_err(),
            AtmError::BalanceOverflow {
                operation: "deposit"
            }
        );
        assert_eq!(manager.balance(), Amount::MAX);
    }

    #[rstest]
    #[case::negative("-1")]
    #[case::not_a_number("ten")]
    #[case::decimal("1.5")]
    #[case::empty("")]
    #[case::too_large("99999999999999999999")]
    fn test_deposit_rejects_invalid_amount(#[case] amount: &str) {
        let mut manager = manager_with_balance(42, DepositMode::Overwrite);
        assert_eq!(
            manager.deposit(amount).unwrap_err(),
            AtmError::invalid_amount(amount)
        );
        assert_eq!(manager.balance(), 42);
    }

    #[rstest]
    #[case::zero("0", 0)]
    #[case::plus_sign("+7", 7)]
    fn test_deposit_accepts_edge_amounts(#[case] amount: &str, #[case] expected: Amount) {
        let mut manager = AccountManager::default();
        assert_eq!(manager.deposit(amount).unwrap(), expected);
    }

    #[rstest]
    #[case::partial("50", 150)]
    #[case::everything("200", 0)]
    #[case::nothing("0", 200)]
    fn test_withdraw(#[case] amount: &str, #[case] expected: Amount) {
        let mut manager = manager_with_balance(200, DepositMode::Overwrite);
        assert_eq!(manager.withdraw(amount).unwrap(), expected);
        assert_eq!(manager.balance(), expected);
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        let mut manager = manager_with_balance(100, DepositMode::Overwrite);
        assert_eq!(
            manager.withdraw("150").unwrap_err(),
            AtmError::InsufficientFunds {
                balance: 100,
                requested: 150
            }
        );
        assert_eq!(manager.balance(), 100);
    }

    #[rstest]
    #[case::negative("-10")]
    #[case::not_a_number("lots")]
    fn test_withdraw_rejects_invalid_amount(#[case] amount: &str) {
        let mut manager = manager_with_balance(100, DepositMode::Overwrite);
        assert!(matches!(
            manager.withdraw(amount).unwrap_err(),
            AtmError::InvalidAmount { .. }
        ));
        assert_eq!(manager.balance(), 100);
    }
}
