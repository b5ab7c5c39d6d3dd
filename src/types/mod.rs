//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account state
//! - `menu`: Operations and the menu registry
//! - `error`: Error types for the ATM simulator

pub mod account;
pub mod error;
pub mod menu;

pub use account::{Account, Amount, DepositMode, DEFAULT_PIN};
pub use error::AtmError;
pub use menu::{MenuItem, Operation, MENU};
