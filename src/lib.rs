//! Rust ATM CLI Library
//! # Overview
//!
//! This library provides an interactive, single-session ATM terminal simulator:
//! a PIN challenge followed by account operations typed as command flags.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, MenuItem, AtmError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::pin`] - PIN format validation
//!   - [`core::auth`] - PIN challenge and lockout
//!   - [`core::account_manager`] - Account state and operation handlers
//!   - [`core::dispatcher`] - Command matching and handler invocation
//!   - [`core::session`] - The interactive loop
//! - [`io`] - Line tokenizing and console output
//!
//! # Operations
//!
//! - **Change PIN** (`-c`/`--change-pin <pin>`): replace the PIN
//! - **Deposit** (`-d`/`--deposit <amount>`): set the balance (or add, if configured)
//! - **Withdraw** (`-w`/`--withdraw <amount>`): debit the balance, never below zero
//! - **Balance** (`-b`/`--balance`): show the balance
//! - **Exit** (`-e`/`--exit`): end the session
//!
//! # Account State
//!
//! The account holds:
//! - `pin`: at least four digits, `0000` by default
//! - `balance`: a non-negative integer, zero by default
//!
//! Nothing is persisted; all state is lost when the session ends.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{AccountManager, AuthGate, Dispatcher, Session, SessionConfig, SessionEnd};
pub use types::{Account, Amount, AtmError, DepositMode, MenuItem, Operation, MENU};
