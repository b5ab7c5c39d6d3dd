//! Core business logic module
//!
//! This module contains the session components, leaf first:
//! - `pin` - PIN format validation
//! - `account_manager` - Account state and the operation handlers
//! - `auth` - PIN challenge with failed-attempt tracking
//! - `dispatcher` - Command flag matching and handler invocation
//! - `session` - The interactive loop tying it all together

pub mod account_manager;
pub mod auth;
pub mod dispatcher;
pub mod pin;
pub mod session;

pub use account_manager::AccountManager;
pub use auth::AuthGate;
pub use dispatcher::{Dispatcher, Flow};
pub use session::{Session, SessionConfig, SessionEnd};
