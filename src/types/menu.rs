//! Menu registry types
//!
//! This module defines the operations the ATM offers and the fixed, ordered
//! registry of menu items that binds command flags to them.
//!
//! # Command Vocabulary
//!
//! | Short | Long            | Arguments     |
//! |-------|-----------------|---------------|
//! | `-c`  | `--change-pin`  | `<new-pin>`   |
//! | `-d`  | `--deposit`     | `<amount>`    |
//! | `-w`  | `--withdraw`    | `<amount>`    |
//! | `-b`  | `--balance`     |               |
//! | `-e`  | `--exit`        |               |

/// Operations that can be dispatched from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Replace the stored PIN
    ChangePin,

    /// Set (or add to) the balance
    Deposit,

    /// Subtract from the balance, never below zero
    Withdraw,

    /// Display the current balance
    Balance,

    /// Say goodbye and end the session
    Exit,
}

/// A registry entry binding a command flag to an operation
///
/// `min_args` counts the flag itself, so an item taking one argument has
/// `min_args == 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub short_flag: &'static str,
    pub long_flag: &'static str,
    pub description: &'static str,
    pub min_args: usize,
    pub operation: Operation,
}

impl MenuItem {
    /// Whether `token` is this item's short or long flag (exact match)
    pub fn matches(&self, token: &str) -> bool {
        token == self.short_flag || token == self.long_flag
    }
}

/// The menu, in display order
///
/// Order only affects how the menu is listed; dispatch is by flag.
pub const MENU: [MenuItem; 5] = [
    MenuItem {
        title: "Change Pin",
        short_flag: "-c",
        long_flag: "--change-pin",
        description: "<-c or --change-pin> <new four-digit pin>",
        min_args: 2,
        operation: Operation::ChangePin,
    },
    MenuItem {
        title: "Deposit funds into Account",
        short_flag: "-d",
        long_flag: "--deposit",
        description: "<-d or --deposit> <Amount in digit>",
        min_args: 2,
        operation: Operation::Deposit,
    },
    MenuItem {
        title: "Withdraw funds from Account",
        short_flag: "-w",
        long_flag: "--withdraw",
        description: "<-w or --withdraw> <Amount in digit>",
        min_args: 2,
        operation: Operation::Withdraw,
    },
    MenuItem {
        title: "Check Account Balance",
        short_flag: "-b",
        long_flag: "--balance",
        description: "<-b or --balance>",
        min_args: 1,
        operation: Operation::Balance,
    },
    MenuItem {
        title: "Exit program",
        short_flag: "-e",
        long_flag: "--exit",
        description: "<-e or --exit>",
        min_args: 1,
        operation: Operation::Exit,
    },
];

/// Find the menu item whose flag equals `token`
pub fn lookup(token: &str) -> Option<&'static MenuItem> {
    MENU.iter().find(|item| item.matches(token))
}
