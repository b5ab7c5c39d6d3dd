//! Console output
//!
//! All user-visible text goes through [`Console`], which writes each message
//! followed by a blank line and flushes so prompts appear before the next read.

use crate::types::{AtmError, MenuItem};
use std::io::Write;

/// Farewell printed on every way out of a session
pub const FAREWELL: &str = "Good Bye 👋";

/// Message writer over any `Write` sink
#[derive(Debug)]
pub struct Console<W> {
    out: W,
}

impl<W: Write> Console<W> {
    /// Wrap an output sink
    pub fn new(out: W) -> Self {
        Console { out }
    }

    /// Write `text` followed by a blank line
    pub fn say(&mut self, text: &str) -> Result<(), AtmError> {
        writeln!(self.out, "{}", text)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    /// Report a recoverable or fatal error to the user
    pub fn error(&mut self, error: &AtmError) -> Result<(), AtmError> {
        self.say(&format!("Error: {}", error))
    }

    /// List the menu, one item per line
    pub fn show_menu(&mut self, menu: &[MenuItem]) -> Result<(), AtmError> {
        self.say("What Would you like to do today: ")?;
        writeln!(self.out, "[shortCommand] [LongCommand] [Title] [usageDescription]")?;
        for item in menu {
            self.say(&format!(
                "{} {} '{}' '{}'",
                item.short_flag, item.long_flag, item.title, item.description
            ))?;
        }
        Ok(())
    }

    /// Unwrap the underlying sink
    pub fn into_inner(self) -> W {
        self.out
    }
}
