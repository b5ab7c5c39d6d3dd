//! I/O module
//!
//! Handles terminal input and output.
//!
//! # Components
//!
//! - `token_reader` - Line reader splitting input into whitespace-delimited tokens
//! - `console` - Message writer (blank-line spacing, error prefix, menu listing)

pub mod console;
pub mod token_reader;

pub use console::{Console, FAREWELL};
pub use token_reader::{tokenize, TokenReader};
