//! Command-line interface
//!
//! This module contains the CLI commands and argument parsing, plus the
//! serializable report printed by `printchain --json`.

pub mod commands;
pub mod report;

pub use commands::{Command, Opt, TransactionArgs, WalkArg};
pub use report::{BlockReport, ChainReport};
