//! Configuration management
//!
//! This module handles the settings the command-line driver needs: the fee
//! threshold used to close blocks and the digest behind the Merkle trees.

pub mod settings;

pub use settings::{Config, GLOBAL_CONFIG};
