//! Error handling for the chain builder
//!
//! This module provides the error kinds surfaced by the containers, the
//! hashing layer, verification, and the ingestion/config layers around them.

use std::fmt;

/// Result type alias for chain and Merkle operations
pub type Result<T> = std::result::Result<T, ChainError>;

/// Error kinds for chain assembly and Merkle operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// Dequeue or peek on an empty container
    EmptyContainer,
    /// Positional access outside `[0, size)`
    IndexOutOfRange { index: usize, size: usize },
    /// A verification input was missing or unset
    InvalidArgument(String),
    /// The requested digest algorithm cannot be instantiated
    HashUnavailable(String),
    /// File I/O errors
    Io(String),
    /// Malformed transaction input
    Parse(String),
    /// Configuration errors
    Config(String),
    /// Serialization errors
    Serialization(String),
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::EmptyContainer => write!(f, "Container is empty"),
            ChainError::IndexOutOfRange { index, size } => {
                write!(f, "Invalid index: {index} (size {size})")
            }
            ChainError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            ChainError::HashUnavailable(name) => {
                write!(f, "Hash algorithm unavailable: {name}")
            }
            ChainError::Io(msg) => write!(f, "I/O error: {msg}"),
            ChainError::Parse(msg) => write!(f, "Parse error: {msg}"),
            ChainError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ChainError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for ChainError {}

impl From<std::io::Error> for ChainError {
    fn from(err: std::io::Error) -> Self {
        ChainError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ChainError {
    fn from(err: toml::de::Error) -> Self {
        ChainError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ChainError {
    fn from(err: serde_json::Error) -> Self {
        ChainError::Serialization(err.to_string())
    }
}
