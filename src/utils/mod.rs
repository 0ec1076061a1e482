//! Utility functions and helpers
//!
//! This module contains the hashing engine used by the Merkle trees and the
//! reader that turns transaction files into a priority queue.

pub mod crypto;
pub mod ingest;

pub use crypto::{sha256_digest, HashEngine, DEFAULT_HASH_ALGORITHM};
pub use ingest::{load_transactions, parse_transactions};
