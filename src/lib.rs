//! # Merkle Chain - Fee-Bounded Blocks With Membership Proofs
//!
//! This crate takes a pile of transactions, orders them by fee, packs them
//! into blocks that close once their cumulative fee reaches a threshold, and
//! builds a Merkle tree per block so a single transaction's membership can be
//! proven from a handful of sibling hashes and the block's root hash.
//!
//! ## What It Does
//! - **Priority Queue**: transactions come out highest fee first, ties in
//!   arrival order
//! - **Greedy Blocks**: a block keeps taking transactions until the one that
//!   reaches the fee threshold, which still lands in that block
//! - **Perfect Merkle Trees**: leaf count padded to a power of two with
//!   `DUMMY` leaves, inner nodes combine children by XOR of their digests
//! - **Proofs**: sibling hashes deepest first, verified bottom-up against
//!   the block's recorded root hash
//!
//! ## How the Code Is Organized
//! - `core/`: transactions, blocks, chain assembly, Merkle trees
//! - `storage/`: the ordered list and the priority queue on top of it
//! - `utils/`: hashing engine and transaction file ingestion
//! - `config/`: threshold and digest settings (defaults, TOML, environment)
//! - `cli/`: command-line arguments and the JSON report
//!
//! Everything is single-threaded and in memory. Blocks are not linked to
//! each other and nothing is persisted.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;
pub mod utils;

#[cfg(test)]
pub mod fixtures;

// Re-export commonly used types for convenience
pub use cli::{BlockReport, ChainReport, Command, Opt, TransactionArgs, WalkArg};
pub use config::{Config, GLOBAL_CONFIG};
pub use core::{
    leaf_count_for, verify_transaction, verify_transaction_with, Block, Blockchain, MerkleNode,
    MerkleTree, Transaction, TraversalOrder, DUMMY_LEAF,
};
pub use error::{ChainError, Result};
pub use storage::{OrderedList, PriorityKey, PriorityQueue};
pub use utils::{
    load_transactions, parse_transactions, sha256_digest, HashEngine, DEFAULT_HASH_ALGORITHM,
};
