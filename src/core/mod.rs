//! Core chain functionality
//!
//! This module contains the transaction record, fee-bounded blocks, the
//! greedy chain builder, and the Merkle trees that prove block membership.

pub mod block;
pub mod blockchain;
pub mod merkle;
pub mod transaction;

pub use block::Block;
pub use blockchain::Blockchain;
pub use merkle::{
    leaf_count_for, verify_transaction, verify_transaction_with, MerkleNode, MerkleTree,
    TraversalOrder, DUMMY_LEAF,
};
pub use transaction::Transaction;
