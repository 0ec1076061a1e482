use crate::core::{merkle, Transaction};
use crate::error::{ChainError, Result};
use crate::utils::HashEngine;
use log::warn;
use once_cell::unsync::OnceCell;

/// A fee-bounded group of transactions.
///
/// The root hash starts unset and is recorded once, together with the digest
/// that produced it, by the first recording Merkle tree built over the block.
/// Transactions can only be added while the chain is being assembled.
#[derive(Debug, Clone, Default)]
pub struct Block {
    transactions: Vec<Transaction>,
    root: OnceCell<RecordedRoot>,
}

#[derive(Debug, Clone, PartialEq)]
struct RecordedRoot {
    hash: String,
    engine: HashEngine,
}

impl Block {
    pub fn new() -> Block {
        Block::default()
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Block {
        Block {
            transactions,
            root: OnceCell::new(),
        }
    }

    pub(crate) fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn num_of_transactions(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get_transactions(&self) -> &[Transaction] {
        self.transactions.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Sum of the fees collected by this block
    pub fn total_fees(&self) -> i64 {
        self.transactions
            .iter()
            .fold(0i64, |acc, tx| acc.saturating_add(tx.get_fee()))
    }

    /// `None` until a Merkle tree has been built for this block
    pub fn get_root_hash(&self) -> Option<&str> {
        self.root.get().map(|root| root.hash.as_str())
    }

    /// Digest behind the recorded root hash
    pub fn get_root_engine(&self) -> Option<&HashEngine> {
        self.root.get().map(|root| &root.engine)
    }

    pub(crate) fn record_root_hash(&self, hash: String, engine: HashEngine) {
        if let Err(rejected) = self.root.set(RecordedRoot { hash, engine }) {
            if self.root.get() != Some(&rejected) {
                warn!(
                    "Keeping the {} root hash already recorded, ignoring {} root {}",
                    self.get_root_engine().map(HashEngine::name).unwrap_or_default(),
                    rejected.engine.name(),
                    rejected.hash
                );
            }
        }
    }

    /// Check a membership proof against the recorded root, using the digest
    /// that produced that root
    pub fn verify_transaction(&self, transaction: &Transaction, proof: &[String]) -> Result<bool> {
        let root = self.root.get().ok_or_else(|| {
            ChainError::InvalidArgument(
                "block has no root hash yet, build its Merkle tree first".to_string(),
            )
        })?;
        merkle::verify_transaction_with(&root.engine, transaction, proof, &root.hash)
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
