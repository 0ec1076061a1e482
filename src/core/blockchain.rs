// The chain here is a plain ordered list of blocks. Blocks are filled greedily
// from the fee-ordered queue: a block keeps taking transactions while its
// running fee total stays under the threshold, and the transaction that
// reaches the threshold still goes into the block it closes.

use crate::core::{Block, MerkleTree, Transaction};
use crate::error::{ChainError, Result};
use crate::storage::PriorityQueue;
use crate::utils::HashEngine;
use log::{debug, info};

#[derive(Debug, Clone)]
pub struct Blockchain {
    blocks: Vec<Block>,
    threshold: i64,
}

impl Blockchain {
    // Drains the queue; the resulting chain never changes afterwards
    pub fn new(mut queue: PriorityQueue<Transaction>, threshold: i64) -> Blockchain {
        let total = queue.len();
        let mut blocks = Vec::new();
        let mut block = Block::new();
        let mut fees: i64 = 0;

        while let Ok(transaction) = queue.dequeue() {
            let fee = transaction.get_fee();
            if fees.saturating_add(fee) < threshold {
                fees = fees.saturating_add(fee);
                block.add_transaction(transaction);
            } else {
                block.add_transaction(transaction);
                debug!(
                    "Closed block {} with {} transactions",
                    blocks.len() + 1,
                    block.num_of_transactions()
                );
                blocks.push(std::mem::take(&mut block));
                fees = 0;
            }
        }

        // Whatever is left never reached the threshold but still forms a block
        if !block.is_empty() {
            debug!(
                "Closed trailing block {} with {} transactions",
                blocks.len() + 1,
                block.num_of_transactions()
            );
            blocks.push(block);
        }

        info!(
            "Assembled {} transactions into {} blocks (fee threshold {threshold})",
            total,
            blocks.len()
        );

        Blockchain { blocks, threshold }
    }

    pub fn get_threshold(&self) -> i64 {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get_blocks(&self) -> &[Block] {
        self.blocks.as_slice()
    }

    pub fn get_block(&self, index: usize) -> Result<&Block> {
        self.blocks.get(index).ok_or(ChainError::IndexOutOfRange {
            index,
            size: self.blocks.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// One tree per block, recording every block's root hash
    pub fn build_merkle_trees(&self) -> Vec<MerkleTree> {
        self.build_merkle_trees_with(HashEngine::default())
    }

    pub fn build_merkle_trees_with(&self, engine: HashEngine) -> Vec<MerkleTree> {
        self.blocks
            .iter()
            .map(|block| MerkleTree::with_engine(block, engine))
            .collect()
    }

    /// Index of the first block whose tree proves `transaction` is a member.
    /// The trees built here are scratch trees; no block root gets recorded.
    pub fn locate_transaction(
        &self,
        transaction: &Transaction,
        engine: HashEngine,
    ) -> Result<Option<usize>> {
        for (index, block) in self.blocks.iter().enumerate() {
            let tree = MerkleTree::build(block, engine);
            let proof = tree.extract_proof(transaction);
            if tree.verify(transaction, &proof)? {
                debug!("Found {transaction} in block {}", index + 1);
                return Ok(Some(index));
            }
        }
        Ok(None)
    }
}

impl<'a> IntoIterator for &'a Blockchain {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
