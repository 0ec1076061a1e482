use crate::core::{Block, Transaction};
use crate::error::Result;
use crate::utils::HashEngine;
use log::{debug, info};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Input hashed for every padding leaf
pub const DUMMY_LEAF: &str = "DUMMY";

/// Depth-first visiting orders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    PreOrder,
    InOrder,
    PostOrder,
}

impl FromStr for TraversalOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pre" | "preorder" => Ok(TraversalOrder::PreOrder),
            "in" | "inorder" => Ok(TraversalOrder::InOrder),
            "post" | "postorder" => Ok(TraversalOrder::PostOrder),
            _ => Err(format!(
                "Invalid traversal order: {s}. Valid options: pre, in, post"
            )),
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalOrder::PreOrder => write!(f, "pre-order"),
            TraversalOrder::InOrder => write!(f, "in-order"),
            TraversalOrder::PostOrder => write!(f, "post-order"),
        }
    }
}

/// A node of the tree; leaves have no children, inner nodes have both
#[derive(Debug, Clone)]
pub struct MerkleNode {
    hash: String,
    left: Option<Box<MerkleNode>>,
    right: Option<Box<MerkleNode>>,
}

impl MerkleNode {
    fn leaf(hash: String) -> MerkleNode {
        MerkleNode {
            hash,
            left: None,
            right: None,
        }
    }

    pub fn hash(&self) -> &str {
        self.hash.as_str()
    }

    pub fn left(&self) -> Option<&MerkleNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&MerkleNode> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Outcome of the proof search below one subtree
enum ProofSearch {
    /// Leaf matched; sibling hashes collected so far, deepest first
    Found(Vec<String>),
    NotFound,
}

/// Perfect binary hash tree over the transactions of one block.
///
/// The leaf count is the smallest power of two that is at least 2 and at
/// least the number of transactions; missing leaves hash [`DUMMY_LEAF`].
/// [`MerkleTree::new`] and [`MerkleTree::with_engine`] record the root hash
/// on the block; [`MerkleTree::build`] leaves the block untouched.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    root: MerkleNode,
    num_of_leaves: usize,
    height: usize,
    engine: HashEngine,
}

/// Leaves needed for `num_transactions` transactions
pub fn leaf_count_for(num_transactions: usize) -> usize {
    num_transactions.max(2).next_power_of_two()
}

impl MerkleTree {
    pub fn new(block: &Block) -> MerkleTree {
        Self::with_engine(block, HashEngine::default())
    }

    /// Build the tree and record its root hash, with its digest, on the block
    pub fn with_engine(block: &Block, engine: HashEngine) -> MerkleTree {
        let tree = Self::build(block, engine);
        block.record_root_hash(tree.root.hash.clone(), engine);
        tree
    }

    /// Build the tree without recording anything on the block
    pub fn build(block: &Block, engine: HashEngine) -> MerkleTree {
        let num_of_leaves = leaf_count_for(block.num_of_transactions());
        let height = num_of_leaves.trailing_zeros() as usize;

        let mut transactions = block.iter();
        let root = Self::build_tree(&mut transactions, num_of_leaves, &engine);

        info!(
            "Built Merkle tree: {} transactions, {} leaves, height {}, root {}",
            block.num_of_transactions(),
            num_of_leaves,
            height,
            root.hash
        );

        MerkleTree {
            root,
            num_of_leaves,
            height,
            engine,
        }
    }

    // Left subtree first, so leaves take transactions in block order
    fn build_tree<'a, I>(
        transactions: &mut I,
        num_leaves: usize,
        engine: &HashEngine,
    ) -> MerkleNode
    where
        I: Iterator<Item = &'a Transaction>,
    {
        if num_leaves == 1 {
            return match transactions.next() {
                Some(tx) => MerkleNode::leaf(engine.hash(&tx.to_string())),
                None => MerkleNode::leaf(engine.hash(DUMMY_LEAF)),
            };
        }

        let left = Self::build_tree(transactions, num_leaves / 2, engine);
        let right = Self::build_tree(transactions, num_leaves / 2, engine);

        MerkleNode {
            hash: engine.hash_pair(&left.hash, &right.hash),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    pub fn root(&self) -> &MerkleNode {
        &self.root
    }

    pub fn root_hash(&self) -> &str {
        self.root.hash()
    }

    pub fn engine(&self) -> &HashEngine {
        &self.engine
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn leaf_count(&self) -> usize {
        self.num_of_leaves
    }

    pub fn inner_nodes(&self) -> usize {
        self.num_of_leaves - 1
    }

    pub fn depth_first_traversal(&self, order: TraversalOrder) -> Vec<String> {
        let mut hashes = Vec::with_capacity(2 * self.num_of_leaves - 1);
        match order {
            TraversalOrder::PreOrder => Self::pre_order(&self.root, &mut hashes),
            TraversalOrder::InOrder => Self::in_order(&self.root, &mut hashes),
            TraversalOrder::PostOrder => Self::post_order(&self.root, &mut hashes),
        }
        hashes
    }

    /// Level order, root first, each level left to right
    pub fn breadth_first_traversal(&self) -> Vec<String> {
        let mut hashes = Vec::with_capacity(2 * self.num_of_leaves - 1);
        let mut queue = VecDeque::from([&self.root]);

        while let Some(node) = queue.pop_front() {
            hashes.push(node.hash.clone());
            queue.extend(node.left());
            queue.extend(node.right());
        }
        hashes
    }

    /// Hashes grouped by depth, `levels()[0]` holding only the root
    pub fn levels(&self) -> Vec<Vec<String>> {
        let mut levels = Vec::with_capacity(self.height + 1);
        let mut current = vec![&self.root];

        while !current.is_empty() {
            levels.push(current.iter().map(|node| node.hash.clone()).collect());
            current = current
                .into_iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }
        levels
    }

    /// Sibling hashes needed to rebuild the root from `transaction`'s leaf.
    ///
    /// The first element sits next to the leaf, the last one is a child of
    /// the root; the root itself is left out. When the transaction has no
    /// leaf the result is empty, but only verification settles membership.
    pub fn extract_proof(&self, transaction: &Transaction) -> Vec<String> {
        let target = self.engine.hash(&transaction.to_string());
        match Self::search_proof(&self.root, &target) {
            ProofSearch::Found(proof) => {
                debug!("Extracted {} proof hashes for {transaction}", proof.len());
                proof
            }
            ProofSearch::NotFound => {
                debug!("No leaf for {transaction}");
                Vec::new()
            }
        }
    }

    fn search_proof(node: &MerkleNode, target: &str) -> ProofSearch {
        match (node.left(), node.right()) {
            (Some(left), Some(right)) => {
                if let ProofSearch::Found(mut proof) = Self::search_proof(left, target) {
                    proof.push(right.hash.clone());
                    return ProofSearch::Found(proof);
                }
                if let ProofSearch::Found(mut proof) = Self::search_proof(right, target) {
                    proof.push(left.hash.clone());
                    return ProofSearch::Found(proof);
                }
                ProofSearch::NotFound
            }
            _ if node.hash == target => ProofSearch::Found(Vec::new()),
            _ => ProofSearch::NotFound,
        }
    }

    /// Verify against this tree's own root with this tree's digest
    pub fn verify(&self, transaction: &Transaction, proof: &[String]) -> Result<bool> {
        verify_transaction_with(&self.engine, transaction, proof, self.root_hash())
    }

    fn pre_order(node: &MerkleNode, hashes: &mut Vec<String>) {
        hashes.push(node.hash.clone());
        if let Some(left) = node.left() {
            Self::pre_order(left, hashes);
        }
        if let Some(right) = node.right() {
            Self::pre_order(right, hashes);
        }
    }

    fn in_order(node: &MerkleNode, hashes: &mut Vec<String>) {
        if let Some(left) = node.left() {
            Self::in_order(left, hashes);
        }
        hashes.push(node.hash.clone());
        if let Some(right) = node.right() {
            Self::in_order(right, hashes);
        }
    }

    fn post_order(node: &MerkleNode, hashes: &mut Vec<String>) {
        if let Some(left) = node.left() {
            Self::post_order(left, hashes);
        }
        if let Some(right) = node.right() {
            Self::post_order(right, hashes);
        }
        hashes.push(node.hash.clone());
    }
}

/// Fold `proof` into the transaction's leaf hash and compare with the root.
///
/// Any mismatch is `Ok(false)`, an empty `expected_root` included.
pub fn verify_transaction(
    transaction: &Transaction,
    proof: &[String],
    expected_root: &str,
) -> Result<bool> {
    verify_transaction_with(&HashEngine::default(), transaction, proof, expected_root)
}

pub fn verify_transaction_with(
    engine: &HashEngine,
    transaction: &Transaction,
    proof: &[String],
    expected_root: &str,
) -> Result<bool> {
    let computed = proof
        .iter()
        .fold(engine.hash(&transaction.to_string()), |current, sibling| {
            engine.hash_pair(&current, sibling)
        });
    Ok(computed == expected_root)
}
