use crate::cli::WalkArg;
use crate::core::{Blockchain, MerkleTree, Transaction};
use crate::utils::HashEngine;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BlockReport {
    pub number: usize,
    pub transactions: Vec<Transaction>,
    pub total_fees: i64,
    pub height: usize,
    pub inner_nodes: usize,
    pub root_hash: String,
    pub traversal: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ChainReport {
    pub threshold: i64,
    pub hash_algorithm: String,
    pub traversal_order: String,
    pub blocks: Vec<BlockReport>,
}

impl ChainReport {
    /// `trees` must line up with the chain's blocks and be built with `engine`
    pub fn new(
        chain: &Blockchain,
        trees: &[MerkleTree],
        walk: WalkArg,
        engine: &HashEngine,
    ) -> ChainReport {
        let blocks = chain
            .iter()
            .zip(trees)
            .enumerate()
            .map(|(index, (block, tree))| BlockReport {
                number: index + 1,
                transactions: block.get_transactions().to_vec(),
                total_fees: block.total_fees(),
                height: tree.height(),
                inner_nodes: tree.inner_nodes(),
                root_hash: tree.root_hash().to_string(),
                traversal: walk_tree(tree, walk),
            })
            .collect();

        ChainReport {
            threshold: chain.get_threshold(),
            hash_algorithm: engine.name().to_string(),
            traversal_order: walk.to_string(),
            blocks,
        }
    }
}

pub fn walk_tree(tree: &MerkleTree, walk: WalkArg) -> Vec<String> {
    match walk {
        WalkArg::DepthFirst(order) => tree.depth_first_traversal(order),
        WalkArg::Level => tree.breadth_first_traversal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TraversalOrder;
    use crate::fixtures::sample_queue;
    use crate::storage::PriorityQueue;

    #[test]
    fn test_report_serializes_every_block() {
        let chain = Blockchain::new(sample_queue(), 10);
        let trees = chain.build_merkle_trees();
        let walk = WalkArg::DepthFirst(TraversalOrder::InOrder);
        let report = ChainReport::new(&chain, &trees, walk, &HashEngine::default());

        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["threshold"], 10);
        assert_eq!(json["hash_algorithm"], "sha256");
        assert_eq!(json["blocks"].as_array().unwrap().len(), 2);
        assert_eq!(json["blocks"][0]["number"], 1);
        assert_eq!(json["blocks"][0]["transactions"][0]["fee"], 9);
        assert_eq!(json["blocks"][1]["traversal"].as_array().unwrap().len(), 3);
        assert_eq!(
            json["blocks"][1]["root_hash"],
            chain.get_block(1).unwrap().get_root_hash().unwrap()
        );
    }

    #[test]
    fn test_empty_chain_reports_configured_digest() {
        let chain = Blockchain::new(PriorityQueue::new(), 10);
        let engine = HashEngine::from_name("sha512").unwrap();
        let trees = chain.build_merkle_trees_with(engine);
        let report = ChainReport::new(&chain, &trees, WalkArg::Level, &engine);

        assert!(report.blocks.is_empty());
        assert_eq!(report.hash_algorithm, "sha512");
    }
}
