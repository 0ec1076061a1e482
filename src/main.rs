// Entry point for the merkle-chain command-line driver: load a transaction
// file, split it into fee-bounded blocks, and work with their Merkle trees
use clap::Parser;
use log::{error, LevelFilter};
use merkle_chain::cli::report::walk_tree;
use merkle_chain::{
    load_transactions, Blockchain, ChainReport, Command, MerkleTree, Opt, GLOBAL_CONFIG,
};
use std::path::Path;
use std::process;

fn main() {
    // Info by default, RUST_LOG still wins when it is set
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let opt = Opt::parse();

    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn build_chain(file: &Path, threshold: Option<i64>) -> merkle_chain::Result<Blockchain> {
    let queue = load_transactions(file)?;
    let threshold = threshold.unwrap_or_else(|| GLOBAL_CONFIG.get_fee_threshold());
    Ok(Blockchain::new(queue, threshold))
}

fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    let engine = GLOBAL_CONFIG.hash_engine()?;

    match command {
        Command::Printchain {
            file,
            threshold,
            order,
            json,
        } => {
            let queue = load_transactions(&file)?;
            if !json {
                println!("\nContents of the priority queue:");
                for transaction in &queue {
                    println!("{transaction}");
                }
            }

            let threshold = threshold.unwrap_or_else(|| GLOBAL_CONFIG.get_fee_threshold());
            let chain = Blockchain::new(queue, threshold);
            let trees = chain.build_merkle_trees_with(engine);

            if json {
                let report = ChainReport::new(&chain, &trees, order, &engine);
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            for (index, (block, tree)) in chain.iter().zip(&trees).enumerate() {
                println!("\nBlock {}:", index + 1);
                for transaction in block {
                    println!("{transaction}");
                }

                println!("\nMerkle Tree:");
                println!(
                    "\nHeight: {}\nInnerNodes: {}\nRoot Hash Code: {}",
                    tree.height(),
                    tree.inner_nodes(),
                    block.get_root_hash().unwrap_or_default()
                );

                println!("\n{order} traversal of Merkle tree");
                for hash in walk_tree(tree, order) {
                    println!("{hash}");
                }
            }
        }
        Command::ExtractProof {
            file,
            block,
            transaction,
            threshold,
        } => {
            let chain = build_chain(&file, threshold)?;
            if block == 0 {
                return Err("Block numbers start at 1".into());
            }
            let target = chain.get_block(block - 1)?;
            let tree = MerkleTree::with_engine(target, engine);
            let transaction = transaction.to_transaction();

            let proof = tree.extract_proof(&transaction);
            println!("Extracted proof of {transaction} in block {block}:");
            for hash in &proof {
                println!("{hash}");
            }
            println!(
                "\nVerification: {}",
                target.verify_transaction(&transaction, &proof)?
            );
        }
        Command::Verify {
            file,
            transaction,
            threshold,
        } => {
            let chain = build_chain(&file, threshold)?;
            let transaction = transaction.to_transaction();

            match chain.locate_transaction(&transaction, engine)? {
                Some(index) => {
                    println!("Transaction: {transaction}\nFound in block: {}", index + 1)
                }
                None => println!("Transaction: {transaction}\nNot found in any block"),
            }
        }
    }
    Ok(())
}
