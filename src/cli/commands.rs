use crate::core::{Transaction, TraversalOrder};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// Tree walk used when printing each block's Merkle tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkArg {
    DepthFirst(TraversalOrder),
    Level,
}

impl FromStr for WalkArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "level" | "levelorder" | "bfs" => Ok(WalkArg::Level),
            other => other.parse::<TraversalOrder>().map(WalkArg::DepthFirst).map_err(|_| {
                format!("Invalid traversal: {s}. Valid options: pre, in, post, level")
            }),
        }
    }
}

impl std::fmt::Display for WalkArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalkArg::DepthFirst(order) => write!(f, "{order}"),
            WalkArg::Level => write!(f, "level-order"),
        }
    }
}

/// The four fields of a transaction given on the command line
#[derive(Debug, Clone, clap::Args)]
pub struct TransactionArgs {
    #[arg(help = "Sender of the transaction")]
    pub sender: String,
    #[arg(help = "Receiver of the transaction")]
    pub receiver: String,
    #[arg(help = "Amount transferred", allow_negative_numbers = true)]
    pub amount: i64,
    #[arg(help = "Fee paid", allow_negative_numbers = true)]
    pub fee: i64,
}

impl TransactionArgs {
    pub fn to_transaction(&self) -> Transaction {
        Transaction::new(
            self.sender.as_str(),
            self.receiver.as_str(),
            self.amount,
            self.fee,
        )
    }
}

#[derive(Debug, Parser)]
#[command(name = "merkle-chain")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        name = "printchain",
        about = "Split a transaction file into blocks and print each Merkle tree"
    )]
    Printchain {
        #[arg(help = "Transaction file (sender receiver amount fee per record)")]
        file: PathBuf,
        #[arg(
            long = "threshold",
            help = "Cumulative fee threshold (defaults to the configured value)",
            allow_negative_numbers = true
        )]
        threshold: Option<i64>,
        #[arg(
            long = "order",
            default_value = "in",
            help = "Tree walk to print (pre, in, post, level)"
        )]
        order: WalkArg,
        #[arg(long = "json", help = "Print a JSON report instead of text")]
        json: bool,
    },
    #[command(
        name = "extractproof",
        about = "Print the membership proof of a transaction in a block"
    )]
    ExtractProof {
        #[arg(help = "Transaction file (sender receiver amount fee per record)")]
        file: PathBuf,
        #[arg(help = "Block number, starting at 1")]
        block: usize,
        #[command(flatten)]
        transaction: TransactionArgs,
        #[arg(
            long = "threshold",
            help = "Cumulative fee threshold (defaults to the configured value)",
            allow_negative_numbers = true
        )]
        threshold: Option<i64>,
    },
    #[command(name = "verify", about = "Find the block a transaction belongs to")]
    Verify {
        #[arg(help = "Transaction file (sender receiver amount fee per record)")]
        file: PathBuf,
        #[command(flatten)]
        transaction: TransactionArgs,
        #[arg(
            long = "threshold",
            help = "Cumulative fee threshold (defaults to the configured value)",
            allow_negative_numbers = true
        )]
        threshold: Option<i64>,
    },
}
