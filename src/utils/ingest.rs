// Transaction files are flat text: four whitespace-separated tokens per
// transaction (sender receiver amount fee). Line breaks carry no meaning, so a
// record may span lines the same way the token stream allows.

use crate::core::Transaction;
use crate::error::{ChainError, Result};
use crate::storage::PriorityQueue;
use log::{info, warn};
use std::fs;
use std::path::Path;

const FIELDS_PER_RECORD: usize = 4;

pub fn parse_transactions(input: &str) -> Result<Vec<Transaction>> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let mut transactions = Vec::with_capacity(tokens.len() / FIELDS_PER_RECORD);

    for (index, record) in tokens.chunks(FIELDS_PER_RECORD).enumerate() {
        let number = index + 1;
        if record.len() < FIELDS_PER_RECORD {
            return Err(ChainError::Parse(format!(
                "record {number} is incomplete: expected {FIELDS_PER_RECORD} fields, found {}",
                record.len()
            )));
        }

        let amount = parse_integer(record[2], "amount", number)?;
        let fee = parse_integer(record[3], "fee", number)?;
        transactions.push(Transaction::new(record[0], record[1], amount, fee));
    }

    Ok(transactions)
}

fn parse_integer(token: &str, field: &str, number: usize) -> Result<i64> {
    token.parse::<i64>().map_err(|e| {
        ChainError::Parse(format!("record {number}: invalid {field} '{token}': {e}"))
    })
}

/// Read a transaction file straight into a fee-ordered queue
pub fn load_transactions(path: impl AsRef<Path>) -> Result<PriorityQueue<Transaction>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        ChainError::Io(format!("File: {} could not be read: {e}", path.display()))
    })?;

    let transactions = parse_transactions(&contents)?;
    if transactions.is_empty() {
        warn!("No transactions found in {}", path.display());
    } else {
        info!(
            "Loaded {} transactions from {}",
            transactions.len(),
            path.display()
        );
    }

    Ok(transactions.into_iter().collect())
}
