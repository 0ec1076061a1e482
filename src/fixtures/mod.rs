//! Shared transaction fixtures for unit tests

use crate::core::Transaction;
use crate::storage::PriorityQueue;

/// Fees 5, 3, 9: dequeued as 9, 5, 3
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new("A", "B", 100, 5),
        Transaction::new("C", "D", 200, 3),
        Transaction::new("E", "F", 50, 9),
    ]
}

pub fn sample_queue() -> PriorityQueue<Transaction> {
    sample_transactions().into_iter().collect()
}

/// `count` distinct transactions with small, repeating fees
pub fn numbered_transactions(count: usize) -> Vec<Transaction> {
    (0..count)
        .map(|i| {
            Transaction::new(
                format!("sender{i}"),
                format!("receiver{i}"),
                12_300 + i as i64,
                (i % 7) as i64 + 1,
            )
        })
        .collect()
}
