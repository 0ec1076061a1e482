// A transaction is a plain transfer record: who pays, who receives, how much,
// and the fee offered for getting into a block. The fee is what orders the
// pending queue; the canonical string form is what the Merkle leaves hash.

use crate::storage::PriorityKey;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    sender: String,
    receiver: String,
    amount: i64,
    fee: i64,
}

impl Transaction {
    pub fn new(
        sender: impl Into<String>,
        receiver: impl Into<String>,
        amount: i64,
        fee: i64,
    ) -> Transaction {
        Transaction {
            sender: sender.into(),
            receiver: receiver.into(),
            amount,
            fee,
        }
    }

    pub fn get_sender(&self) -> &str {
        self.sender.as_str()
    }

    pub fn get_receiver(&self) -> &str {
        self.receiver.as_str()
    }

    pub fn get_amount(&self) -> i64 {
        self.amount
    }

    pub fn get_fee(&self) -> i64 {
        self.fee
    }
}

/// Canonical form `"{sender} {receiver} {amount} {fee}"`, the only thing
/// ever hashed for a leaf.
impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.sender, self.receiver, self.amount, self.fee
        )
    }
}

impl PriorityKey for Transaction {
    type Key = i64;

    fn priority_key(&self) -> i64 {
        self.fee
    }
}
