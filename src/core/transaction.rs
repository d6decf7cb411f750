//! Transaction type for the ledger
//!
//! Transactions are opaque transfers between two addresses. The core does
//! not verify signatures or balances; it only carries the values into the
//! next minted block.

use serde::{Deserialize, Serialize};

/// Reserved sender address used by mining reward transactions
pub const REWARD_SENDER: &str = "0";

/// Amount granted for mining a block
pub const REWARD_AMOUNT: f64 = 1.0;

/// A transfer between two addresses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Address of the sender
    pub sender: String,
    /// Address of the recipient
    pub recipient: String,
    /// Transaction amount
    pub amount: f64,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(sender: &str, recipient: &str, amount: f64) -> Self {
        Self {
            sender: sender.to_string(),
            recipient: recipient.to_string(),
            amount,
        }
    }

    /// Create the mining reward transaction for a node
    pub fn reward(recipient: &str) -> Self {
        Self::new(REWARD_SENDER, recipient, REWARD_AMOUNT)
    }
}
