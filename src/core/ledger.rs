//! Ledger state: the authoritative chain and the pending-transaction pool
//!
//! The ledger is the single shared mutable resource of a node. Callers wrap
//! it in `Arc<RwLock<_>>`; submitting and minting both take the write lock,
//! so the pool snapshot/clear inside [`Ledger::mint_block`] can never
//! interleave with a submission.

use crate::core::block::Block;
use crate::core::transaction::Transaction;

/// The chain of blocks plus the pool of not-yet-committed transactions
#[derive(Debug, Clone)]
pub struct Ledger {
    chain: Vec<Block>,
    pending: Vec<Transaction>,
}

impl Ledger {
    /// Create a ledger holding only the genesis block
    pub fn new() -> Self {
        Self {
            chain: vec![Block::genesis()],
            pending: Vec::new(),
        }
    }

    /// The most recent block
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("ledger always holds the genesis block")
    }

    /// The full chain, genesis first
    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    /// Transactions waiting for the next minted block
    pub fn pending(&self) -> &[Transaction] {
        &self.pending
    }

    /// Queue a transaction for the next minted block
    ///
    /// Returns the index of the block the transaction is expected to land
    /// in. This is a prediction: all currently pending transactions land in
    /// the same next block, but nothing guards against an intervening mint.
    pub fn submit_transaction(&mut self, tx: Transaction) -> u64 {
        self.pending.push(tx);
        self.last_block().index + 1
    }

    /// Commit the entire pending pool into a new block
    ///
    /// The pool is drained in submission order and left empty; the block is
    /// appended to the chain and returned.
    pub fn mint_block(&mut self, proof: u64, previous_hash: String) -> Block {
        let transactions = std::mem::take(&mut self.pending);
        let block = Block::new(
            self.last_block().index + 1,
            transactions,
            proof,
            previous_hash,
        );
        self.chain.push(block.clone());
        block
    }

    /// Overwrite the chain wholesale; the pending pool is untouched
    pub fn replace_chain(&mut self, chain: Vec<Block>) {
        self.chain = chain;
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
