//! Mining protocol orchestration
//!
//! The puzzle search runs on the blocking thread pool without holding the
//! ledger lock, so transaction submissions stay live for the whole duration
//! of a search.

use crate::core::{Block, Ledger, Transaction};
use crate::mining::pow;
use log::info;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

/// Mints blocks, crediting rewards to this node's identifier
pub struct Miner {
    /// Recipient address of mining reward transactions
    pub node_id: String,
}

impl Miner {
    /// Create a miner rewarding the given node identifier
    pub fn new(node_id: &str) -> Self {
        Self {
            node_id: node_id.to_string(),
        }
    }

    /// Run one round of the mining protocol
    ///
    /// Returns `None` without touching the chain when the pending pool is
    /// empty. The proof is solved against the last block as it was at the
    /// start of the round; the reward transaction joins the pool only after
    /// the search finishes, so it is committed by the minted block but never
    /// feeds the puzzle.
    pub async fn mine(&self, ledger: &Arc<RwLock<Ledger>>) -> Option<Block> {
        let (last_proof, last_hash) = {
            let guard = ledger.read().await;
            if guard.pending().is_empty() {
                return None;
            }
            let last = guard.last_block();
            (last.proof, last.digest())
        };

        info!(
            "Mining against proof {} with difficulty {}...",
            last_proof,
            pow::DIFFICULTY
        );
        let start = Instant::now();

        let solve_hash = last_hash.clone();
        let proof = tokio::task::spawn_blocking(move || pow::solve(last_proof, &solve_hash))
            .await
            .expect("proof-of-work task panicked");

        let elapsed = start.elapsed().as_millis();
        let attempts = proof + 1; // search starts at 0
        let hash_rate = if elapsed > 0 {
            attempts as f64 / (elapsed as f64 / 1000.0)
        } else {
            attempts as f64
        };
        info!(
            "Proof {} found in {}ms ({} attempts, {:.2} H/s)",
            proof, elapsed, attempts, hash_rate
        );

        let mut guard = ledger.write().await;
        guard.submit_transaction(Transaction::reward(&self.node_id));
        Some(guard.mint_block(proof, last_hash))
    }
}
