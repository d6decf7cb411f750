//! Block implementation for the ledger
//!
//! A block bundles a set of transactions with a link to its predecessor's
//! digest and a solved proof-of-work value. Blocks are never mutated after
//! minting; the chain only grows, or is swapped wholesale during consensus
//! resolution.

use crate::core::transaction::Transaction;
use crate::crypto::sha256_hex;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Proof value carried by the genesis block
pub const GENESIS_PROOF: u64 = 100;

/// Previous-hash sentinel of the genesis block. Real digests are 64 hex
/// characters, so the sentinel can never collide with one.
pub const GENESIS_PREVIOUS_HASH: &str = "1";

/// A block in the chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Block height, starting at 1 for genesis
    pub index: u64,
    /// Creation time as fractional seconds since the Unix epoch
    pub timestamp: f64,
    /// Transactions committed by this block, in submission order
    pub transactions: Vec<Transaction>,
    /// Solved proof-of-work value
    pub proof: u64,
    /// Digest of the previous block
    pub previous_hash: String,
}

impl Block {
    /// Create a new block stamped with the current time
    pub fn new(
        index: u64,
        transactions: Vec<Transaction>,
        proof: u64,
        previous_hash: String,
    ) -> Self {
        Self {
            index,
            timestamp: epoch_seconds(),
            transactions,
            proof,
            previous_hash,
        }
    }

    /// Create the genesis block
    pub fn genesis() -> Self {
        Self::new(1, Vec::new(), GENESIS_PROOF, GENESIS_PREVIOUS_HASH.to_string())
    }

    /// Canonical digest of the block
    ///
    /// The block is encoded as compact JSON with object keys sorted
    /// ascending (serde_json objects are BTreeMap-backed), then hashed with
    /// SHA-256. Identical field values always produce the identical digest,
    /// so a digest computed by one node verifies as a `previous_hash` on any
    /// peer.
    pub fn digest(&self) -> String {
        let canonical = serde_json::to_value(self).expect("block serializes to JSON");
        sha256_hex(canonical.to_string().as_bytes())
    }
}

/// Current time as fractional epoch seconds
fn epoch_seconds() -> f64 {
    let now = Utc::now();
    now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_block() {
        let genesis = Block::genesis();
        assert_eq!(genesis.index, 1);
        assert_eq!(genesis.proof, GENESIS_PROOF);
        assert_eq!(genesis.previous_hash, GENESIS_PREVIOUS_HASH);
        assert!(genesis.transactions.is_empty());
    }

    #[test]
    fn test_digest_is_deterministic() {
        let block = Block::new(
            2,
            vec![Transaction::new("alice", "bob", 5.0)],
            35293,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824".to_string(),
        );
        assert_eq!(block.digest(), block.digest());
        assert_eq!(block.digest().len(), 64);
    }

    #[test]
    fn test_digest_changes_with_any_field() {
        let block = Block::new(2, Vec::new(), 35293, "abc".to_string());

        let mut tampered = block.clone();
        tampered.proof += 1;
        assert_ne!(block.digest(), tampered.digest());

        let mut tampered = block.clone();
        tampered.previous_hash = "def".to_string();
        assert_ne!(block.digest(), tampered.digest());

        let mut tampered = block.clone();
        tampered.transactions.push(Transaction::new("a", "b", 1.0));
        assert_ne!(block.digest(), tampered.digest());
    }

    #[test]
    fn test_digest_survives_wire_roundtrip() {
        // A peer that re-decodes the block must derive the same digest.
        let block = Block::new(
            2,
            vec![Transaction::new("alice", "bob", 5.0)],
            35293,
            Block::genesis().digest(),
        );
        let json = serde_json::to_string(&block).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(block.digest(), back.digest());
    }
}
