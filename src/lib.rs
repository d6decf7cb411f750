//! Nanochain: a proof-of-work ledger node with HTTP peer consensus
//!
//! This crate provides a single-process ledger node featuring:
//! - An append-only, hash-linked chain of blocks
//! - Fixed-difficulty proof-of-work sealing
//! - A pending-transaction pool drained atomically at mint time
//! - Longest-valid-chain resolution against HTTP-polled peers
//! - A REST surface exposing the node to callers and other nodes
//!
//! # Example
//!
//! ```rust
//! use nanochain::core::{validate_chain, Ledger, Transaction};
//! use nanochain::mining::pow;
//!
//! let mut ledger = Ledger::new();
//! ledger.submit_transaction(Transaction::new("alice", "bob", 5.0));
//!
//! // Solve the puzzle against the last block, then mint.
//! let last_hash = ledger.last_block().digest();
//! let proof = pow::solve(ledger.last_block().proof, &last_hash);
//! let block = ledger.mint_block(proof, last_hash);
//!
//! assert_eq!(block.index, 2);
//! assert!(validate_chain(ledger.chain()));
//! ```

pub mod api;
pub mod core;
pub mod crypto;
pub mod mining;
pub mod network;

// Re-export commonly used types
pub use api::{create_router, ApiState};
pub use core::{validate_chain, Block, Ledger, Transaction};
pub use mining::Miner;
pub use network::{ConsensusResolver, NodeRegistry};
