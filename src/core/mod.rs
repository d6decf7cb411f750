//! Core ledger components
//!
//! This module contains the fundamental building blocks:
//! - Transactions (opaque sender/recipient/amount transfers)
//! - Blocks (hash-linked, sealed by proof of work)
//! - Ledger (authoritative chain + pending-transaction pool)
//! - Chain validation (pure structural checks)

pub mod block;
pub mod ledger;
pub mod transaction;
pub mod validation;

pub use block::{Block, GENESIS_PREVIOUS_HASH, GENESIS_PROOF};
pub use ledger::Ledger;
pub use transaction::{Transaction, REWARD_AMOUNT, REWARD_SENDER};
pub use validation::validate_chain;
