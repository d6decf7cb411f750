//! Cryptographic utilities for the ledger
//!
//! This module provides:
//! - SHA-256 hashing
//! - Hex digest helpers for proof-of-work checks

pub mod hash;

pub use hash::{has_leading_zeros, sha256, sha256_hex};
