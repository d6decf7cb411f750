//! Proof-of-work puzzle
//!
//! Finding a proof is expensive; checking one costs a single hash. The
//! puzzle input is the previous proof, the candidate proof, and the previous
//! block's digest, concatenated as text.

use crate::crypto::{has_leading_zeros, sha256_hex};
use std::sync::atomic::{AtomicBool, Ordering};

/// Number of leading '0' hex characters a winning digest must carry
pub const DIFFICULTY: usize = 4;

/// Candidates tried between checks of the stop flag
const STOP_CHECK_INTERVAL: u64 = 1024;

/// Check a candidate proof against the previous proof and digest
pub fn valid_proof(last_proof: u64, proof: u64, last_hash: &str) -> bool {
    let guess = format!("{}{}{}", last_proof, proof, last_hash);
    has_leading_zeros(&sha256_hex(guess.as_bytes()), DIFFICULTY)
}

/// Search for a valid proof, starting at 0 and counting up
///
/// Deterministic and CPU-bound with no upper bound on the search. Callers
/// that need to stop a search early use [`solve_interruptible`].
pub fn solve(last_proof: u64, last_hash: &str) -> u64 {
    let mut proof = 0;
    while !valid_proof(last_proof, proof, last_hash) {
        proof += 1;
    }
    proof
}

/// Search for a valid proof, giving up once `stop` becomes true
///
/// Returns `None` when the search was cancelled before a proof was found.
pub fn solve_interruptible(last_proof: u64, last_hash: &str, stop: &AtomicBool) -> Option<u64> {
    let mut proof = 0;
    loop {
        if proof % STOP_CHECK_INTERVAL == 0 && stop.load(Ordering::Relaxed) {
            return None;
        }
        if valid_proof(last_proof, proof, last_hash) {
            return Some(proof);
        }
        proof += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_round_trip() {
        let last_hash = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";
        let proof = solve(100, last_hash);
        assert!(valid_proof(100, proof, last_hash));
        // The search returns the first winner.
        assert!((0..proof).all(|p| !valid_proof(100, p, last_hash)));
    }

    #[test]
    fn test_solve_is_deterministic() {
        let last_hash = "abc";
        assert_eq!(solve(1, last_hash), solve(1, last_hash));
    }

    #[test]
    fn test_interruptible_finds_same_proof() {
        let last_hash = "abc";
        let stop = AtomicBool::new(false);
        assert_eq!(
            solve_interruptible(1, last_hash, &stop),
            Some(solve(1, last_hash))
        );
    }

    #[test]
    fn test_interruptible_respects_stop() {
        let stop = AtomicBool::new(true);
        assert_eq!(solve_interruptible(1, "abc", &stop), None);
    }
}
