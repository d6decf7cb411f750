//! Structural chain validation
//!
//! Walks a candidate chain checking that every block links to its
//! predecessor's digest and carries a valid proof of work. Pure: nothing
//! outside the given slice is read or written, and transaction contents are
//! not inspected.

use crate::core::block::Block;
use crate::mining::pow;

/// Check the link and puzzle invariants of every adjacent pair
///
/// Chains of length 0 or 1 are trivially valid.
pub fn validate_chain(chain: &[Block]) -> bool {
    for pair in chain.windows(2) {
        let digest = pair[0].digest();
        if pair[1].previous_hash != digest {
            return false;
        }
        if !pow::valid_proof(pair[0].proof, pair[1].proof, &digest) {
            return false;
        }
    }
    true
}
