//! Cryptographic hashing utilities for the ledger
//!
//! Provides SHA-256 based hashing functions used for block digests
//! and proof-of-work verification.

use sha2::{Digest, Sha256};

/// Computes SHA-256 hash of the input data
pub fn sha256(data: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Computes SHA-256 hash and returns it as a hex string
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// Checks if a hex digest starts with `zeros` ASCII '0' characters
pub fn has_leading_zeros(digest: &str, zeros: usize) -> bool {
    digest.len() >= zeros && digest.bytes().take(zeros).all(|b| b == b'0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256() {
        let data = b"hello world";
        let hash = sha256(data);
        assert_eq!(hash.len(), 32);
        assert_eq!(
            sha256_hex(data),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_has_leading_zeros() {
        assert!(has_leading_zeros("0000ab12", 4));
        assert!(has_leading_zeros("00000000", 4));
        assert!(!has_leading_zeros("000ab120", 4));
        assert!(!has_leading_zeros("00", 4));
        assert!(has_leading_zeros("ffff", 0));
    }
}
