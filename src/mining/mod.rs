//! Mining module for the proof-of-work search and block minting

pub mod miner;
pub mod pow;

pub use miner::Miner;
pub use pow::{solve, solve_interruptible, valid_proof, DIFFICULTY};
