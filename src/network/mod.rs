//! Networking module
//!
//! Peer bookkeeping and longest-chain consensus over the peers' HTTP
//! surface.

pub mod consensus;
pub mod registry;

pub use consensus::ConsensusResolver;
pub use registry::{NodeRegistry, RegistryError};
