//! Peer registry
//!
//! Keeps the set of known peer nodes as normalized network locations
//! (`host[:port]`), deduplicated by value.

use std::collections::HashSet;
use thiserror::Error;

/// Peer registration errors
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Invalid node address: {0}")]
    InvalidAddress(String),
}

/// Set of known peer nodes
#[derive(Debug, Default)]
pub struct NodeRegistry {
    peers: HashSet<String>,
}

impl NodeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            peers: HashSet::new(),
        }
    }

    /// Register a peer address
    ///
    /// Accepts addresses with or without a scheme and stores the extracted
    /// `host[:port]` location. Registering an already-known address is a
    /// no-op. Returns the normalized location.
    pub fn register(&mut self, address: &str) -> Result<String, RegistryError> {
        let location = network_location(address)
            .ok_or_else(|| RegistryError::InvalidAddress(address.to_string()))?;
        self.peers.insert(location.clone());
        Ok(location)
    }

    /// Snapshot of the known peers, sorted for a reproducible scan order
    pub fn peers(&self) -> Vec<String> {
        let mut peers: Vec<String> = self.peers.iter().cloned().collect();
        peers.sort();
        peers
    }

    /// Number of known peers
    pub fn len(&self) -> usize {
        self.peers.len()
    }

    /// Whether no peers are known
    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}

/// Extract `host[:port]` from an address, with or without a scheme
fn network_location(address: &str) -> Option<String> {
    let rest = match address.split_once("://") {
        Some((_, rest)) => rest,
        None => address,
    };
    let location = rest.split(['/', '?', '#']).next().unwrap_or("");
    if location.is_empty() || location.contains(char::is_whitespace) {
        return None;
    }
    if let Some((host, port)) = location.rsplit_once(':') {
        if host.is_empty() || port.parse::<u16>().is_err() {
            return None;
        }
    }
    Some(location.to_string())
}
