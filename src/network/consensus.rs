//! Longest-valid-chain consensus resolution
//!
//! Polls every registered peer for its chain over HTTP and adopts the
//! longest one that passes structural validation. Per-peer failures are
//! soft: an unreachable, slow, or malformed peer is skipped and resolution
//! continues with the rest.

use crate::core::{validate_chain, Block, Ledger};
use crate::network::registry::NodeRegistry;
use log::{info, warn};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Per-request timeout for peer chain fetches
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Wire shape of a peer's `GET /chain/` response
#[derive(Debug, Deserialize)]
struct PeerChain {
    chain: Vec<Block>,
    length: usize,
}

/// Resolves chain conflicts against the registered peers
pub struct ConsensusResolver {
    client: reqwest::Client,
}

impl ConsensusResolver {
    /// Create a resolver with a bounded-timeout HTTP client
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("client builds from static configuration");
        Self { client }
    }

    /// Apply the longest-valid-chain rule
    ///
    /// Scans peers in sorted order; any peer whose reported length beats the
    /// running best and whose chain validates becomes the new best, so the
    /// last longer candidate wins among equals. Returns whether the local
    /// chain was replaced.
    pub async fn resolve(
        &self,
        ledger: &Arc<RwLock<Ledger>>,
        registry: &Arc<RwLock<NodeRegistry>>,
    ) -> bool {
        let peers = registry.read().await.peers();
        let mut best_len = ledger.read().await.chain().len();
        let mut best_chain: Option<Vec<Block>> = None;

        for peer in peers {
            let fetched = match self.fetch_chain(&peer).await {
                Ok(fetched) => fetched,
                Err(err) => {
                    warn!("Skipping peer {}: {}", peer, err);
                    continue;
                }
            };

            if fetched.length > best_len && validate_chain(&fetched.chain) {
                info!(
                    "Peer {} offers a valid chain of length {}",
                    peer, fetched.length
                );
                best_len = fetched.length;
                best_chain = Some(fetched.chain);
            }
        }

        match best_chain {
            Some(chain) => {
                info!("Replacing local chain with one of length {}", best_len);
                ledger.write().await.replace_chain(chain);
                true
            }
            None => false,
        }
    }

    /// Fetch a peer's full chain
    async fn fetch_chain(&self, peer: &str) -> Result<PeerChain, reqwest::Error> {
        let url = format!("http://{}/chain/", peer);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        response.json::<PeerChain>().await
    }
}

impl Default for ConsensusResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_without_peers_keeps_local_chain() {
        let resolver = ConsensusResolver::new();
        let ledger = Arc::new(RwLock::new(Ledger::new()));
        let registry = Arc::new(RwLock::new(NodeRegistry::new()));

        assert!(!resolver.resolve(&ledger, &registry).await);
        assert_eq!(ledger.read().await.chain().len(), 1);
    }
}
