//! Integration tests for peer consensus resolution
//!
//! Each test starts real nodes on loopback listeners and lets one node
//! resolve against the others over HTTP.

use nanochain::api::{create_router, ApiState};
use nanochain::core::{validate_chain, Transaction};
use serde_json::{json, Value};

/// Serve a node's router on an ephemeral loopback port, returning its
/// `host:port` address
async fn spawn_node(state: ApiState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind loopback listener");
    let addr = listener.local_addr().expect("listener has a local address");
    tokio::spawn(async move {
        axum::serve(listener, create_router(state))
            .await
            .expect("node server failed");
    });
    format!("127.0.0.1:{}", addr.port())
}

/// A loopback address nothing listens on
async fn dead_address() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind loopback listener");
    let addr = format!("127.0.0.1:{}", listener.local_addr().unwrap().port());
    drop(listener);
    addr
}

/// Mine `blocks` valid blocks onto a node's ledger
async fn mine_blocks(state: &ApiState, blocks: usize) {
    for i in 0..blocks {
        state
            .ledger
            .write()
            .await
            .submit_transaction(Transaction::new("alice", "bob", i as f64));
        state
            .miner
            .mine(&state.ledger)
            .await
            .expect("pool was not empty");
    }
}

#[tokio::test]
async fn test_resolve_adopts_longer_valid_chain() {
    let peer = ApiState::new("peer");
    mine_blocks(&peer, 4).await;
    let peer_addr = spawn_node(peer).await;

    let local = ApiState::new("local");
    mine_blocks(&local, 1).await;
    local
        .registry
        .write()
        .await
        .register(&peer_addr)
        .expect("peer address is valid");

    let replaced = local.resolver.resolve(&local.ledger, &local.registry).await;
    assert!(replaced);

    let ledger = local.ledger.read().await;
    assert_eq!(ledger.chain().len(), 5);
    assert!(validate_chain(ledger.chain()));
}

#[tokio::test]
async fn test_resolve_rejects_invalid_longer_chain() {
    let peer = ApiState::new("peer");
    mine_blocks(&peer, 4).await;
    // Corrupt a middle block of the peer's chain after mining it.
    {
        let mut ledger = peer.ledger.write().await;
        let mut chain = ledger.chain().to_vec();
        chain[2].proof += 1;
        ledger.replace_chain(chain);
    }
    let peer_addr = spawn_node(peer).await;

    let local = ApiState::new("local");
    mine_blocks(&local, 1).await;
    local
        .registry
        .write()
        .await
        .register(&peer_addr)
        .expect("peer address is valid");

    let replaced = local.resolver.resolve(&local.ledger, &local.registry).await;
    assert!(!replaced);
    assert_eq!(local.ledger.read().await.chain().len(), 2);
}

#[tokio::test]
async fn test_resolve_ignores_shorter_peer_chain() {
    let peer = ApiState::new("peer");
    mine_blocks(&peer, 1).await;
    let peer_addr = spawn_node(peer).await;

    let local = ApiState::new("local");
    mine_blocks(&local, 3).await;
    local
        .registry
        .write()
        .await
        .register(&peer_addr)
        .expect("peer address is valid");

    let replaced = local.resolver.resolve(&local.ledger, &local.registry).await;
    assert!(!replaced);
    assert_eq!(local.ledger.read().await.chain().len(), 4);
}

#[tokio::test]
async fn test_resolve_tolerates_unreachable_peer() {
    let peer = ApiState::new("peer");
    mine_blocks(&peer, 2).await;
    let peer_addr = spawn_node(peer).await;

    let local = ApiState::new("local");
    {
        let mut registry = local.registry.write().await;
        registry
            .register(&dead_address().await)
            .expect("address is well-formed");
        registry.register(&peer_addr).expect("peer address is valid");
    }

    let replaced = local.resolver.resolve(&local.ledger, &local.registry).await;
    assert!(replaced);
    assert_eq!(local.ledger.read().await.chain().len(), 3);
}

#[tokio::test]
async fn test_resolve_endpoint_reports_replacement() {
    let peer = ApiState::new("peer");
    mine_blocks(&peer, 2).await;
    let peer_addr = spawn_node(peer).await;

    let local = ApiState::new("local");
    let local_addr = spawn_node(local.clone()).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{}/nodes/register/", local_addr))
        .json(&json!({ "nodes": [peer_addr] }))
        .send()
        .await
        .expect("registration request failed");
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = client
        .get(format!("http://{}/nodes/resolve/", local_addr))
        .send()
        .await
        .expect("resolve request failed")
        .json()
        .await
        .expect("resolve response decodes");
    assert_eq!(body["message"], "Our chain was replaced");
    assert_eq!(body["new_chain"].as_array().unwrap().len(), 3);

    // The adopted chain is served back on the local node's own surface.
    let body: Value = client
        .get(format!("http://{}/chain/", local_addr))
        .send()
        .await
        .expect("chain request failed")
        .json()
        .await
        .expect("chain response decodes");
    assert_eq!(body["length"], 3);
}
