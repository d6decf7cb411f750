//! REST API handlers for ledger operations

use crate::core::{Block, Ledger, Transaction};
use crate::mining::Miner;
use crate::network::{ConsensusResolver, NodeRegistry};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub ledger: Arc<RwLock<Ledger>>,
    pub registry: Arc<RwLock<NodeRegistry>>,
    pub miner: Arc<Miner>,
    pub resolver: Arc<ConsensusResolver>,
}

impl ApiState {
    /// Build fresh node state, rewarding mined blocks to `node_id`
    pub fn new(node_id: &str) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(Ledger::new())),
            registry: Arc::new(RwLock::new(NodeRegistry::new())),
            miner: Arc::new(Miner::new(node_id)),
            resolver: Arc::new(ConsensusResolver::new()),
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct ChainResponse {
    pub chain: Vec<Block>,
    pub length: usize,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct ForgedResponse {
    pub message: String,
    pub index: u64,
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub total_nodes: Vec<String>,
}

#[derive(Serialize)]
pub struct ReplacedResponse {
    pub message: String,
    pub new_chain: Vec<Block>,
}

#[derive(Serialize)]
pub struct AuthoritativeResponse {
    pub message: String,
    pub chain: Vec<Block>,
}

#[derive(Serialize)]
pub struct ApiError {
    pub error: String,
}

// ============================================================================
// Request Types
// ============================================================================

/// Body of `POST /transaction/new/`; fields are optional so that a missing
/// one surfaces as the wire contract's 400, not a deserialization rejection
#[derive(Deserialize)]
pub struct NewTransactionRequest {
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Deserialize)]
pub struct RegisterNodesRequest {
    #[serde(default)]
    pub nodes: Vec<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /chain/ - the full chain; peers call this during consensus
pub async fn full_chain(State(state): State<ApiState>) -> Json<ChainResponse> {
    let ledger = state.ledger.read().await;
    Json(ChainResponse {
        chain: ledger.chain().to_vec(),
        length: ledger.chain().len(),
    })
}

/// POST /transaction/new/ - queue a transaction for the next block
pub async fn new_transaction(
    State(state): State<ApiState>,
    Json(request): Json<NewTransactionRequest>,
) -> Response {
    let (sender, recipient, amount) = match (request.sender, request.recipient, request.amount) {
        (Some(sender), Some(recipient), Some(amount)) => (sender, recipient, amount),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiError {
                    error: "Missing values".to_string(),
                }),
            )
                .into_response();
        }
    };

    let index = state
        .ledger
        .write()
        .await
        .submit_transaction(Transaction::new(&sender, &recipient, amount));

    Json(MessageResponse {
        message: format!("Transaction will be added to Block {}", index),
    })
    .into_response()
}

/// GET /mine/ - run one mining round
pub async fn mine(State(state): State<ApiState>) -> Response {
    match state.miner.mine(&state.ledger).await {
        Some(block) => Json(ForgedResponse {
            message: "New Block forged".to_string(),
            index: block.index,
            transactions: block.transactions,
            proof: block.proof,
            previous_hash: block.previous_hash,
        })
        .into_response(),
        None => Json(MessageResponse {
            message: "No transaction".to_string(),
        })
        .into_response(),
    }
}

/// POST /nodes/register/ - add peer nodes to the registry
pub async fn register_nodes(
    State(state): State<ApiState>,
    Json(request): Json<RegisterNodesRequest>,
) -> Response {
    if request.nodes.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiError {
                error: "Please supply a valid list of nodes".to_string(),
            }),
        )
            .into_response();
    }

    let mut registry = state.registry.write().await;
    for node in &request.nodes {
        // Sequential registration: the first invalid address aborts the
        // batch; addresses registered before the failure stay registered.
        if let Err(err) = registry.register(node) {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiError {
                    error: err.to_string(),
                }),
            )
                .into_response();
        }
    }

    (
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "New nodes have been added".to_string(),
            total_nodes: registry.peers(),
        }),
    )
        .into_response()
}

/// GET /nodes/resolve/ - run consensus against the registered peers
pub async fn resolve_conflicts(State(state): State<ApiState>) -> Response {
    let replaced = state.resolver.resolve(&state.ledger, &state.registry).await;

    let ledger = state.ledger.read().await;
    if replaced {
        Json(ReplacedResponse {
            message: "Our chain was replaced".to_string(),
            new_chain: ledger.chain().to_vec(),
        })
        .into_response()
    } else {
        Json(AuthoritativeResponse {
            message: "Our chain is authoritative".to_string(),
            chain: ledger.chain().to_vec(),
        })
        .into_response()
    }
}
