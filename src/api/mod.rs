//! REST API module
//!
//! Exposes the node's wire contract to callers and to peer nodes.
//!
//! # Endpoints
//!
//! - `GET /chain/` - Full chain and its length (polled by peers)
//! - `POST /transaction/new/` - Queue a transaction for the next block
//! - `GET /mine/` - Solve the puzzle and mint a block from the pool
//! - `POST /nodes/register/` - Register peer node addresses
//! - `GET /nodes/resolve/` - Run longest-valid-chain resolution

pub mod handlers;
pub mod routes;

pub use handlers::ApiState;
pub use routes::create_router;
