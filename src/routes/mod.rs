//! HTTP route handlers.
//!
//! The routing table is static: `/` and `/health`, matched exactly and for any
//! method. Every other path falls through to axum's default 404.
//!
//! Every request, matched or not, passes through the access-log middleware.

pub mod health;
pub mod home;

use axum::{middleware, routing::any, Router};

use crate::middleware::access_log_layer;

/// Creates the Axum router with both routes.
pub fn create_router() -> Router {
    Router::new()
        .route("/", any(home::index))
        // Health check - liveness probes for the deployment target
        .route("/health", any(health::health))
        // Access log - root span with request_id, one line per response
        .layer(middleware::from_fn(access_log_layer))
}
