//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! Used by ECS, Kubernetes, systemd, and load balancers to verify the service is alive.
//!
//! The body is the JSON object `{"status":"ok"}` followed by a newline, the same
//! framing a streaming JSON encoder writes. It is returned as a plain string, so
//! no `application/json` content type is set.

use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;

/// Status reported by a process that is up and serving.
pub const STATUS_OK: &str = "ok";

/// Health-status payload, built fresh for each request.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self { status: STATUS_OK }
    }

    /// Serialize as a newline-terminated JSON document.
    pub fn to_body(&self) -> Result<String, AppError> {
        let mut body = serde_json::to_string(self)?;
        body.push('\n');
        Ok(body)
    }
}

/// Health check handler.
///
/// This is a liveness probe - it only checks that the process can respond to HTTP.
#[instrument(name = "health::health", level = "debug")]
pub async fn health() -> Result<String, AppError> {
    HealthStatus::ok().to_body()
}
