//! hello-server: a minimal HTTP greeting and health-check server.
//!
//! Serves `Hello, World!` on `/` and `{"status":"ok"}` on `/health`, for validating
//! container and instance deployments.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
