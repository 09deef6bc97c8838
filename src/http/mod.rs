//! HTTP server module.
//!
//! Plain HTTP only. The listener is bound once at startup and owned by the
//! server for the lifetime of the process; a bind failure is fatal.

mod server;

pub use server::{bind, serve, start_server, ServerError};
