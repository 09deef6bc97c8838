//! Root greeting handler.

use tracing::instrument;

/// Body returned for every request to `/`.
pub const GREETING: &str = "Hello, World!";

/// Root handler. Answers any method with the fixed greeting.
#[instrument(name = "home::index", level = "debug")]
pub async fn index() -> &'static str {
    GREETING
}
