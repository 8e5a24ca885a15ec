//! Shared response types for API handlers.

use serde::Serialize;

/// Standard `{ "message": ".." }` acknowledgement body for delete and reset
/// endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
