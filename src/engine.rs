//! The crawl-engine collaborator boundary.
//!
//! The gate does not execute requests; it hands them to an [`Engine`]. The
//! engine is expected to accept duplicate submissions when a request is
//! explicitly marked `dont_filter` — replayed requests have already been
//! seen once by any duplicate-suppression layer.

use crate::error::GateError;
use crate::request::{Origin, Request};
use async_trait::async_trait;

/// Accepts requests resubmitted by the gate.
#[async_trait]
pub trait Engine: Send + Sync + 'static {
    /// Submits a request for execution in the given crawl context.
    async fn submit(&self, request: Request, origin: &Origin) -> Result<(), GateError>;
}
