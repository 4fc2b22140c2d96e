use std::sync::Arc;

use crate::jobs::gateway::JobGateway;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Fallback gateway over the remote source and the local Record Store.
    pub gateway: Arc<JobGateway>,
}
