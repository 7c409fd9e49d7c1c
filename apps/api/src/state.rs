use std::sync::Arc;

use crate::llm_client::GeminiClient;
use crate::store::CareerStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway. Production wires `PgStore`; tests swap in the
    /// in-memory double.
    pub store: Arc<dyn CareerStore>,
    pub gemini: GeminiClient,
}
