use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::ChatModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when `XAI_API_KEY` is missing; completion routes then answer with a config error.
    pub model: Option<Arc<dyn ChatModel>>,
    pub config: Config,
}

impl AppState {
    pub fn model(&self) -> Result<Arc<dyn ChatModel>, AppError> {
        self.model.clone().ok_or_else(|| {
            AppError::NotConfigured(
                "XAI_API_KEY not configured on server. Please set the environment variable."
                    .to_string(),
            )
        })
    }
}
