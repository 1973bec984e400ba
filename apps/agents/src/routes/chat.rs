//! Completion proxy for the browser UI. Keeps the API key on the server.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{ChatMessage, CompletionRequest};
use crate::state::AppState;

const DEFAULT_MAX_TOKENS: u32 = 2000;
const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Deserialize)]
pub struct ChatProxyRequest {
    pub model: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// OpenAI-shaped response body: only the first choice, only role and content.
#[derive(Debug, Serialize)]
pub struct ChatProxyResponse {
    pub choices: Vec<ProxyChoice>,
}

#[derive(Debug, Serialize)]
pub struct ProxyChoice {
    pub message: ChatMessage,
}

impl ChatProxyRequest {
    fn into_completion(self, default_model: &str) -> CompletionRequest {
        CompletionRequest::new(self.messages, self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS))
            .temperature(self.temperature.unwrap_or(DEFAULT_TEMPERATURE))
            .model(self.model.unwrap_or_else(|| default_model.to_string()))
    }
}

/// POST /api/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatProxyRequest>,
) -> Result<Json<ChatProxyResponse>, AppError> {
    let model = state.model()?;
    let completion = request.into_completion(&state.config.model);

    info!(
        "Proxying chat completion: model={:?}, {} messages",
        completion.model,
        completion.messages.len()
    );

    let content = model
        .complete(completion)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(Json(ChatProxyResponse {
        choices: vec![ProxyChoice {
            message: ChatMessage::assistant(content),
        }],
    }))
}
