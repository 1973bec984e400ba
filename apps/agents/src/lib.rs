//! Career coaching agents backed by a hosted chat-completion API.
//!
//! Library half of the `career` CLI and the `career-api` server.

pub mod agents;
pub mod config;
pub mod errors;
pub mod inputs;
pub mod llm_client;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod routes;
pub mod state;

pub use config::Config;
pub use errors::AppError;
pub use llm_client::{ChatMessage, ChatModel, CompletionRequest, LlmClient, LlmError};
