use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use career_agents::config::Config;
use career_agents::llm_client::{ChatModel, LlmClient};
use career_agents::logging::init_server_logging;
use career_agents::routes::build_router;
use career_agents::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    init_server_logging(&config.rust_log);

    info!("Starting Career Agents API v{}", env!("CARGO_PKG_VERSION"));

    let model: Option<Arc<dyn ChatModel>> = match &config.xai_api_key {
        Some(key) => {
            let llm = LlmClient::new(
                key.clone(),
                config.xai_base_url.clone(),
                config.model.clone(),
                Duration::from_secs(config.llm_timeout_secs),
            )?;
            info!("LLM client initialized (model: {})", llm.model());
            Some(Arc::new(llm))
        }
        None => {
            warn!("XAI_API_KEY not found in environment; /api/chat will return an error");
            warn!("Set it with: export XAI_API_KEY='your-key-here'");
            None
        }
    };

    let state = AppState {
        model,
        config: config.clone(),
    };

    let app = build_router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
