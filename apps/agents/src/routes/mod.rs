pub mod chat;
pub mod health;
pub mod ui;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::agents::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/api/health", get(health::health_handler))
        .route("/api/chat", post(chat::handle_chat))
        // Agent API
        .route(
            "/api/agents/gap-analysis",
            post(handlers::handle_gap_analysis),
        )
        .route("/api/agents/tailor", post(handlers::handle_tailor))
        .route("/api/agents/outreach", post(handlers::handle_outreach))
        .route("/api/agents/behavioral", post(handlers::handle_behavioral))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
