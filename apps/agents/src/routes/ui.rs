use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /
/// Serves the single-page UI from `UI_PATH`.
pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let path = &state.config.ui_path;
    match tokio::fs::read_to_string(path).await {
        Ok(html) => Ok(Html(html)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AppError::NotFound(format!(
            "UI file {} not found",
            path.display()
        ))),
        Err(e) => Err(AppError::Io(e)),
    }
}
