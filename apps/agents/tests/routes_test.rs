mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use career_agents::routes::build_router;
use career_agents::state::AppState;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{
    state_with, state_without_key, ScriptedModel, GAP_REPLY, KEYWORDS_REPLY, TAILOR_REPLY,
};

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health_reports_key_configuration() {
    let (status, body) = send(build_router(state_without_key()), get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["api_key_configured"], false);

    let model = Arc::new(ScriptedModel::new(Vec::<String>::new()));
    let (_, body) = send(build_router(state_with(model)), get("/api/health")).await;
    assert_eq!(body["api_key_configured"], true);
}

#[tokio::test]
async fn test_chat_proxies_with_defaults() {
    let model = Arc::new(ScriptedModel::new(["Hello from the model"]));
    let router = build_router(state_with(model.clone()));

    let (status, body) = send(
        router,
        post_json(
            "/api/chat",
            json!({"messages": [{"role": "user", "content": "hi"}]}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"choices": [{"message": {"role": "assistant", "content": "Hello from the model"}}]})
    );

    let sent = model.request(0);
    assert_eq!(sent.max_tokens, 2000);
    assert_eq!(sent.temperature, Some(0.7));
    assert_eq!(sent.model.as_deref(), Some("grok-beta"));
    assert_eq!(sent.messages.len(), 1);
}

#[tokio::test]
async fn test_chat_without_key_is_a_config_error() {
    let (status, body) = send(
        build_router(state_without_key()),
        post_json("/api/chat", json!({"messages": []})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "NOT_CONFIGURED");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("XAI_API_KEY not configured"));
}

#[tokio::test]
async fn test_chat_upstream_failure_passes_message_through() {
    let model = Arc::new(ScriptedModel::failing("model overloaded"));
    let (status, body) = send(
        build_router(state_with(model)),
        post_json(
            "/api/chat",
            json!({"messages": [{"role": "user", "content": "hi"}]}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("model overloaded"));
}

#[tokio::test]
async fn test_gap_analysis_endpoint() {
    let model = Arc::new(ScriptedModel::new([GAP_REPLY]));
    let (status, body) = send(
        build_router(state_with(model.clone())),
        post_json(
            "/api/agents/gap-analysis",
            json!({
                "resume": "Jane Doe, QA Manager",
                "jds": [{"title": "sdet_lead", "text": "Playwright"}]
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["skills_i_lack"][0]["skill"], "Playwright");
    assert_eq!(body["ats_keywords_to_add"][0]["appears_in_n_jds"], "1");
    assert_eq!(model.call_count(), 1);
}

#[tokio::test]
async fn test_tailor_endpoint_returns_keywords_and_report() {
    let model = Arc::new(ScriptedModel::new([KEYWORDS_REPLY, TAILOR_REPLY]));
    let (status, body) = send(
        build_router(state_with(model.clone())),
        post_json(
            "/api/agents/tailor",
            json!({"resume": " Jane Doe, QA Manager ", "jd": "Need Playwright"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["keywords"]["hard_skills"], json!(["Playwright", "k6"]));
    assert_eq!(body["keywords"]["soft_skills"], json!([]));
    assert_eq!(body["report"]["tailored_resume"], "JANE DOE\nQA Director");
    assert_eq!(body["report"]["ats_match_score"], "84%");
    assert_eq!(body["report"]["gaps_flagged"], json!(["Kubernetes"]));

    assert_eq!(model.call_count(), 2);
    assert_eq!(model.request(0).max_tokens, 1000);
    let rewrite = model.request(1);
    assert_eq!(rewrite.max_tokens, 5000);
    assert!(rewrite.messages[1].content.contains("Jane Doe, QA Manager"));
    assert!(rewrite.messages[1].content.contains("\"Playwright\""));
}

#[tokio::test]
async fn test_outreach_endpoint_fills_defaults() {
    let model = Arc::new(ScriptedModel::new(["Variant A: Hi"]));
    let (status, body) = send(
        build_router(state_with(model.clone())),
        post_json(
            "/api/agents/outreach",
            json!({"profile": "CTO at Acme", "your_name": "   ", "your_skills": ""}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"content": "Variant A: Hi"}));

    let prompt = &model.request(0).messages[1].content;
    assert!(prompt.contains("MY NAME: QA Professional"));
    assert!(prompt.contains("MY BACKGROUND/SKILLS: QA Automation, Test Management, CI/CD, Selenium"));
    assert!(prompt.contains("OUTREACH ANGLE: just building a professional network, no immediate ask"));
    assert!(prompt.contains("THEIR LINKEDIN PROFILE:\nCTO at Acme"));
}

#[tokio::test]
async fn test_outreach_endpoint_uses_requested_angle() {
    let model = Arc::new(ScriptedModel::new(["drafts"]));
    let (status, _) = send(
        build_router(state_with(model.clone())),
        post_json(
            "/api/agents/outreach",
            json!({"profile": "VP Eng", "angle": "referral_ask", "your_name": "Asha"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let prompt = &model.request(0).messages[1].content;
    assert!(prompt.contains("hoping they can refer you to a specific role"));
    assert!(prompt.contains("MY NAME: Asha"));
}

#[tokio::test]
async fn test_agent_endpoints_validate_before_calling_the_model() {
    let model = Arc::new(ScriptedModel::new(["unused"]));
    let router = build_router(state_with(model.clone()));

    let (status, body) = send(
        router.clone(),
        post_json("/api/agents/tailor", json!({"resume": "  ", "jd": "QA Lead"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "resume cannot be empty");

    let (status, _) = send(
        router,
        post_json("/api/agents/gap-analysis", json!({"resume": "Jane", "jds": []})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn test_behavioral_endpoint_defaults_role() {
    let model = Arc::new(ScriptedModel::new(["questions"]));
    let (status, body) = send(
        build_router(state_with(model.clone())),
        post_json("/api/agents/behavioral", json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "questions");
    assert!(model.request(0).messages[1]
        .content
        .contains("for a QA Director role"));
}

#[tokio::test]
async fn test_index_serves_ui_file() {
    let dir = tempfile::tempdir().unwrap();
    let ui = dir.path().join("ui.html");
    std::fs::write(&ui, "<html>career agents</html>").unwrap();

    let mut state: AppState = state_without_key();
    state.config.ui_path = ui;

    let response = build_router(state).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"<html>career agents</html>");
}

#[tokio::test]
async fn test_index_missing_ui_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = state_without_key();
    state.config.ui_path = dir.path().join("missing.html");

    let (status, body) = send(build_router(state), get("/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
