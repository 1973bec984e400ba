//! Axum route handlers exposing the agents over HTTP.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::agents::gap_analyst::{run_gap_analysis, GapReport, JobDescriptions};
use crate::agents::interview::{run_behavioral_prep, DEFAULT_ROLE};
use crate::agents::outreach::{
    generate_outreach, OutreachAngle, DEFAULT_YOUR_NAME, DEFAULT_YOUR_SKILLS,
};
use crate::agents::tailor::{extract_keywords_from_jd, tailor_resume, JdKeywords, TailorReport};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JdInput {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct GapAnalysisRequest {
    pub resume: String,
    pub jds: Vec<JdInput>,
}

#[derive(Debug, Deserialize)]
pub struct TailorRequest {
    pub resume: String,
    pub jd: String,
}

#[derive(Debug, Serialize)]
pub struct TailorResponse {
    pub keywords: JdKeywords,
    pub report: TailorReport,
}

#[derive(Debug, Deserialize)]
pub struct OutreachRequest {
    pub profile: String,
    pub your_skills: Option<String>,
    #[serde(default)]
    pub angle: OutreachAngle,
    pub your_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BehavioralRequest {
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub content: String,
}

fn require_text(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/agents/gap-analysis
pub async fn handle_gap_analysis(
    State(state): State<AppState>,
    Json(request): Json<GapAnalysisRequest>,
) -> Result<Json<GapReport>, AppError> {
    require_text(&request.resume, "resume")?;

    let mut jds = JobDescriptions::new();
    for jd in request.jds {
        require_text(&jd.text, "jd text")?;
        jds.insert(jd.title.trim(), jd.text.trim());
    }

    let model = state.model()?;
    let report = run_gap_analysis(model.as_ref(), request.resume.trim(), &jds).await?;
    Ok(Json(report))
}

/// POST /api/agents/tailor
///
/// Both passes: keyword extraction, then the rewrite.
pub async fn handle_tailor(
    State(state): State<AppState>,
    Json(request): Json<TailorRequest>,
) -> Result<Json<TailorResponse>, AppError> {
    require_text(&request.resume, "resume")?;
    require_text(&request.jd, "jd")?;

    let model = state.model()?;
    let keywords = extract_keywords_from_jd(model.as_ref(), request.jd.trim()).await?;
    let report = tailor_resume(
        model.as_ref(),
        request.resume.trim(),
        request.jd.trim(),
        &keywords,
    )
    .await?;

    Ok(Json(TailorResponse { keywords, report }))
}

/// POST /api/agents/outreach
pub async fn handle_outreach(
    State(state): State<AppState>,
    Json(request): Json<OutreachRequest>,
) -> Result<Json<TextResponse>, AppError> {
    require_text(&request.profile, "profile")?;

    let model = state.model()?;
    let content = generate_outreach(
        model.as_ref(),
        request.profile.trim(),
        or_default(&request.your_skills, DEFAULT_YOUR_SKILLS),
        request.angle,
        or_default(&request.your_name, DEFAULT_YOUR_NAME),
    )
    .await?;

    Ok(Json(TextResponse { content }))
}

/// POST /api/agents/behavioral
pub async fn handle_behavioral(
    State(state): State<AppState>,
    Json(request): Json<BehavioralRequest>,
) -> Result<Json<TextResponse>, AppError> {
    let model = state.model()?;
    let content = run_behavioral_prep(model.as_ref(), or_default(&request.role, DEFAULT_ROLE)).await?;
    Ok(Json(TextResponse { content }))
}
