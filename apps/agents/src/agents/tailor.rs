//! Resume Tailor: two-pass ATS optimisation of a resume for one JD.
//!
//! Pass 1 extracts keyword categories from the JD; pass 2 rewrites the resume
//! around them and reports an estimated match score.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::agents::loose::{null_as_default, LooseNumber};
use crate::agents::prompts::{
    KEYWORD_EXTRACTION_PROMPT_TEMPLATE, TAILOR_PROMPT_TEMPLATE, TAILOR_SYSTEM,
};
use crate::errors::AppError;
use crate::llm_client::parse::parse_json_reply;
use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{ChatModel, CompletionRequest, LlmError};

const KEYWORD_MAX_TOKENS: u32 = 1000;
const TAILOR_MAX_TOKENS: u32 = 5000;

/// Score at or above which a tailored resume is considered ready to send.
pub const TARGET_ATS_SCORE: u32 = 80;

/// Bullet rewrites shown in the console report.
pub const BULLETS_SHOWN: usize = 5;

/// ATS keyword categories pulled from a JD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JdKeywords {
    #[serde(deserialize_with = "null_as_default")]
    pub hard_skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub soft_skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub methodologies: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub domain_keywords: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub action_verbs: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub title_variants: Vec<String>,
}

impl JdKeywords {
    fn categories(&self) -> [&Vec<String>; 7] {
        [
            &self.hard_skills,
            &self.soft_skills,
            &self.methodologies,
            &self.certifications,
            &self.domain_keywords,
            &self.action_verbs,
            &self.title_variants,
        ]
    }

    pub fn total(&self) -> usize {
        self.categories().iter().map(|c| c.len()).sum()
    }

    /// Categories holding at least one keyword.
    pub fn category_count(&self) -> usize {
        self.categories().iter().filter(|c| !c.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletRewrite {
    #[serde(deserialize_with = "null_as_default")]
    pub original: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rewritten: String,
    #[serde(deserialize_with = "null_as_default")]
    pub keywords_added: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TailorReport {
    #[serde(deserialize_with = "null_as_default")]
    pub tailored_resume: String,
    pub ats_match_score: LooseNumber,
    #[serde(deserialize_with = "null_as_default")]
    pub score_reasoning: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bullets_rewritten: Vec<BulletRewrite>,
    #[serde(deserialize_with = "null_as_default")]
    pub gaps_flagged: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub summary_rewrite: String,
}

impl TailorReport {
    /// Report for a reply that carried no JSON: the whole reply is the resume.
    pub fn from_raw_text(raw: &str) -> Self {
        Self {
            tailored_resume: raw.to_string(),
            ..Default::default()
        }
    }

    /// Integer score, 0 when the model gave something unreadable.
    pub fn score_value(&self) -> u32 {
        self.ats_match_score.value_or_zero()
    }

    pub fn meets_target(&self) -> bool {
        self.score_value() >= TARGET_ATS_SCORE
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Agent calls
// ────────────────────────────────────────────────────────────────────────────

/// Pass 1. A reply with no JSON object yields empty keywords; a malformed one is an error.
pub async fn extract_keywords_from_jd(
    model: &dyn ChatModel,
    jd: &str,
) -> Result<JdKeywords, AppError> {
    let prompt = fill_template(
        KEYWORD_EXTRACTION_PROMPT_TEMPLATE,
        &[("jd", jd), ("json_only", JSON_ONLY_INSTRUCTION)],
    );

    let raw = model
        .complete(CompletionRequest::user_only(prompt, KEYWORD_MAX_TOKENS))
        .await
        .map_err(|e| AppError::Llm(format!("Keyword extraction call failed: {e}")))?;

    let keywords = match parse_json_reply::<JdKeywords>(&raw) {
        Ok(keywords) => keywords,
        Err(LlmError::NoJsonObject) => {
            warn!("Keyword extraction reply had no JSON object; continuing without keywords");
            JdKeywords::default()
        }
        Err(e) => {
            return Err(AppError::Llm(format!(
                "Could not parse keyword extraction JSON: {e}"
            )))
        }
    };

    info!(
        "Found {} keywords across {} categories",
        keywords.total(),
        keywords.category_count()
    );

    Ok(keywords)
}

pub fn build_tailor_request(
    resume: &str,
    jd: &str,
    keywords: &JdKeywords,
) -> Result<CompletionRequest, AppError> {
    let keyword_summary = serde_json::to_string_pretty(keywords)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize keywords: {e}")))?;

    let prompt = fill_template(
        TAILOR_PROMPT_TEMPLATE,
        &[
            ("keywords", keyword_summary.as_str()),
            ("resume", resume),
            ("jd", jd),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    );

    Ok(CompletionRequest::with_system(
        TAILOR_SYSTEM,
        prompt,
        TAILOR_MAX_TOKENS,
    ))
}

/// Pass 2. A reply with no JSON object is kept whole as the tailored resume.
pub async fn tailor_resume(
    model: &dyn ChatModel,
    resume: &str,
    jd: &str,
    keywords: &JdKeywords,
) -> Result<TailorReport, AppError> {
    let raw = model
        .complete(build_tailor_request(resume, jd, keywords)?)
        .await
        .map_err(|e| AppError::Llm(format!("Resume tailoring call failed: {e}")))?;

    match parse_json_reply::<TailorReport>(&raw) {
        Ok(report) => {
            info!(
                "Tailored resume: score={}, {} bullets rewritten, {} gaps",
                report.ats_match_score,
                report.bullets_rewritten.len(),
                report.gaps_flagged.len()
            );
            Ok(report)
        }
        Err(LlmError::NoJsonObject) => {
            warn!("Tailor reply had no JSON object; using the raw reply as the resume");
            Ok(TailorReport::from_raw_text(&raw))
        }
        Err(e) => Err(AppError::Llm(format!(
            "Could not parse tailored resume JSON: {e}"
        ))),
    }
}

/// Writes the tailored resume to `path`. Returns `false` when there was nothing to write.
pub fn save_tailored_resume(report: &TailorReport, path: &Path) -> Result<bool, AppError> {
    if report.tailored_resume.is_empty() {
        return Ok(false);
    }
    std::fs::write(path, &report.tailored_resume)?;
    info!("Tailored resume saved to {}", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_keyword_counts() {
        let keywords = JdKeywords {
            hard_skills: vec!["Playwright".into(), "k6".into()],
            methodologies: vec!["Shift-Left".into()],
            ..Default::default()
        };
        assert_eq!(keywords.total(), 3);
        assert_eq!(keywords.category_count(), 2);
        assert!(!keywords.is_empty());
        assert!(JdKeywords::default().is_empty());
    }

    #[test]
    fn test_score_value_variants() {
        let mut report = TailorReport::default();
        assert_eq!(report.score_value(), 0);

        report.ats_match_score = LooseNumber::new(json!("82%"));
        assert_eq!(report.score_value(), 82);
        assert!(report.meets_target());

        report.ats_match_score = LooseNumber::new(json!(79));
        assert!(!report.meets_target());

        report.ats_match_score = LooseNumber::new(json!("high"));
        assert_eq!(report.score_value(), 0);
    }

    #[test]
    fn test_report_deserializes_with_numeric_or_string_score() {
        let report: TailorReport = serde_json::from_str(
            r#"{"tailored_resume": "JANE DOE", "ats_match_score": "88",
                "bullets_rewritten": [{"original": "Did tests", "rewritten": "Led testing"}]}"#,
        )
        .unwrap();
        assert_eq!(report.score_value(), 88);
        assert!(report.bullets_rewritten[0].keywords_added.is_empty());
        assert!(report.gaps_flagged.is_empty());
    }

    #[test]
    fn test_null_fields_keep_the_resume() {
        let report: TailorReport = serde_json::from_str(
            r#"{"tailored_resume": "JANE", "ats_match_score": 85, "gaps_flagged": null,
                "summary_rewrite": null,
                "bullets_rewritten": [{"original": null, "rewritten": "Led", "keywords_added": null}]}"#,
        )
        .unwrap();
        assert_eq!(report.tailored_resume, "JANE");
        assert_eq!(report.score_value(), 85);
        assert!(report.gaps_flagged.is_empty());
        assert!(report.summary_rewrite.is_empty());
        assert_eq!(report.bullets_rewritten[0].original, "");
        assert!(report.bullets_rewritten[0].keywords_added.is_empty());
    }

    #[test]
    fn test_keywords_tolerate_null_categories() {
        let keywords: JdKeywords =
            serde_json::from_str(r#"{"hard_skills": ["k6"], "certifications": null}"#).unwrap();
        assert_eq!(keywords.total(), 1);
        assert!(keywords.certifications.is_empty());
    }

    #[test]
    fn test_request_embeds_keywords_and_rules() {
        let keywords = JdKeywords {
            certifications: vec!["ISTQB".into()],
            ..Default::default()
        };
        let request = build_tailor_request("MY RESUME", "THE JD", &keywords).unwrap();
        assert_eq!(request.max_tokens, TAILOR_MAX_TOKENS);
        assert_eq!(request.messages[0].content, TAILOR_SYSTEM);

        let user = &request.messages[1].content;
        assert!(user.contains("\"ISTQB\""));
        assert!(user.contains("MY ORIGINAL RESUME:\nMY RESUME"));
        assert!(user.contains("TARGET JOB DESCRIPTION:\nTHE JD"));
        assert!(user.contains("[GAP: xyz]"));
    }

    #[test]
    fn test_save_skips_empty_resume() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tailored_resume.txt");

        assert!(!save_tailored_resume(&TailorReport::default(), &path).unwrap());
        assert!(!path.exists());

        let report = TailorReport::from_raw_text("JANE DOE\nQA Director");
        assert!(save_tailored_resume(&report, &path).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "JANE DOE\nQA Director");
    }
}
