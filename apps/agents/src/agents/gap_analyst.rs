//! Gap Analyst: compares a resume against one or more job descriptions.
//!
//! Output: skills present, skills missing, ATS keywords to add, title fit,
//! top priorities and a market note, as a typed `GapReport`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::agents::loose::{null_as_default, LooseNumber};
use crate::agents::prompts::{
    GAP_ANALYSIS_PROMPT_TEMPLATE, GAP_ANALYSIS_SYSTEM, SYLLABUS_PROMPT_TEMPLATE,
};
use crate::errors::AppError;
use crate::inputs::{file_stem, load_text, load_text_folder};
use crate::llm_client::parse::parse_json_reply;
use crate::llm_client::prompts::{fill_template, INDIA_MARKET_CONTEXT, JSON_ONLY_NO_MARKDOWN};
use crate::llm_client::{ChatModel, CompletionRequest};

const GAP_ANALYSIS_MAX_TOKENS: u32 = 4000;
const SYLLABUS_MAX_TOKENS: u32 = 1500;

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

/// Job descriptions keyed by title, in insertion order.
/// Re-inserting a title replaces its text but keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobDescriptions {
    entries: Vec<(String, String)>,
}

impl JobDescriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(title: impl Into<String>, text: impl Into<String>) -> Self {
        let mut jds = Self::new();
        jds.insert(title, text);
        jds
    }

    pub fn insert(&mut self, title: impl Into<String>, text: impl Into<String>) {
        let title = title.into();
        let text = text.into();
        match self.entries.iter_mut().find(|(t, _)| *t == title) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((title, text)),
        }
    }

    /// Adds every `*.txt` in `folder`, titled by file stem.
    pub fn extend_from_folder(&mut self, folder: &std::path::Path) -> Result<(), AppError> {
        for (title, text) in load_text_folder(folder)? {
            self.insert(title, text);
        }
        Ok(())
    }

    /// Adds one file, titled by its stem.
    pub fn add_file(&mut self, path: &std::path::Path) -> Result<(), AppError> {
        let text = load_text(path)?;
        self.insert(file_stem(path), text);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.entries.iter().map(|(t, _)| t.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), c.as_str()))
    }

    /// `--- JD: title ---` headed blocks separated by blank lines.
    pub fn to_prompt_block(&self) -> String {
        self.iter()
            .map(|(title, content)| format!("--- JD: {title} ---\n{content}"))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Report model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillHave {
    #[serde(deserialize_with = "null_as_default")]
    pub skill: String,
    #[serde(deserialize_with = "null_as_default")]
    pub evidence_in_resume: String,
    /// "high" | "medium" | "low"
    #[serde(deserialize_with = "null_as_default")]
    pub frequency_in_jds: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGap {
    #[serde(deserialize_with = "null_as_default")]
    pub skill: String,
    #[serde(deserialize_with = "null_as_default")]
    pub why_it_matters: String,
    /// "critical" | "important" | "nice-to-have"
    #[serde(deserialize_with = "null_as_default")]
    pub urgency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub learning_effort: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AtsKeyword {
    #[serde(deserialize_with = "null_as_default")]
    pub keyword: String,
    pub appears_in_n_jds: LooseNumber,
    #[serde(deserialize_with = "null_as_default")]
    pub where_to_add_in_resume: String,
}

/// Structured gap analysis. Every field tolerates being absent or `null` in the reply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GapReport {
    #[serde(deserialize_with = "null_as_default")]
    pub skills_i_have: Vec<SkillHave>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills_i_lack: Vec<SkillGap>,
    #[serde(deserialize_with = "null_as_default")]
    pub ats_keywords_to_add: Vec<AtsKeyword>,
    #[serde(deserialize_with = "null_as_default")]
    pub title_mismatch: String,
    #[serde(deserialize_with = "null_as_default")]
    pub top_3_priorities: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub india_market_insight: String,
    /// Keys outside the schema, kept so a saved report carries the whole reply.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GapReport {
    /// Keywords ordered by how many JDs mention them, most first.
    /// Unreadable counts sort as zero; ties keep reply order.
    pub fn ats_keywords_by_frequency(&self) -> Vec<&AtsKeyword> {
        let mut keywords: Vec<&AtsKeyword> = self.ats_keywords_to_add.iter().collect();
        keywords.sort_by_key(|k| std::cmp::Reverse(k.appears_in_n_jds.value_or_zero()));
        keywords
    }

    /// Names of the first `limit` skills the candidate already has.
    pub fn top_skills(&self, limit: usize) -> Vec<&str> {
        self.skills_i_have
            .iter()
            .take(limit)
            .map(|s| s.skill.as_str())
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Agent calls
// ────────────────────────────────────────────────────────────────────────────

pub fn build_gap_analysis_request(resume: &str, jds: &JobDescriptions) -> CompletionRequest {
    let system = fill_template(GAP_ANALYSIS_SYSTEM, &[("market", INDIA_MARKET_CONTEXT)]);
    let jd_count = jds.len().to_string();
    let jd_block = jds.to_prompt_block();
    let prompt = fill_template(
        GAP_ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("jd_count", jd_count.as_str()),
            ("resume", resume),
            ("jd_block", jd_block.as_str()),
            ("json_only", JSON_ONLY_NO_MARKDOWN),
        ],
    );
    CompletionRequest::with_system(&system, prompt, GAP_ANALYSIS_MAX_TOKENS)
}

/// Runs the gap analysis. A reply with no decodable JSON object is an error.
pub async fn run_gap_analysis(
    model: &dyn ChatModel,
    resume: &str,
    jds: &JobDescriptions,
) -> Result<GapReport, AppError> {
    if jds.is_empty() {
        return Err(AppError::Validation(
            "Provide at least one job description".to_string(),
        ));
    }

    info!("Running gap analysis against {} JDs: {:?}", jds.len(), jds.titles());

    let raw = model
        .complete(build_gap_analysis_request(resume, jds))
        .await
        .map_err(|e| AppError::Llm(format!("Gap analysis call failed: {e}")))?;

    let report: GapReport = parse_json_reply(&raw)
        .map_err(|e| AppError::Llm(format!("Could not parse gap analysis JSON: {e}")))?;

    info!(
        "Gap analysis: {} skills present, {} missing, {} keywords",
        report.skills_i_have.len(),
        report.skills_i_lack.len(),
        report.ats_keywords_to_add.len()
    );

    Ok(report)
}

/// Three-day crash course for one gap skill, as free text.
pub async fn generate_learning_syllabus(
    model: &dyn ChatModel,
    skill: &str,
) -> Result<String, AppError> {
    let prompt = fill_template(SYLLABUS_PROMPT_TEMPLATE, &[("skill", skill)]);
    model
        .complete(CompletionRequest::user_only(prompt, SYLLABUS_MAX_TOKENS))
        .await
        .map_err(|e| AppError::Llm(format!("Syllabus generation failed: {e}")))
}
