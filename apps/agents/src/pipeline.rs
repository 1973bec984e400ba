//! Orchestrator: runs the four agents in sequence for one target role.
//!
//! Flow: gap analysis → keyword extraction → tailoring (saved) →
//!       outreach (optional, saved) → behavioral prep.
//!
//! Each step is one model call (two for tailoring). A failing step aborts the
//! run; earlier files stay on disk and earlier steps have already been
//! reported through `run_pipeline_with`.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::agents::gap_analyst::{run_gap_analysis, GapReport, JobDescriptions};
use crate::agents::interview::run_behavioral_prep;
use crate::agents::outreach::{generate_outreach, OutreachAngle, DEFAULT_YOUR_NAME};
use crate::agents::tailor::{
    extract_keywords_from_jd, save_tailored_resume, tailor_resume, JdKeywords, TailorReport,
};
use crate::errors::AppError;
use crate::llm_client::ChatModel;

pub const TARGET_ROLE_TITLE: &str = "target_role";
pub const PIPELINE_INTERVIEW_ROLE: &str = "QA Director / Principal SDET";
pub const TAILORED_RESUME_FILE: &str = "tailored_resume.txt";
pub const OUTREACH_FILE: &str = "outreach_messages.txt";

/// Skills from the gap report quoted in outreach.
const OUTREACH_SKILL_COUNT: usize = 5;

#[derive(Debug, Clone)]
pub struct PipelineInput {
    pub resume: String,
    pub jd: String,
    pub profile: Option<String>,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutreachOutcome {
    pub messages: String,
    pub path: PathBuf,
}

/// Everything the pipeline produced.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutcome {
    pub gap: GapReport,
    pub keywords: JdKeywords,
    pub tailor: TailorReport,
    /// `None` when the tailor reply had no resume text to save.
    pub tailored_resume_path: Option<PathBuf>,
    /// `None` when no profile was supplied.
    pub outreach: Option<OutreachOutcome>,
    pub behavioral: String,
}

/// A finished step, reported before the next one starts.
#[derive(Debug, Clone, Copy)]
pub enum PipelineStep<'a> {
    GapAnalysis(&'a GapReport),
    Tailoring {
        keywords: &'a JdKeywords,
        report: &'a TailorReport,
        saved_to: Option<&'a Path>,
    },
    /// `None` when no profile was supplied.
    Outreach(Option<&'a OutreachOutcome>),
    InterviewPrep(&'a str),
}

pub async fn run_pipeline(
    model: &dyn ChatModel,
    input: &PipelineInput,
) -> Result<PipelineOutcome, AppError> {
    run_pipeline_with(model, input, |_| {}).await
}

/// Like `run_pipeline`, calling `on_step` as each step completes so callers
/// keep earlier results when a later step fails.
pub async fn run_pipeline_with<F>(
    model: &dyn ChatModel,
    input: &PipelineInput,
    mut on_step: F,
) -> Result<PipelineOutcome, AppError>
where
    F: FnMut(PipelineStep<'_>),
{
    info!("Career agent pipeline starting");

    info!("Step 1/4: gap analysis");
    let jds = JobDescriptions::single(TARGET_ROLE_TITLE, input.jd.as_str());
    let gap = run_gap_analysis(model, &input.resume, &jds).await?;
    on_step(PipelineStep::GapAnalysis(&gap));

    info!("Step 2/4: resume tailoring");
    let keywords = extract_keywords_from_jd(model, &input.jd).await?;
    let tailor = tailor_resume(model, &input.resume, &input.jd, &keywords).await?;
    let resume_path = input.output_dir.join(TAILORED_RESUME_FILE);
    let tailored_resume_path = save_tailored_resume(&tailor, &resume_path)?.then_some(resume_path);
    on_step(PipelineStep::Tailoring {
        keywords: &keywords,
        report: &tailor,
        saved_to: tailored_resume_path.as_deref(),
    });

    let outreach = match &input.profile {
        Some(profile) => {
            info!("Step 3/4: LinkedIn outreach");
            Some(run_outreach_step(model, &gap, profile, &input.output_dir).await?)
        }
        None => {
            info!("Step 3/4: skipped (no profile provided)");
            None
        }
    };
    on_step(PipelineStep::Outreach(outreach.as_ref()));

    info!("Step 4/4: behavioral interview prep");
    let behavioral = run_behavioral_prep(model, PIPELINE_INTERVIEW_ROLE).await?;
    on_step(PipelineStep::InterviewPrep(&behavioral));

    info!("Pipeline complete");

    Ok(PipelineOutcome {
        gap,
        keywords,
        tailor,
        tailored_resume_path,
        outreach,
        behavioral,
    })
}

async fn run_outreach_step(
    model: &dyn ChatModel,
    gap: &GapReport,
    profile: &str,
    output_dir: &Path,
) -> Result<OutreachOutcome, AppError> {
    let skills_summary = gap.top_skills(OUTREACH_SKILL_COUNT).join(", ");
    let messages = generate_outreach(
        model,
        profile,
        &skills_summary,
        OutreachAngle::JobInterest,
        DEFAULT_YOUR_NAME,
    )
    .await?;

    let path = output_dir.join(OUTREACH_FILE);
    std::fs::write(&path, &messages)?;
    info!("Outreach saved to {}", path.display());

    Ok(OutreachOutcome { messages, path })
}
