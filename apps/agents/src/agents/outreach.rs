//! Outreach Drafter: personalised LinkedIn connection and follow-up messages.
//!
//! Replies are free text (three hook variants plus an email subject line); they
//! are printed and saved as-is.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::agents::prompts::{OUTREACH_PROMPT_TEMPLATE, OUTREACH_SYSTEM};
use crate::errors::AppError;
use crate::inputs::{file_stem, list_text_files, load_text};
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{ChatModel, CompletionRequest};

const OUTREACH_MAX_TOKENS: u32 = 2000;

pub const DEFAULT_YOUR_NAME: &str = "QA Professional";
pub const DEFAULT_YOUR_SKILLS: &str = "QA Automation, Test Management, CI/CD, Selenium";

/// What the sender is after. Drives the tone of every variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutreachAngle {
    #[default]
    #[value(name = "connect")]
    Connect,
    #[value(name = "job_interest")]
    JobInterest,
    #[value(name = "referral_ask")]
    ReferralAsk,
    #[value(name = "insight_ask")]
    InsightAsk,
    #[value(name = "collaboration")]
    Collaboration,
}

impl OutreachAngle {
    pub const ALL: [OutreachAngle; 5] = [
        OutreachAngle::Connect,
        OutreachAngle::JobInterest,
        OutreachAngle::ReferralAsk,
        OutreachAngle::InsightAsk,
        OutreachAngle::Collaboration,
    ];

    pub fn key(self) -> &'static str {
        match self {
            OutreachAngle::Connect => "connect",
            OutreachAngle::JobInterest => "job_interest",
            OutreachAngle::ReferralAsk => "referral_ask",
            OutreachAngle::InsightAsk => "insight_ask",
            OutreachAngle::Collaboration => "collaboration",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OutreachAngle::Connect => "just building a professional network, no immediate ask",
            OutreachAngle::JobInterest => "interested in opportunities at their company",
            OutreachAngle::ReferralAsk => "hoping they can refer you to a specific role",
            OutreachAngle::InsightAsk => "asking for career advice or industry insights",
            OutreachAngle::Collaboration => "potential collaboration or knowledge sharing",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.key() == key.trim())
    }
}

impl fmt::Display for OutreachAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A preset angle, or free text typed at the interactive prompt and sent as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AngleChoice {
    Preset(OutreachAngle),
    Custom(String),
}

impl AngleChoice {
    /// Blank input means `connect`; a preset key picks that preset; anything else is custom.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return AngleChoice::Preset(OutreachAngle::default());
        }
        match OutreachAngle::from_key(input) {
            Some(angle) => AngleChoice::Preset(angle),
            None => AngleChoice::Custom(input.to_string()),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            AngleChoice::Preset(angle) => angle.description(),
            AngleChoice::Custom(text) => text,
        }
    }
}

impl From<OutreachAngle> for AngleChoice {
    fn from(angle: OutreachAngle) -> Self {
        AngleChoice::Preset(angle)
    }
}

/// Messages drafted for one person.
#[derive(Debug, Clone, Serialize)]
pub struct OutreachDraft {
    pub person: String,
    pub messages: String,
}

/// `"priya_sharma"` → `"Priya Sharma"`. A letter is capitalised after any
/// non-letter, so `"mary-jane_o'neil"` → `"Mary-Jane O'Neil"`.
pub fn person_name_from_stem(stem: &str) -> String {
    let mut name = String::with_capacity(stem.len());
    let mut after_letter = false;
    for c in stem.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if after_letter {
                name.extend(c.to_lowercase());
            } else {
                name.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            name.push(c);
            after_letter = false;
        }
    }
    name
}

pub fn build_outreach_request(
    profile: &str,
    your_skills: &str,
    angle: impl Into<AngleChoice>,
    your_name: &str,
) -> CompletionRequest {
    let angle = angle.into();
    let prompt = fill_template(
        OUTREACH_PROMPT_TEMPLATE,
        &[
            ("your_skills", your_skills),
            ("angle", angle.description()),
            ("your_name", your_name),
            ("profile", profile),
        ],
    );
    CompletionRequest::with_system(OUTREACH_SYSTEM, prompt, OUTREACH_MAX_TOKENS)
}

pub async fn generate_outreach(
    model: &dyn ChatModel,
    profile: &str,
    your_skills: &str,
    angle: impl Into<AngleChoice>,
    your_name: &str,
) -> Result<String, AppError> {
    model
        .complete(build_outreach_request(profile, your_skills, angle, your_name))
        .await
        .map_err(|e| AppError::Llm(format!("Outreach generation failed: {e}")))
}

/// Drafts outreach for one profile file. The person is named after the file stem.
pub async fn outreach_for_profile(
    model: &dyn ChatModel,
    profile_path: &Path,
    your_skills: &str,
    angle: OutreachAngle,
    your_name: &str,
) -> Result<OutreachDraft, AppError> {
    let person = person_name_from_stem(&file_stem(profile_path));
    let profile = load_text(profile_path)?;
    info!("Generating outreach for {person}");
    let messages = generate_outreach(model, &profile, your_skills, angle, your_name).await?;
    Ok(OutreachDraft { person, messages })
}

/// Drafts outreach for every `*.txt` profile in `folder`, one call at a time.
pub async fn batch_outreach(
    model: &dyn ChatModel,
    folder: &Path,
    your_skills: &str,
    angle: OutreachAngle,
    your_name: &str,
) -> Result<Vec<OutreachDraft>, AppError> {
    let profiles = list_text_files(folder)?;
    info!("Processing {} profiles from {}", profiles.len(), folder.display());

    let mut drafts = Vec::with_capacity(profiles.len());
    for path in profiles {
        drafts.push(outreach_for_profile(model, &path, your_skills, angle, your_name).await?);
    }
    Ok(drafts)
}

/// Interactive profile entry ends on the second consecutive blank line.
pub fn profile_entry_finished(lines: &[String], line: &str) -> bool {
    line.is_empty() && lines.last().is_some_and(|last| last.is_empty())
}

/// `outreach_<stem>.txt` in the working directory.
pub fn default_output_path(profile_path: &Path) -> PathBuf {
    PathBuf::from(format!("outreach_{}.txt", file_stem(profile_path)))
}

/// Saves drafted messages under a `OUTREACH MESSAGES FOR:` header.
pub fn write_outreach(path: &Path, draft: &OutreachDraft) -> Result<(), AppError> {
    let contents = format!(
        "OUTREACH MESSAGES FOR: {}\n{}\n\n{}",
        draft.person,
        "=".repeat(60),
        draft.messages
    );
    std::fs::write(path, contents)?;
    info!("Outreach for {} saved to {}", draft.person, path.display());
    Ok(())
}
