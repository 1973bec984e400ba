//! Interview Prep: a stateful mock interview plus three one-shot coaching modes
//! (code review, behavioral prep, system design).

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agents::prompts::{
    BEHAVIORAL_PROMPT_TEMPLATE, BEHAVIORAL_SYSTEM, CODE_REVIEW_PROMPT_TEMPLATE,
    CODE_REVIEW_SYSTEM, DEFAULT_TOPIC_TEMPLATE, FINAL_ASSESSMENT_REQUEST, HINT_REQUEST,
    MOCK_INTERVIEW_SYSTEM_TEMPLATE, SKIP_ANSWER, START_INTERVIEW, SYSTEM_DESIGN_PROMPT_TEMPLATE,
    SYSTEM_DESIGN_SYSTEM,
};
use crate::errors::AppError;
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{ChatMessage, ChatModel, CompletionRequest};

const OPENING_MAX_TOKENS: u32 = 500;
const ANSWER_MAX_TOKENS: u32 = 600;
const HINT_MAX_TOKENS: u32 = 400;
const FINAL_MAX_TOKENS: u32 = 800;
const CODE_REVIEW_MAX_TOKENS: u32 = 4000;
const BEHAVIORAL_MAX_TOKENS: u32 = 3000;
const SYSTEM_DESIGN_MAX_TOKENS: u32 = 3000;

pub const DEFAULT_ROLE: &str = "QA Director";
pub const DEFAULT_COMPANY: &str = "a top product company";
pub const DEFAULT_SYSTEM_TO_DESIGN: &str = "an e-commerce checkout system";
pub const DEFAULT_CODE_LANGUAGE: &str = "python";

// ────────────────────────────────────────────────────────────────────────────
// Personas
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum InterviewerPersona {
    #[default]
    #[value(name = "principal_engineer")]
    PrincipalEngineer,
    #[value(name = "engineering_manager")]
    EngineeringManager,
    #[value(name = "vp_engineering")]
    VpEngineering,
    #[value(name = "senior_sdet")]
    SeniorSdet,
}

/// Who the interviewer is and what they probe.
#[derive(Debug, Clone, Copy)]
pub struct PersonaProfile {
    pub title: &'static str,
    pub style: &'static str,
    pub focus: &'static str,
}

impl InterviewerPersona {
    pub fn profile(self) -> PersonaProfile {
        match self {
            InterviewerPersona::PrincipalEngineer => PersonaProfile {
                title: "Principal Engineer",
                style: "Asks deep architectural questions. Interrupts if you miss edge cases. Wants to see trade-off thinking.",
                focus: "scalability, design patterns, system design, observability",
            },
            InterviewerPersona::EngineeringManager => PersonaProfile {
                title: "Engineering Manager",
                style: "Focused on people, process, and delivery. Wants STAR-format answers. Probes conflict resolution.",
                focus: "team management, stakeholder communication, metrics, hiring",
            },
            InterviewerPersona::VpEngineering => PersonaProfile {
                title: "VP of Engineering",
                style: "Strategic thinker. Asks about ROI, business impact, organizational design. Doesn't care about syntax.",
                focus: "QA strategy, cost reduction, quality culture, executive communication",
            },
            InterviewerPersona::SeniorSdet => PersonaProfile {
                title: "Senior SDET (Peer Interviewer)",
                style: "Wants code. Will ask you to whiteboard. Will challenge your technical choices.",
                focus: "coding patterns, framework design, CI/CD, test architecture",
            },
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Mock interview session
// ────────────────────────────────────────────────────────────────────────────

/// One line typed by the candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateInput {
    Quit,
    Hint,
    Answer(String),
}

impl CandidateInput {
    /// `quit` and `hint` are commands (case-insensitive); `skip` becomes a canned answer.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "quit" => CandidateInput::Quit,
            "hint" => CandidateInput::Hint,
            "skip" => CandidateInput::Answer(SKIP_ANSWER.to_string()),
            _ => CandidateInput::Answer(line.to_string()),
        }
    }
}

/// What the interviewer said back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterviewReply {
    Interviewer(String),
    Hint(String),
    FinalAssessment(String),
}

/// A running mock interview. The transcript is the whole state; every call
/// resends it so the model keeps context.
#[derive(Debug, Clone)]
pub struct InterviewSession {
    role: String,
    company: String,
    persona: InterviewerPersona,
    history: Vec<ChatMessage>,
    finished: bool,
}

impl InterviewSession {
    pub fn new(role: &str, company: &str, topic: Option<&str>, persona: InterviewerPersona) -> Self {
        let profile = persona.profile();
        let default_topic = fill_template(DEFAULT_TOPIC_TEMPLATE, &[("role", role)]);
        let topic = topic
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(default_topic.as_str());

        let system = fill_template(
            MOCK_INTERVIEW_SYSTEM_TEMPLATE,
            &[
                ("title", profile.title),
                ("company", company),
                ("role", role),
                ("style", profile.style),
                ("focus", profile.focus),
                ("topic", topic),
            ],
        );

        Self {
            role: role.to_string(),
            company: company.to_string(),
            persona,
            history: vec![ChatMessage::system(system)],
            finished: false,
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn persona(&self) -> InterviewerPersona {
        self.persona
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Asks the interviewer to introduce themselves and pose question 1.
    pub async fn open(&mut self, model: &dyn ChatModel) -> Result<String, AppError> {
        let mut messages = self.history.clone();
        messages.push(ChatMessage::user(START_INTERVIEW));

        let opening = self.call(model, messages, OPENING_MAX_TOKENS).await?;

        self.history.push(ChatMessage::user(START_INTERVIEW));
        self.history.push(ChatMessage::assistant(opening.clone()));
        Ok(opening)
    }

    /// Handles one candidate turn.
    ///
    /// Hints never enter the transcript. `Quit` records the input plus a
    /// final-assessment request and ends the session.
    pub async fn respond(
        &mut self,
        model: &dyn ChatModel,
        input: CandidateInput,
    ) -> Result<InterviewReply, AppError> {
        if self.finished {
            return Err(AppError::Validation(
                "The interview has already ended".to_string(),
            ));
        }

        match input {
            CandidateInput::Hint => {
                let mut messages = self.history.clone();
                messages.push(ChatMessage::user(HINT_REQUEST));
                let hint = self.call(model, messages, HINT_MAX_TOKENS).await?;
                Ok(InterviewReply::Hint(hint))
            }
            CandidateInput::Quit => {
                self.history.push(ChatMessage::user("quit"));
                self.history.push(ChatMessage::user(FINAL_ASSESSMENT_REQUEST));
                let assessment = self
                    .call(model, self.history.clone(), FINAL_MAX_TOKENS)
                    .await?;
                self.history.push(ChatMessage::assistant(assessment.clone()));
                self.finished = true;
                Ok(InterviewReply::FinalAssessment(assessment))
            }
            CandidateInput::Answer(answer) => {
                self.history.push(ChatMessage::user(answer));
                let reply = self
                    .call(model, self.history.clone(), ANSWER_MAX_TOKENS)
                    .await?;
                self.history.push(ChatMessage::assistant(reply.clone()));
                Ok(InterviewReply::Interviewer(reply))
            }
        }
    }

    async fn call(
        &self,
        model: &dyn ChatModel,
        messages: Vec<ChatMessage>,
        max_tokens: u32,
    ) -> Result<String, AppError> {
        debug!("Interview turn with {} messages", messages.len());
        model
            .complete(CompletionRequest::new(messages, max_tokens))
            .await
            .map_err(|e| AppError::Llm(format!("Interview call failed: {e}")))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// One-shot coaching modes
// ────────────────────────────────────────────────────────────────────────────

/// Language label for a code file, from its extension.
pub fn language_from_path(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .unwrap_or(DEFAULT_CODE_LANGUAGE)
        .to_string()
}

pub async fn run_code_review(
    model: &dyn ChatModel,
    code: &str,
    language: &str,
) -> Result<String, AppError> {
    let prompt = fill_template(
        CODE_REVIEW_PROMPT_TEMPLATE,
        &[("language", language), ("code", code)],
    );
    model
        .complete(CompletionRequest::with_system(
            CODE_REVIEW_SYSTEM,
            prompt,
            CODE_REVIEW_MAX_TOKENS,
        ))
        .await
        .map_err(|e| AppError::Llm(format!("Code review failed: {e}")))
}

pub async fn run_behavioral_prep(model: &dyn ChatModel, role: &str) -> Result<String, AppError> {
    let prompt = fill_template(BEHAVIORAL_PROMPT_TEMPLATE, &[("role", role)]);
    model
        .complete(CompletionRequest::with_system(
            BEHAVIORAL_SYSTEM,
            prompt,
            BEHAVIORAL_MAX_TOKENS,
        ))
        .await
        .map_err(|e| AppError::Llm(format!("Behavioral prep failed: {e}")))
}

pub async fn run_system_design(
    model: &dyn ChatModel,
    role: &str,
    system_to_design: &str,
) -> Result<String, AppError> {
    let prompt = fill_template(
        SYSTEM_DESIGN_PROMPT_TEMPLATE,
        &[("system", system_to_design), ("role", role)],
    );
    model
        .complete(CompletionRequest::with_system(
            SYSTEM_DESIGN_SYSTEM,
            prompt,
            SYSTEM_DESIGN_MAX_TOKENS,
        ))
        .await
        .map_err(|e| AppError::Llm(format!("System design prep failed: {e}")))
}
