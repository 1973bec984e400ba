#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use career_agents::config::Config;
use career_agents::llm_client::{ChatModel, CompletionRequest, LlmError};
use career_agents::state::AppState;

/// A `ChatModel` that replays canned replies in order and records every request.
#[derive(Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, String>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedModel {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(|r| Ok(r.into())).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with an API error carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from(vec![Err(message.to_string())])),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request(&self, index: usize) -> CompletionRequest {
        self.requests()[index].clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request);
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(message)) => Err(LlmError::Api {
                status: 500,
                message,
            }),
            None => Err(LlmError::EmptyContent),
        }
    }
}

pub fn test_config(api_key: Option<&str>) -> Config {
    let mut config = Config::from_lookup(|_| None).unwrap();
    config.xai_api_key = api_key.map(str::to_string);
    config
}

pub fn state_with(model: Arc<ScriptedModel>) -> AppState {
    let model: Arc<dyn ChatModel> = model;
    AppState {
        model: Some(model),
        config: test_config(Some("test-key")),
    }
}

pub fn state_without_key() -> AppState {
    AppState {
        model: None,
        config: test_config(None),
    }
}

pub const GAP_REPLY: &str = r#"Here is your analysis:
```json
{
  "skills_i_have": [
    {"skill": "Selenium", "evidence_in_resume": "Built Selenium grid", "frequency_in_jds": "high"},
    {"skill": "Jenkins", "evidence_in_resume": "CI pipelines", "frequency_in_jds": "medium"}
  ],
  "skills_i_lack": [
    {"skill": "Playwright", "why_it_matters": "Modern UI stack", "urgency": "critical", "learning_effort": "1-2 weeks"}
  ],
  "ats_keywords_to_add": [
    {"keyword": "Shift-Left", "appears_in_n_jds": "1", "where_to_add_in_resume": "Summary"}
  ],
  "title_mismatch": "Current title undersells scope",
  "top_3_priorities": ["Learn Playwright", "Quantify impact", "Rename title"],
  "india_market_insight": "GCCs in Gurugram are hiring QA leaders"
}
```"#;

pub const KEYWORDS_REPLY: &str = r#"{"hard_skills": ["Playwright", "k6"], "methodologies": ["Shift-Left"], "certifications": []}"#;

pub const TAILOR_REPLY: &str = r#"{
  "tailored_resume": "JANE DOE\nQA Director",
  "ats_match_score": "84%",
  "score_reasoning": "Strong automation overlap",
  "bullets_rewritten": [
    {"original": "Managed testers", "rewritten": "Led team of 8 SDETs", "keywords_added": ["SDET"]}
  ],
  "gaps_flagged": ["Kubernetes"],
  "summary_rewrite": "QA leader with 12 years..."
}"#;
