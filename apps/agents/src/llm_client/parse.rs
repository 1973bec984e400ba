//! Lenient decoding of JSON replies.
//!
//! Models are told to answer with bare JSON but often wrap it in markdown fences
//! or chatter around it. Decoding order: raw text, fence-stripped text, then the
//! widest `{...}` span found anywhere in the reply.

use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::llm_client::LlmError;

fn json_object_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("static regex is valid"))
}

/// Decodes `raw` as `T`, falling back to fence stripping and object extraction.
///
/// Returns `LlmError::NoJsonObject` when the reply contains no `{...}` span at all,
/// and `LlmError::Parse` when a span was found but does not decode as `T`.
pub fn parse_json_reply<T: DeserializeOwned>(raw: &str) -> Result<T, LlmError> {
    let trimmed = raw.trim();

    if let Ok(value) = serde_json::from_str(trimmed) {
        return Ok(value);
    }

    let unfenced = strip_json_fences(trimmed);
    if unfenced != trimmed {
        if let Ok(value) = serde_json::from_str(unfenced) {
            return Ok(value);
        }
    }

    let object = extract_json_object(trimmed).ok_or(LlmError::NoJsonObject)?;
    serde_json::from_str(object).map_err(LlmError::Parse)
}

/// The span from the first `{` to the last `}`, if any.
pub fn extract_json_object(text: &str) -> Option<&str> {
    json_object_pattern().find(text).map(|m| m.as_str())
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
