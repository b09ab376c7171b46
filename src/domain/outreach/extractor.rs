//! Sequence extraction from raw model replies.
//!
//! The model is asked to answer sequence requests with a JSON object of the
//! shape `{"title": ..., "steps": [{"Step 1": {"Content": ..., "Strategy": ...}}, ...]}`
//! but it frequently wraps the object in prose. Extraction is best effort:
//! anything that does not yield an object with both top-level keys is handed
//! back unchanged as a conversational message.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reply shown to the user in place of the raw text when a sequence was found.
pub const SEQUENCE_CONFIRMATION: &str =
    "I've created an outreach sequence for you. You can review and edit it in the workspace.";

/// Greedy outer-brace match: first `{` through last `}`.
///
/// This is not a balanced-brace scan. Trailing prose containing a stray `}`
/// widens the match and the parse then fails, which degrades to a message.
static OUTER_BRACES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[\s\S]*\}").expect("outer brace pattern is valid"));

/// How a model reply was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyKind {
    Message,
    Sequence,
}

/// A parsed sequence object.
///
/// Only the presence of `title` and `steps` is guaranteed. The nested step
/// shape is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceDraft(Map<String, Value>);

impl SequenceDraft {
    /// Accepts the object if it carries both required keys.
    pub fn from_object(object: Map<String, Value>) -> Option<Self> {
        if object.contains_key("title") && object.contains_key("steps") {
            Some(Self(object))
        } else {
            None
        }
    }

    /// The title, when the model supplied it as a string.
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    /// The raw `steps` value.
    pub fn steps(&self) -> &Value {
        // from_object guarantees presence
        self.0.get("steps").unwrap_or(&Value::Null)
    }

    /// Borrow the full parsed object.
    pub fn as_object(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Convert into a plain JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Result of classifying a model reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedReply {
    /// Plain conversational text, unmodified.
    Message(String),
    /// A structured sequence plus the confirmation text to display.
    Sequence {
        confirmation: String,
        sequence: SequenceDraft,
    },
}

impl ExtractedReply {
    pub fn kind(&self) -> ReplyKind {
        match self {
            ExtractedReply::Message(_) => ReplyKind::Message,
            ExtractedReply::Sequence { .. } => ReplyKind::Sequence,
        }
    }

    /// Text to show in the chat transcript.
    pub fn response_text(&self) -> &str {
        match self {
            ExtractedReply::Message(text) => text,
            ExtractedReply::Sequence { confirmation, .. } => confirmation,
        }
    }

    pub fn sequence(&self) -> Option<&SequenceDraft> {
        match self {
            ExtractedReply::Message(_) => None,
            ExtractedReply::Sequence { sequence, .. } => Some(sequence),
        }
    }

    pub fn is_sequence(&self) -> bool {
        self.kind() == ReplyKind::Sequence
    }
}

/// Classify a raw model reply as a sequence or a plain message.
///
/// Never fails. Parsing is attempted only when the reply mentions `json`
/// (any case) or contains a `{` anywhere.
pub fn extract_sequence(raw: &str) -> ExtractedReply {
    match try_extract(raw) {
        Some(sequence) => ExtractedReply::Sequence {
            confirmation: SEQUENCE_CONFIRMATION.to_string(),
            sequence,
        },
        None => ExtractedReply::Message(raw.to_string()),
    }
}

fn passes_gate(raw: &str) -> bool {
    raw.to_lowercase().contains("json") || raw.contains('{')
}

fn try_extract(raw: &str) -> Option<SequenceDraft> {
    if !passes_gate(raw) {
        return None;
    }

    let candidate = OUTER_BRACES.find(raw)?.as_str();

    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(object)) => SequenceDraft::from_object(object),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(error = %e, "model reply looked structured but did not parse");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn extracts_sequence_embedded_in_prose() {
        let raw = r#"Here is your plan: {"title":"Intro","steps":[{"Step 1":{"Content":"Hi","Strategy":"Open"}}]} Let me know!"#;

        let reply = extract_sequence(raw);

        assert_eq!(reply.kind(), ReplyKind::Sequence);
        let sequence = reply.sequence().unwrap();
        assert_eq!(sequence.title(), Some("Intro"));
        assert_eq!(
            sequence.steps(),
            &json!([{"Step 1": {"Content": "Hi", "Strategy": "Open"}}])
        );
        assert_eq!(reply.response_text(), SEQUENCE_CONFIRMATION);
    }

    #[test]
    fn plain_chat_passes_through_verbatim() {
        let raw = "Sounds good, let's proceed.";
        assert_eq!(extract_sequence(raw), ExtractedReply::Message(raw.to_string()));
    }

    #[test]
    fn bare_object_without_keyword_is_extracted() {
        let raw = "  {\"title\": \"Warm intro\", \"steps\": []}\n";
        let reply = extract_sequence(raw);
        assert!(reply.is_sequence());
        assert_eq!(reply.sequence().unwrap().title(), Some("Warm intro"));
    }

    #[test]
    fn object_behind_prose_without_keyword_is_extracted() {
        let raw = r#"Sure! {"title":"Intro","steps":[]} Anything else?"#;
        let reply = extract_sequence(raw);
        assert!(reply.is_sequence());
        assert_eq!(reply.sequence().unwrap().steps(), &json!([]));
    }

    #[test]
    fn keyword_without_braces_is_a_message() {
        let raw = "I can send that as JSON if you like.";
        assert_eq!(extract_sequence(raw), ExtractedReply::Message(raw.to_string()));
    }

    #[test]
    fn keyword_is_case_insensitive() {
        let raw = "Your JSON:\n```\n{\"title\": \"T\", \"steps\": {}}\n```";
        assert!(extract_sequence(raw).is_sequence());
    }

    #[test]
    fn missing_steps_degrades_to_message() {
        let raw = r#"json {"title":"Only a title"}"#;
        assert_eq!(extract_sequence(raw), ExtractedReply::Message(raw.to_string()));
    }

    #[test]
    fn missing_title_degrades_to_message() {
        let raw = r#"{"steps":[{"Step 1":{"Content":"Hi","Strategy":"Open"}}]}"#;
        assert_eq!(extract_sequence(raw), ExtractedReply::Message(raw.to_string()));
    }

    #[test]
    fn malformed_json_degrades_to_message() {
        let raw = "here is the json: {title: Intro, steps: []}";
        assert_eq!(extract_sequence(raw), ExtractedReply::Message(raw.to_string()));
    }

    #[test]
    fn stray_trailing_brace_widens_match_and_degrades() {
        let raw = r#"json {"title":"Intro","steps":[]} and a stray } here"#;
        assert_eq!(extract_sequence(raw), ExtractedReply::Message(raw.to_string()));
    }

    #[test]
    fn nested_step_shape_is_not_validated() {
        let raw = r#"{"title": 7, "steps": "whatever"}"#;
        let reply = extract_sequence(raw);
        assert!(reply.is_sequence());
        assert_eq!(reply.sequence().unwrap().title(), None);
        assert_eq!(reply.sequence().unwrap().steps(), &json!("whatever"));
    }

    #[test]
    fn reply_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ReplyKind::Sequence).unwrap(), "\"sequence\"");
        assert_eq!(serde_json::to_string(&ReplyKind::Message).unwrap(), "\"message\"");
    }

    fn no_keyword_no_brace() -> impl Strategy<Value = String> {
        "[^{]{0,200}".prop_filter("must not mention json", |s| {
            !s.to_lowercase().contains("json")
        })
    }

    proptest! {
        #[test]
        fn text_without_brace_or_keyword_is_always_a_message(raw in no_keyword_no_brace()) {
            prop_assert_eq!(extract_sequence(&raw), ExtractedReply::Message(raw.clone()));
        }

        #[test]
        fn embedded_object_with_required_keys_round_trips(
            title in ".{0,40}",
            step_content in ".{0,40}",
            suffix in "[^{}]{0,60}",
        ) {
            let object = json!({
                "title": title,
                "steps": [{"Step 1": {"Content": step_content, "Strategy": "Open"}}],
            });
            let raw = format!("Here is the json you asked for: {}{}", object, suffix);

            let reply = extract_sequence(&raw);

            prop_assert_eq!(reply.kind(), ReplyKind::Sequence);
            prop_assert_eq!(reply.sequence().unwrap().clone().into_value(), object);
        }

        #[test]
        fn unparsable_candidate_returns_original_text(body in "[^{}]{0,80}") {
            let raw = format!("json {{ {} ", body);
            prop_assert_eq!(extract_sequence(&raw), ExtractedReply::Message(raw.clone()));
        }
    }
}
