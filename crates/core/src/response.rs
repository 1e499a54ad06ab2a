use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::models::{ClassificationResult, Intent};

static LEADING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```[A-Za-z0-9_+-]*").expect("valid leading fence regex"));
static TRAILING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```$").expect("valid trailing fence regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelOutput {
    Valid(ClassificationResult),
    Unparseable,
    MissingIntent,
    UnknownIntent(String),
}

pub fn clean_model_output(raw: &str) -> String {
    let text = raw.trim();
    let text = LEADING_FENCE.replace(text, "");
    let text = TRAILING_FENCE.replace(&text, "");
    text.trim().to_string()
}

pub fn parse_model_output(raw: &str) -> ModelOutput {
    let cleaned = clean_model_output(raw);

    let value: Value = match serde_json::from_str(&cleaned) {
        Ok(value) => value,
        Err(_) => return ModelOutput::Unparseable,
    };

    let Some(object) = value.as_object() else {
        return ModelOutput::MissingIntent;
    };
    let Some(raw_intent) = object.get("intent").and_then(Value::as_str) else {
        return ModelOutput::MissingIntent;
    };
    let Some(intent) = Intent::parse(raw_intent) else {
        return ModelOutput::UnknownIntent(raw_intent.to_string());
    };

    let reasoning = match object.get("reasoning") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    };

    ModelOutput::Valid(ClassificationResult { intent, reasoning })
}
