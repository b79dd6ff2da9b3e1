//! Lenient parsing of the model's answer.
//!
//! The model is asked for a JSON object but nothing guarantees it. Whatever
//! survives is kept; everything else is dropped, and a wholly unusable answer
//! becomes an empty record.

use serde_json::{Map, Value};
use tracing::warn;

use vantage_core::entities::EnrichmentRecord;

const SUMMARY_KEYS: [&str; 1] = ["summary"];
const WHAT_THEY_DO_KEYS: [&str; 2] = ["whatTheyDo", "what_they_do"];
const KEYWORDS_KEYS: [&str; 1] = ["keywords"];
const DERIVED_SIGNALS_KEYS: [&str; 2] = ["derivedSignals", "derived_signals"];

/// Build a record (without sources) from raw model text.
#[must_use]
pub fn parse_model_output(text: &str) -> EnrichmentRecord {
    let body = strip_code_fence(text.trim());
    if body.is_empty() {
        warn!("model returned no text, using empty profile");
        return EnrichmentRecord::default();
    }

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "model output is not JSON, using empty profile");
            return EnrichmentRecord::default();
        }
    };
    let Value::Object(map) = value else {
        warn!("model output is not a JSON object, using empty profile");
        return EnrichmentRecord::default();
    };

    EnrichmentRecord {
        summary: field(&map, &SUMMARY_KEYS).and_then(text_value),
        what_they_do: field(&map, &WHAT_THEY_DO_KEYS).and_then(string_list),
        keywords: field(&map, &KEYWORDS_KEYS)
            .and_then(string_list)
            .map(dedupe_case_insensitive),
        derived_signals: field(&map, &DERIVED_SIGNALS_KEYS).and_then(string_list),
        sources: Vec::new(),
    }
}

/// Remove a surrounding Markdown fence (```` ```json ... ``` ````), including
/// one written on a single line.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.split_once('\n').map_or_else(
        || rest.strip_prefix("json").unwrap_or(rest),
        |(_, body)| body,
    );
    rest.trim_end()
        .strip_suffix("```")
        .unwrap_or(rest)
        .trim()
}

fn field<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| map.get(*k))
}

fn text_value(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Non-blank strings of an array, or a lone string as a one-item list.
/// Anything that leaves nothing behind is treated as absent.
fn string_list(value: &Value) -> Option<Vec<String>> {
    let items: Vec<String> = match value {
        Value::Array(items) => items.iter().filter_map(text_value).collect(),
        Value::String(_) => text_value(value).into_iter().collect(),
        _ => return None,
    };
    (!items.is_empty()).then_some(items)
}

fn dedupe_case_insensitive(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.to_lowercase()))
        .collect()
}
