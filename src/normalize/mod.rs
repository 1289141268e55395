//! Normalization of raw oracle text into a dimension map.
//!
//! The oracle is asked for a single JSON object but routinely wraps it in
//! prose or markdown fences, or ignores the format entirely. [`extract`]
//! applies tiers in order and stops at the first success:
//!
//! 1. strict: fence-stripped, brace-delimited JSON parse
//! 2. pattern: per-dimension regex scan for `<key>: <rating> - <text>`
//! 3. escalation to the deterministic scorer
//!
//! Tier output is a loose name → `"<rating> - <text>"` map, possibly
//! incomplete; canonicalization happens downstream.

pub mod types;


pub use types::Extraction;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::canonical::FallbackReason;

/// Legacy dimension names the pattern tier scans for.
pub const LEGACY_DIMENSIONS: [&str; 6] = [
    "Relevance",
    "ContentDepth",
    "CommunicationSkill",
    "Sentiment",
    "skillcorrect",
    "overallscore",
];

/// Per-dimension patterns, compiled once at first use.
static DIMENSION_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    LEGACY_DIMENSIONS
        .iter()
        .map(|name| {
            let pattern =
                format!(r#"(?i)\b{name}\b\s*"?\s*:\s*"?\s*([1-5])\s*-\s*([^"\n]+)"#);
            let regex = Regex::new(&pattern).expect("dimension pattern is valid");
            (*name, regex)
        })
        .collect()
});

/// Runs the extraction tiers over raw oracle text.
pub fn extract(raw: &str) -> Extraction {
    if let Some(map) = strict_extract(raw) {
        debug!(keys = map.len(), "Strict extraction succeeded");
        return Extraction::Parsed(map);
    }

    let partial = pattern_extract(raw);
    if !partial.is_empty() {
        debug!(keys = partial.len(), "Pattern extraction recovered a subset");
        return Extraction::PartiallyParsed(partial);
    }

    debug!("No extraction tier recognized the oracle text, escalating");
    Extraction::Escalate {
        reason: FallbackReason::ParseFailure,
    }
}

/// Tier 1: trim, strip markdown fences, take the first-`{` to last-`}`
/// substring and parse it as a JSON object of key → string.
///
/// Number and boolean values are coerced to their string form; nested
/// structures are dropped.
fn strict_extract(raw: &str) -> Option<BTreeMap<String, String>> {
    let text = strip_code_fences(raw.trim());

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }

    let value: serde_json::Value = serde_json::from_str(&text[start..=end]).ok()?;
    let object = value.as_object()?;

    let mut map = BTreeMap::new();
    for (key, value) in object {
        let rendered = match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            _ => continue,
        };
        map.insert(key.clone(), rendered);
    }

    Some(map)
}

/// Tier 2: scan for `<legacy name> : <rating 1-5> - <text>` with text
/// running to the next quote or newline. Any non-empty subset is a result.
fn pattern_extract(raw: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();

    for (name, pattern) in DIMENSION_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(raw) {
            let rating = captures[1].trim();
            let text = captures[2].trim();
            map.insert(name.to_string(), format!("{rating} - {text}"));
        }
    }

    map
}

/// Drops markdown code-fence marker lines (```json, ```), keeping content.
fn strip_code_fences(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}
