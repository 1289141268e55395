use std::collections::BTreeMap;

use crate::canonical::FallbackReason;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of running the extraction tiers over raw oracle text.
///
/// Tier outcomes are explicit values threaded to the canonicalizer; no tier
/// signals failure by raising.
pub enum Extraction {
    /// Tier 1: the text contained one valid JSON object.
    Parsed(BTreeMap<String, String>),
    /// Tier 2: JSON failed but per-dimension patterns recovered a subset.
    PartiallyParsed(BTreeMap<String, String>),
    /// Tier 3: nothing recognizable; delegate to the deterministic scorer.
    Escalate {
        /// Reason handed to the fallback scorer.
        reason: FallbackReason,
    },
}

impl Extraction {
    /// The recovered dimension map, if any tier produced one.
    pub fn dimensions(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Extraction::Parsed(map) | Extraction::PartiallyParsed(map) => Some(map),
            Extraction::Escalate { .. } => None,
        }
    }

    /// Returns `true` when extraction gave up entirely.
    pub fn is_escalation(&self) -> bool {
        matches!(self, Extraction::Escalate { .. })
    }

    /// Short tier label for logs.
    pub fn tier(&self) -> &'static str {
        match self {
            Extraction::Parsed(_) => "strict",
            Extraction::PartiallyParsed(_) => "pattern",
            Extraction::Escalate { .. } => "escalate",
        }
    }
}
