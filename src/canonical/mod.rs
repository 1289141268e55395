//! Canonicalization of extraction results onto the stable score schema.
//!
//! Both the response normalizer and the fallback scorer emit loose
//! name → `"<rating> - <text>"` maps; neither is allowed to reach the caller
//! as-is. [`canonicalize`] folds any such map onto [`CanonicalScoreRecord`]:
//! every required field prefers its extended-name source key, falls back to
//! the legacy-name key, and bottoms out at the literal placeholder, so a
//! complete record is produced for every reachable input.

pub mod types;

#[cfg(test)]
mod tests;

pub use types::{
    CanonicalScoreRecord, DimensionRating, FallbackReason, PLACEHOLDER_RATING, ScoreOrigin,
};

use std::collections::BTreeMap;

use rand::Rng;

/// Feedback sentence attached when the oracle path produced the ratings.
pub const ORACLE_FEEDBACK: &str = "Answer analyzed by the AI evaluation model.";

/// Feedback sentence attached when the deterministic scorer produced them.
pub const FALLBACK_FEEDBACK: &str =
    "Answer analyzed by the built-in scoring system; AI analysis was unavailable.";

/// Canned improvement suggestions used when the oracle produced none.
///
/// The pick is uniform pseudo-random, which makes `improvement` the single
/// non-deterministic output of the pipeline.
pub const CANNED_IMPROVEMENTS: [&str; 5] = [
    "Structure your answer with a brief context, the action you took, and the measurable result.",
    "Add a concrete example from a past project to support your main point.",
    "Name the specific tools or technologies you used and explain why you chose them.",
    "Open with a sentence that answers the question directly before adding supporting detail.",
    "Quantify the impact of your work where possible, even with rough numbers.",
];

/// Maps any extraction or fallback output onto the canonical schema.
///
/// Each required field prefers its extended-name source key, falls back to
/// the legacy-name key and bottoms out at the placeholder; the extended-only
/// fields pass through verbatim. `improvement` is the oracle's suggestion
/// text when that call succeeded; `None` selects one of
/// [`CANNED_IMPROVEMENTS`].
pub fn canonicalize(
    source: &BTreeMap<String, String>,
    origin: &ScoreOrigin,
    improvement: Option<&str>,
) -> CanonicalScoreRecord {
    let pick = |extended: &str, legacy: &str| {
        lookup(source, extended)
            .or_else(|| lookup(source, legacy))
            .unwrap_or(PLACEHOLDER_RATING)
            .to_string()
    };

    let ai_feedback = match origin {
        ScoreOrigin::Oracle => ORACLE_FEEDBACK.to_string(),
        ScoreOrigin::Fallback { .. } => FALLBACK_FEEDBACK.to_string(),
    };

    let improvement = match improvement {
        Some(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => fallback_improvement(),
    };

    CanonicalScoreRecord {
        relevance: pick("Relevance", "Relevance"),
        content_depth: pick("ContentDepth", "ContentDepth"),
        communication_skill: pick("CommunicationSkill", "CommunicationSkill"),
        sentiment: pick("Sentiment", "Sentiment"),
        skill_correct: pick("SkillCorrectness", "skillcorrect"),
        overall_score: pick("OverallScore", "overallscore"),
        technical_relevance: pick("TechnicalRelevance", "TechnicalRelevance"),
        problem_solving: pick("ProblemSolving", "ProblemSolving"),
        industry_awareness: pick("IndustryAwareness", "IndustryAwareness"),
        ai_feedback,
        improvement,
    }
}

/// Picks one canned suggestion pseudo-randomly.
pub fn fallback_improvement() -> String {
    let idx = rand::thread_rng().gen_range(0..CANNED_IMPROVEMENTS.len());
    CANNED_IMPROVEMENTS[idx].to_string()
}

/// Case-insensitive key lookup; blank values count as absent.
fn lookup<'a>(source: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    source
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.trim())
        .filter(|v| !v.is_empty())
}
