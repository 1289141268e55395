//! Deterministic fallback scorer.
//!
//! Produces the six legacy-named dimension ratings without touching the
//! oracle, so an evaluation always completes even when the model is
//! unreachable or its output unparsable. Same `(answer, expected)` input
//! always yields identical ratings and justification text; the only
//! non-deterministic output of the pipeline is the canned improvement pick
//! in the canonicalizer.

pub mod overlap;
pub mod tables;


pub use overlap::{match_percentage, overlap_ratio};
pub use tables::TECHNICAL_TERMS;

use std::collections::BTreeMap;

use tracing::debug;

use crate::canonical::DimensionRating;
use tables::{
    Category, EMPTY_COMMUNICATION, EMPTY_DEPTH, EMPTY_OVERALL, EMPTY_RELEVANCE, EMPTY_SENTIMENT,
    EMPTY_SKILL, justification,
};

/// Base value the variable dimensions start from for a non-empty answer.
const BASE_SCORE: i32 = 2;
/// Fixed sentiment assigned to every non-empty answer.
const NEUTRAL_SENTIMENT: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
/// The six justified ratings produced by the deterministic scorer.
pub struct HeuristicScores {
    pub relevance: DimensionRating,
    pub depth: DimensionRating,
    pub communication: DimensionRating,
    pub sentiment: DimensionRating,
    pub skill: DimensionRating,
    pub overall: DimensionRating,
    /// Whitespace-separated word count of the scored answer.
    pub word_count: usize,
}

impl HeuristicScores {
    /// Renders the scores as the legacy-named dimension map the
    /// canonicalizer consumes.
    pub fn into_dimension_map(self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("Relevance".to_string(), self.relevance.render()),
            ("ContentDepth".to_string(), self.depth.render()),
            ("CommunicationSkill".to_string(), self.communication.render()),
            ("Sentiment".to_string(), self.sentiment.render()),
            ("skillcorrect".to_string(), self.skill.render()),
            ("overallscore".to_string(), self.overall.render()),
        ])
    }

    fn empty_answer() -> Self {
        Self {
            relevance: DimensionRating::new(1, EMPTY_RELEVANCE),
            depth: DimensionRating::new(1, EMPTY_DEPTH),
            communication: DimensionRating::new(1, EMPTY_COMMUNICATION),
            sentiment: DimensionRating::new(2, EMPTY_SENTIMENT),
            skill: DimensionRating::new(1, EMPTY_SKILL),
            overall: DimensionRating::new(1, EMPTY_OVERALL),
            word_count: 0,
        }
    }
}

/// Scores an answer without the oracle.
///
/// Total over all inputs: empty and whitespace-only answers get the fixed
/// minimal ratings, everything else starts from the base score and collects
/// length, word-count, keyword-overlap and technical-term boosts before
/// clamping to `[1, 5]`.
pub fn score_answer(answer: &str, expected_answer: &str) -> HeuristicScores {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        debug!("Empty answer, returning minimal heuristic scores");
        return HeuristicScores::empty_answer();
    }

    let word_count = trimmed.split_whitespace().count();
    let char_count = trimmed.chars().count();

    let mut relevance = BASE_SCORE;
    let mut depth = BASE_SCORE;
    let mut communication = BASE_SCORE;
    let mut skill = BASE_SCORE;

    if char_count > 100 {
        depth += 1;
    }
    if char_count > 200 {
        depth += 1;
    }

    if word_count > 20 {
        communication += 1;
    }

    let ratio = overlap_ratio(answer, expected_answer);
    if ratio > 0.3 {
        relevance += 1;
    }
    if ratio > 0.5 {
        relevance += 1;
        skill += 1;
    }

    if contains_technical_term(answer) {
        skill += 1;
        depth += 1;
    }

    let relevance = clamp_score(relevance);
    let depth = clamp_score(depth);
    let communication = clamp_score(communication);
    let skill = clamp_score(skill);

    let sum = u32::from(relevance) + u32::from(depth) + u32::from(communication) + u32::from(skill);
    let overall = (f64::from(sum) / 4.0).round() as u8;

    debug!(
        word_count,
        char_count,
        overlap_ratio = ratio,
        relevance,
        depth,
        communication,
        skill,
        overall,
        "Heuristic scoring complete"
    );

    HeuristicScores {
        relevance: rated(Category::Relevance, relevance, word_count),
        depth: rated(Category::Depth, depth, word_count),
        communication: rated(Category::Communication, communication, word_count),
        sentiment: rated(Category::Sentiment, NEUTRAL_SENTIMENT, word_count),
        skill: rated(Category::Skill, skill, word_count),
        overall: rated(Category::Overall, overall, word_count),
        word_count,
    }
}

/// Returns `true` if the answer mentions any term of the fixed technical
/// vocabulary, case-insensitively.
pub fn contains_technical_term(answer: &str) -> bool {
    let lowered = answer.to_lowercase();
    TECHNICAL_TERMS.iter().any(|term| lowered.contains(term))
}

fn clamp_score(score: i32) -> u8 {
    score.clamp(1, 5) as u8
}

fn rated(category: Category, score: u8, word_count: usize) -> DimensionRating {
    DimensionRating::new(score, justification(category, score, word_count))
}
