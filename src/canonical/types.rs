use serde::{Deserialize, Serialize};

/// Literal filler for any dimension no scoring path produced.
pub const PLACEHOLDER_RATING: &str = "0 - No analysis";

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single evaluation axis: a 1-5 rating plus a free-text justification.
///
/// Serialized on the wire as `"<rating> - <justification>"`.
pub struct DimensionRating {
    /// Rating in `[1, 5]`.
    pub rating: u8,
    /// Free-text justification for the rating.
    pub justification: String,
}

impl DimensionRating {
    /// Creates a rating, clamping the numeric part into `[1, 5]`.
    pub fn new(rating: u8, justification: impl Into<String>) -> Self {
        Self {
            rating: rating.clamp(1, 5),
            justification: justification.into(),
        }
    }

    /// Renders the wire form `"<rating> - <justification>"`.
    pub fn render(&self) -> String {
        format!("{} - {}", self.rating, self.justification)
    }

    /// Parses the wire form back into a rating.
    ///
    /// Returns `None` for the placeholder and for anything that does not
    /// start with a digit followed by `" - "`.
    pub fn parse(raw: &str) -> Option<Self> {
        let (num, rest) = raw.trim().split_once('-')?;
        let rating: u8 = num.trim().parse().ok()?;
        if !(1..=5).contains(&rating) {
            return None;
        }
        Some(Self {
            rating,
            justification: rest.trim().to_string(),
        })
    }
}

impl std::fmt::Display for DimensionRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.rating, self.justification)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// The stable schema all scoring paths converge to.
///
/// Each dimension field holds either a [`DimensionRating`]-shaped string or
/// the literal [`PLACEHOLDER_RATING`]; no field is ever absent.
pub struct CanonicalScoreRecord {
    #[serde(rename = "Relevance")]
    pub relevance: String,
    #[serde(rename = "ContentDepth")]
    pub content_depth: String,
    #[serde(rename = "CommunicationSkill")]
    pub communication_skill: String,
    #[serde(rename = "Sentiment")]
    pub sentiment: String,
    #[serde(rename = "skillcorrect")]
    pub skill_correct: String,
    #[serde(rename = "overallscore")]
    pub overall_score: String,
    #[serde(rename = "TechnicalRelevance")]
    pub technical_relevance: String,
    #[serde(rename = "ProblemSolving")]
    pub problem_solving: String,
    #[serde(rename = "IndustryAwareness")]
    pub industry_awareness: String,
    #[serde(rename = "aiFeedback")]
    pub ai_feedback: String,
    pub improvement: String,
}

impl CanonicalScoreRecord {
    /// Creates the empty placeholder entry used to pad score sequences.
    pub fn placeholder() -> Self {
        Self {
            relevance: PLACEHOLDER_RATING.to_string(),
            content_depth: PLACEHOLDER_RATING.to_string(),
            communication_skill: PLACEHOLDER_RATING.to_string(),
            sentiment: PLACEHOLDER_RATING.to_string(),
            skill_correct: PLACEHOLDER_RATING.to_string(),
            overall_score: PLACEHOLDER_RATING.to_string(),
            technical_relevance: PLACEHOLDER_RATING.to_string(),
            problem_solving: PLACEHOLDER_RATING.to_string(),
            industry_awareness: PLACEHOLDER_RATING.to_string(),
            ai_feedback: String::new(),
            improvement: String::new(),
        }
    }

    /// The six required dimensions with their wire names, in schema order.
    pub fn required_dimensions(&self) -> [(&'static str, &str); 6] {
        [
            ("Relevance", self.relevance.as_str()),
            ("ContentDepth", self.content_depth.as_str()),
            ("CommunicationSkill", self.communication_skill.as_str()),
            ("Sentiment", self.sentiment.as_str()),
            ("skillcorrect", self.skill_correct.as_str()),
            ("overallscore", self.overall_score.as_str()),
        ]
    }

    /// Returns `true` if every required dimension carries a real rating
    /// rather than the placeholder.
    pub fn is_fully_rated(&self) -> bool {
        self.required_dimensions()
            .iter()
            .all(|(_, v)| DimensionRating::parse(v).is_some())
    }
}

impl Default for CanonicalScoreRecord {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Which path produced a canonical record's ratings.
pub enum ScoreOrigin {
    /// The generative model was reached and its output parsed.
    Oracle,
    /// The deterministic scorer produced the ratings.
    Fallback {
        /// Why the oracle path was abandoned.
        reason: FallbackReason,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Why scoring fell through to the deterministic path.
pub enum FallbackReason {
    /// The oracle was unreachable, erroring, or not configured.
    ModelUnavailable,
    /// The oracle replied but no extraction tier recognized the text.
    ParseFailure,
}

impl FallbackReason {
    /// Stable reason string carried through logs and escalations.
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackReason::ModelUnavailable => "model unavailable",
            FallbackReason::ParseFailure => "parse failure",
        }
    }
}

impl ScoreOrigin {
    /// Returns `true` for the deterministic path.
    pub fn is_fallback(&self) -> bool {
        matches!(self, ScoreOrigin::Fallback { .. })
    }

    /// Short status string for logs.
    pub fn debug_status(&self) -> &'static str {
        match self {
            ScoreOrigin::Oracle => "ORACLE",
            ScoreOrigin::Fallback { .. } => "FALLBACK",
        }
    }
}

impl std::fmt::Display for ScoreOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreOrigin::Oracle => write!(f, "ORACLE"),
            ScoreOrigin::Fallback { reason } => write!(f, "FALLBACK ({})", reason.as_str()),
        }
    }
}
