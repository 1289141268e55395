use serde::{Deserialize, Serialize};

use crate::canonical::{CanonicalScoreRecord, ScoreOrigin};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One answer evaluation as submitted by the surrounding service layer.
pub struct EvaluationRequest {
    #[serde(rename = "candidateKey")]
    pub candidate_key: String,
    #[serde(rename = "questionIndex")]
    pub question_index: usize,
    #[serde(rename = "questionText")]
    pub question_text: String,
    #[serde(rename = "expectedAnswer", default)]
    pub expected_answer: Option<String>,
    #[serde(rename = "answerText")]
    pub answer_text: String,
}

impl EvaluationRequest {
    /// The expected answer, blank when none was provided.
    pub fn expected_answer(&self) -> &str {
        self.expected_answer.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Result handed back to the surrounding service layer.
pub struct EvaluationResponse {
    #[serde(rename = "canonicalScoreRecord")]
    pub record: CanonicalScoreRecord,
    pub improvement: String,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
    /// Which path produced the ratings. Informational, not serialized.
    #[serde(skip)]
    pub origin: ScoreOrigin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Wire shape of a failed evaluation.
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
    /// Internals, present only in diagnostic mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
