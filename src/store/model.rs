use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::canonical::CanonicalScoreRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One interview question with the answer its author expects.
pub struct Question {
    pub text: String,
    #[serde(rename = "expectedAnswer", default)]
    pub expected_answer: String,
}

impl Question {
    pub fn new(text: impl Into<String>, expected_answer: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            expected_answer: expected_answer.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Progress of a candidate through their interview.
pub enum CandidateStatus {
    Pending,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// The owning record loaded and saved as a unit.
///
/// A candidate belongs to exactly one interview, an interview to exactly
/// one employer account; the chain is ownership, not aliasing, so the
/// questions travel denormalized inside the aggregate. `answers` and
/// `scores` are index-aligned by question index and right-padded on write,
/// never truncated.
pub struct CandidateAggregate {
    pub id: Uuid,
    /// Identifying key the surrounding service loads candidates by.
    pub email: String,
    #[serde(rename = "interviewId")]
    pub interview_id: Uuid,
    #[serde(rename = "hrId")]
    pub hr_id: Uuid,
    pub questions: Vec<Question>,
    pub answers: Vec<String>,
    pub scores: Vec<CanonicalScoreRecord>,
    pub status: CandidateStatus,
    #[serde(rename = "completedAt")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl CandidateAggregate {
    /// Creates a pending aggregate with fresh identities and empty
    /// answer/score sequences.
    pub fn new(email: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            interview_id: Uuid::new_v4(),
            hr_id: Uuid::new_v4(),
            questions,
            answers: Vec::new(),
            scores: Vec::new(),
            status: CandidateStatus::Pending,
            completed_at: None,
        }
    }

    /// Returns `true` when every question index holds a non-empty trimmed
    /// answer.
    pub fn answered_all(&self) -> bool {
        !self.questions.is_empty()
            && (0..self.questions.len()).all(|index| {
                self.answers
                    .get(index)
                    .map(|answer| !answer.trim().is_empty())
                    .unwrap_or(false)
            })
    }

    /// Returns `true` once the completion rule has fired.
    pub fn is_completed(&self) -> bool {
        self.status == CandidateStatus::Completed
    }
}
