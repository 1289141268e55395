//! Test fixtures for integration tests.

use verdict::{CandidateAggregate, EvaluationRequest, MockCandidateStore, MockOracle, Question};

pub const DEFAULT_KEY: &str = "candidate@example.com";

/// A complete, well-formed scoring reply in the extended naming.
pub const WELL_FORMED_SCORING_JSON: &str = r#"{
    "Relevance": "4 - addresses the question directly",
    "ContentDepth": "3 - covers the basics",
    "CommunicationSkill": "4 - clearly phrased",
    "Sentiment": "3 - neutral and professional",
    "SkillCorrectness": "4 - technically sound",
    "TechnicalRelevance": "4 - current tooling",
    "ProblemSolving": "3 - reasonable approach",
    "IndustryAwareness": "2 - little market context",
    "OverallScore": "4 - a good answer"
}"#;

pub const IMPROVEMENT_TEXT: &str =
    "Ground the answer in one concrete project and name the trade-offs you weighed.";

#[derive(Default)]
pub struct CandidateBuilder {
    email: Option<String>,
    questions: Vec<Question>,
    answers: Vec<String>,
}

impl CandidateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn question(mut self, text: &str, expected: &str) -> Self {
        self.questions.push(Question::new(text, expected));
        self
    }

    pub fn questions(mut self, count: usize) -> Self {
        for i in 0..count {
            self.questions
                .push(Question::new(format!("question {i}"), format!("expected {i}")));
        }
        self
    }

    pub fn answers(mut self, answers: &[&str]) -> Self {
        self.answers = answers.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn build(self) -> CandidateAggregate {
        let mut aggregate = CandidateAggregate::new(
            self.email.unwrap_or_else(|| DEFAULT_KEY.to_string()),
            self.questions,
        );
        aggregate.answers = self.answers;
        aggregate
    }
}

/// Store pre-seeded with one candidate.
pub fn seeded_store(aggregate: CandidateAggregate) -> MockCandidateStore {
    let store = MockCandidateStore::new();
    store.insert(aggregate);
    store
}

/// Oracle scripted for one fully successful scoring+improvement unit.
pub fn scripted_oracle_success() -> MockOracle {
    let oracle = MockOracle::new();
    oracle.enqueue_text(WELL_FORMED_SCORING_JSON);
    oracle.enqueue_text(IMPROVEMENT_TEXT);
    oracle
}

/// Oracle that fails every attempt.
pub fn scripted_oracle_outage(attempts: usize) -> MockOracle {
    let oracle = MockOracle::new();
    for _ in 0..attempts {
        oracle.enqueue_failure("connection refused");
    }
    oracle
}

/// Evaluation request against the default candidate.
pub fn evaluation_request(question_index: usize, answer: &str) -> EvaluationRequest {
    EvaluationRequest {
        candidate_key: DEFAULT_KEY.to_string(),
        question_index,
        question_text: format!("question {question_index}"),
        expected_answer: Some(format!("expected {question_index}")),
        answer_text: answer.to_string(),
    }
}
