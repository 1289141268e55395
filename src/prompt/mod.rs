//! Prompt templating for the evaluation requests sent to the oracle.
//!
//! Pure string construction: same inputs always produce the same prompt
//! text, no I/O and no hidden state. Retry policy lives in the invoker.

#[cfg(test)]
mod tests;

/// Dimensions the scoring prompt requests, in the order they are listed.
pub const SCORING_DIMENSIONS: [&str; 8] = [
    "Relevance",
    "ContentDepth",
    "CommunicationSkill",
    "Sentiment",
    "SkillCorrectness",
    "TechnicalRelevance",
    "ProblemSolving",
    "IndustryAwareness",
];

/// Builds the scoring prompt: exactly one JSON object, eight named
/// dimensions plus `OverallScore`, every value shaped `"<1-5> - <why>"`.
pub fn scoring_prompt(question: &str, expected_answer: &str, answer: &str) -> String {
    let mut prompt = String::from(
        "You are evaluating a candidate's answer to an interview question. \
         Respond with exactly one JSON object and nothing else.\n\n",
    );

    prompt.push_str(&format!("Question: {}\n", question.trim()));
    if !expected_answer.trim().is_empty() {
        prompt.push_str(&format!("Expected answer: {}\n", expected_answer.trim()));
    }
    prompt.push_str(&format!("Candidate answer: {}\n\n", answer.trim()));

    prompt.push_str("The JSON object must contain these keys and no others:\n");
    for dimension in SCORING_DIMENSIONS {
        prompt.push_str(&format!("  \"{}\"\n", dimension));
    }
    prompt.push_str("  \"OverallScore\"\n\n");

    prompt.push_str(
        "Each value must be a string of the form \"<rating> - <justification>\" \
         where <rating> is an integer from 1 to 5 and <justification> is one \
         short sentence. Do not wrap the object in markdown fences.",
    );

    prompt
}

/// Builds the improvement-suggestion prompt: 2-3 actionable sentences.
pub fn improvement_prompt(question: &str, answer: &str) -> String {
    format!(
        "A candidate answered an interview question. Suggest how the answer \
         could be improved.\n\nQuestion: {}\nCandidate answer: {}\n\nReply \
         with 2-3 actionable sentences addressed to the candidate. Plain \
         text only, no lists and no preamble.",
        question.trim(),
        answer.trim()
    )
}
