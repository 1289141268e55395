use super::{SCORING_DIMENSIONS, improvement_prompt, scoring_prompt};

#[test]
fn test_scoring_prompt_is_deterministic() {
    let a = scoring_prompt("What is ownership?", "Move semantics", "Values have one owner");
    let b = scoring_prompt("What is ownership?", "Move semantics", "Values have one owner");

    assert_eq!(a, b);
}

#[test]
fn test_scoring_prompt_embeds_inputs() {
    let prompt = scoring_prompt("What is REST?", "Stateless HTTP APIs", "It is an API style");

    assert!(prompt.contains("What is REST?"));
    assert!(prompt.contains("Stateless HTTP APIs"));
    assert!(prompt.contains("It is an API style"));
}

#[test]
fn test_scoring_prompt_requests_all_dimensions() {
    let prompt = scoring_prompt("q", "e", "a");

    for dimension in SCORING_DIMENSIONS {
        assert!(prompt.contains(dimension), "missing dimension {dimension}");
    }
    assert!(prompt.contains("OverallScore"));
    assert!(prompt.contains("exactly one JSON object"));
}

#[test]
fn test_scoring_prompt_omits_blank_expected_answer() {
    let prompt = scoring_prompt("q", "   ", "a");

    assert!(!prompt.contains("Expected answer:"));
}

#[test]
fn test_improvement_prompt_is_deterministic() {
    let a = improvement_prompt("Tell me about a failure", "I shipped a bug once");
    let b = improvement_prompt("Tell me about a failure", "I shipped a bug once");

    assert_eq!(a, b);
}

#[test]
fn test_improvement_prompt_embeds_inputs_and_asks_for_sentences() {
    let prompt = improvement_prompt("Tell me about a failure", "I shipped a bug once");

    assert!(prompt.contains("Tell me about a failure"));
    assert!(prompt.contains("I shipped a bug once"));
    assert!(prompt.contains("2-3 actionable sentences"));
}

#[test]
fn test_prompts_are_independent() {
    let scoring = scoring_prompt("q", "e", "a");
    let improvement = improvement_prompt("q", "a");

    assert_ne!(scoring, improvement);
    assert!(!improvement.contains("JSON"));
}
