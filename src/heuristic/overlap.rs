//! Word-overlap measurement between an answer and the expected answer.

/// Fraction of significant expected-answer words found in the answer.
///
/// Both texts are lowercased and split on whitespace. An expected word is
/// significant when longer than 3 characters, and counts as matched when it
/// appears as a substring of any answer word. Returns `0.0` when either
/// side has nothing significant to compare.
pub fn overlap_ratio(answer: &str, expected_answer: &str) -> f64 {
    let answer = answer.to_lowercase();
    let expected = expected_answer.to_lowercase();

    let answer_words: Vec<&str> = answer.split_whitespace().collect();
    if answer_words.is_empty() {
        return 0.0;
    }

    let expected_words: Vec<&str> = expected
        .split_whitespace()
        .filter(|word| word.len() > 3)
        .collect();
    if expected_words.is_empty() {
        return 0.0;
    }

    let matches = expected_words
        .iter()
        .filter(|expected_word| {
            answer_words
                .iter()
                .any(|answer_word| answer_word.contains(*expected_word))
        })
        .count();

    matches as f64 / expected_words.len() as f64
}

/// Overlap ratio scaled to a 0-100 percentage, rounded.
///
/// This is the lighter-weight score used by the plain submission path; it is
/// a bare percentage, not a justified 1-5 rating. Returns `0` when either
/// text is empty or whitespace.
pub fn match_percentage(answer: &str, expected_answer: &str) -> u8 {
    if answer.trim().is_empty() || expected_answer.trim().is_empty() {
        return 0;
    }

    (overlap_ratio(answer, expected_answer) * 100.0).round() as u8
}
