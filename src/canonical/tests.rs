use std::collections::BTreeMap;

use super::types::{
    CanonicalScoreRecord, DimensionRating, FallbackReason, PLACEHOLDER_RATING, ScoreOrigin,
};
use super::{CANNED_IMPROVEMENTS, FALLBACK_FEEDBACK, ORACLE_FEEDBACK, canonicalize};

fn source_of(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_dimension_rating_render_roundtrip() {
    let rating = DimensionRating::new(4, "solid structure");
    let rendered = rating.render();

    assert_eq!(rendered, "4 - solid structure");
    assert_eq!(DimensionRating::parse(&rendered), Some(rating));
}

#[test]
fn test_dimension_rating_clamps_on_construction() {
    assert_eq!(DimensionRating::new(0, "x").rating, 1);
    assert_eq!(DimensionRating::new(9, "x").rating, 5);
}

#[test]
fn test_dimension_rating_rejects_placeholder() {
    assert_eq!(DimensionRating::parse(PLACEHOLDER_RATING), None);
}

#[test]
fn test_dimension_rating_rejects_garbage() {
    assert_eq!(DimensionRating::parse("excellent"), None);
    assert_eq!(DimensionRating::parse("7 - out of range"), None);
    assert_eq!(DimensionRating::parse(""), None);
}

#[test]
fn test_dimension_rating_parse_tolerates_whitespace() {
    let parsed = DimensionRating::parse("  3 -  needs detail ").unwrap();

    assert_eq!(parsed.rating, 3);
    assert_eq!(parsed.justification, "needs detail");
}

#[test]
fn test_placeholder_record_shape() {
    let record = CanonicalScoreRecord::placeholder();

    for (_, value) in record.required_dimensions() {
        assert_eq!(value, PLACEHOLDER_RATING);
    }
    assert_eq!(record.technical_relevance, PLACEHOLDER_RATING);
    assert!(record.ai_feedback.is_empty());
    assert!(record.improvement.is_empty());
    assert!(!record.is_fully_rated());
}

#[test]
fn test_canonicalize_empty_source_fills_placeholders() {
    let record = canonicalize(&BTreeMap::new(), &ScoreOrigin::Oracle, Some("tighten it"));

    for (_, value) in record.required_dimensions() {
        assert_eq!(value, PLACEHOLDER_RATING);
    }
    assert_eq!(record.problem_solving, PLACEHOLDER_RATING);
    assert_eq!(record.improvement, "tighten it");
}

#[test]
fn test_canonicalize_prefers_extended_names() {
    let source = source_of(&[
        ("SkillCorrectness", "4 - extended skill"),
        ("skillcorrect", "2 - legacy skill"),
        ("OverallScore", "5 - extended overall"),
        ("overallscore", "1 - legacy overall"),
    ]);

    let record = canonicalize(&source, &ScoreOrigin::Oracle, None);

    assert_eq!(record.skill_correct, "4 - extended skill");
    assert_eq!(record.overall_score, "5 - extended overall");
}

#[test]
fn test_canonicalize_falls_back_to_legacy_names() {
    let source = source_of(&[
        ("skillcorrect", "2 - legacy skill"),
        ("overallscore", "3 - legacy overall"),
        ("Relevance", "4 - on point"),
    ]);

    let record = canonicalize(&source, &ScoreOrigin::Oracle, None);

    assert_eq!(record.skill_correct, "2 - legacy skill");
    assert_eq!(record.overall_score, "3 - legacy overall");
    assert_eq!(record.relevance, "4 - on point");
}

#[test]
fn test_canonicalize_key_lookup_is_case_insensitive() {
    let source = source_of(&[("relevance", "3 - lower cased"), ("SENTIMENT", "4 - shouty")]);

    let record = canonicalize(&source, &ScoreOrigin::Oracle, None);

    assert_eq!(record.relevance, "3 - lower cased");
    assert_eq!(record.sentiment, "4 - shouty");
}

#[test]
fn test_canonicalize_extended_only_passthrough() {
    let source = source_of(&[
        ("TechnicalRelevance", "5 - modern stack"),
        ("ProblemSolving", "4 - methodical"),
    ]);

    let record = canonicalize(&source, &ScoreOrigin::Oracle, None);

    assert_eq!(record.technical_relevance, "5 - modern stack");
    assert_eq!(record.problem_solving, "4 - methodical");
    assert_eq!(record.industry_awareness, PLACEHOLDER_RATING);
}

#[test]
fn test_canonicalize_blank_values_count_as_missing() {
    let source = source_of(&[("Relevance", "   ")]);

    let record = canonicalize(&source, &ScoreOrigin::Oracle, None);

    assert_eq!(record.relevance, PLACEHOLDER_RATING);
}

#[test]
fn test_feedback_sentence_tracks_origin() {
    let oracle = canonicalize(&BTreeMap::new(), &ScoreOrigin::Oracle, None);
    let fallback = canonicalize(
        &BTreeMap::new(),
        &ScoreOrigin::Fallback {
            reason: FallbackReason::ModelUnavailable,
        },
        None,
    );

    assert_eq!(oracle.ai_feedback, ORACLE_FEEDBACK);
    assert_eq!(fallback.ai_feedback, FALLBACK_FEEDBACK);
}

#[test]
fn test_missing_improvement_uses_canned_suggestion() {
    let record = canonicalize(&BTreeMap::new(), &ScoreOrigin::Oracle, None);

    assert!(CANNED_IMPROVEMENTS.contains(&record.improvement.as_str()));
}

#[test]
fn test_blank_improvement_uses_canned_suggestion() {
    let record = canonicalize(&BTreeMap::new(), &ScoreOrigin::Oracle, Some("   "));

    assert!(CANNED_IMPROVEMENTS.contains(&record.improvement.as_str()));
}

#[test]
fn test_canonicalize_is_total_for_arbitrary_sources() {
    let source = source_of(&[
        ("Relevance", "4 - good"),
        ("unrelated key", "noise"),
        ("ContentDepth", "3 - fine"),
        ("CommunicationSkill", "2 - short"),
        ("Sentiment", "3 - neutral"),
        ("SkillCorrectness", "4 - right"),
        ("OverallScore", "3 - steady"),
    ]);

    let record = canonicalize(&source, &ScoreOrigin::Oracle, Some("more detail"));

    for (name, value) in record.required_dimensions() {
        assert!(
            DimensionRating::parse(value).is_some(),
            "{name} should carry a real rating, got '{value}'"
        );
    }
    assert!(record.is_fully_rated());
}

#[test]
fn test_serialized_field_names_are_stable() {
    let mut record = CanonicalScoreRecord::placeholder();
    record.relevance = "4 - good".to_string();
    record.ai_feedback = ORACLE_FEEDBACK.to_string();

    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["Relevance"], "4 - good");
    assert!(json.get("skillcorrect").is_some());
    assert!(json.get("overallscore").is_some());
    assert!(json.get("aiFeedback").is_some());
    assert!(json.get("TechnicalRelevance").is_some());
    assert!(json.get("improvement").is_some());
}

#[test]
fn test_score_origin_helpers() {
    let fallback = ScoreOrigin::Fallback {
        reason: FallbackReason::ParseFailure,
    };

    assert!(fallback.is_fallback());
    assert!(!ScoreOrigin::Oracle.is_fallback());
    assert_eq!(fallback.debug_status(), "FALLBACK");
    assert_eq!(ScoreOrigin::Oracle.debug_status(), "ORACLE");
    assert_eq!(format!("{}", fallback), "FALLBACK (parse failure)");
}

#[test]
fn test_fallback_reason_strings() {
    assert_eq!(FallbackReason::ModelUnavailable.as_str(), "model unavailable");
    assert_eq!(FallbackReason::ParseFailure.as_str(), "parse failure");
}
