//! Structured Extractor: pulls a `ClauseAnalysisRecord` out of free-form oracle text.
//!
//! The oracle tends to wrap its JSON in prose or code fences. Candidate spans are
//! tried per fragment, in order:
//! 1. first `{` to last `}` of the fragment
//! 2. every balanced top-level `{...}` block, left to right
//!
//! The first span that parses AND validates wins. Failures stay distinct:
//! no span at all, spans that never parse, spans that parse but fail the schema.

use serde_json::Value;
use tracing::debug;

use crate::analysis::models::ClauseAnalysisRecord;
use crate::analysis::AnalysisError;
use crate::llm_client::RawCompletion;

pub fn extract(raw: &RawCompletion) -> Result<ClauseAnalysisRecord, AnalysisError> {
    let mut saw_span = false;
    let mut parse_failure: Option<String> = None;
    let mut schema_failure: Option<String> = None;

    for fragment in raw.fragments() {
        for span in candidate_spans(fragment) {
            saw_span = true;

            let value: Value = match serde_json::from_str(span) {
                Ok(v) => v,
                Err(e) => {
                    debug!("Candidate span is not valid JSON: {e}");
                    parse_failure.get_or_insert_with(|| e.to_string());
                    continue;
                }
            };

            match serde_json::from_value::<ClauseAnalysisRecord>(value) {
                Ok(record) => return Ok(record),
                Err(e) => {
                    debug!("Candidate span failed schema validation: {e}");
                    schema_failure.get_or_insert_with(|| e.to_string());
                }
            }
        }
    }

    if !saw_span {
        return Err(AnalysisError::NoJsonFound);
    }
    match (schema_failure, parse_failure) {
        (Some(reason), _) => Err(AnalysisError::Schema(reason)),
        (None, Some(reason)) => Err(AnalysisError::MalformedJson(reason)),
        (None, None) => Err(AnalysisError::NoJsonFound),
    }
}

/// Brace-delimited spans of one fragment, greedy span first, without duplicates.
fn candidate_spans(text: &str) -> Vec<&str> {
    let mut spans = Vec::new();

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if start < end {
            spans.push(&text[start..=end]);
        }
    }

    for block in balanced_blocks(text) {
        if !spans.contains(&block) {
            spans.push(block);
        }
    }

    spans
}

/// Top-level `{...}` blocks. Braces inside JSON strings are ignored.
/// An opening brace that is never closed is skipped and the scan resumes
/// right after it.
fn balanced_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if depth > 0 && in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '{' => {
                if depth == 0 {
                    start = i;
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    blocks.push(&text[start..=i]);
                }
            }
            '"' if depth > 0 => in_string = true,
            _ => {}
        }
    }

    if depth > 0 {
        blocks.extend(balanced_blocks(&text[start + 1..]));
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD_JSON: &str = r#"{
        "clauseIdentifier": "Clause 6 - Remedies",
        "originalClauseText": "6. Remedies. The injured Party is entitled to seek injunctive relief.",
        "analysis": {
            "clauseCategory": "Remedies",
            "summary": "Right to injunctive relief.",
            "risksDisclosingParty": "No entitlement to damages.",
            "risksReceivingParty": "Not applicable",
            "improvementsDisclosingParty": "Add a broad entitlement to compensation.",
            "improvementsReceivingParty": "Not applicable",
            "suggestedWording": "6. Remedies. Upon breach the Disclosing Party shall be entitled to compensation {including costs}.",
            "commentsOnChanges": "No changes submitted."
        }
    }"#;

    #[test]
    fn test_no_braces_is_no_json_found() {
        let raw = RawCompletion::from("I'm sorry, I cannot analyze this clause.");
        assert!(matches!(extract(&raw), Err(AnalysisError::NoJsonFound)));
    }

    #[test]
    fn test_reversed_braces_is_no_json_found() {
        let raw = RawCompletion::from("} nothing here {");
        assert!(matches!(extract(&raw), Err(AnalysisError::NoJsonFound)));
    }

    #[test]
    fn test_empty_completion_is_no_json_found() {
        let raw = RawCompletion::new(vec![]);
        assert!(matches!(extract(&raw), Err(AnalysisError::NoJsonFound)));
    }

    #[test]
    fn test_missing_fields_is_schema_error() {
        let raw = RawCompletion::from(r#"Here you go: {"clauseCategory":"X"}"#);
        assert!(matches!(extract(&raw), Err(AnalysisError::Schema(_))));
    }

    #[test]
    fn test_wrong_typed_field_is_schema_error() {
        let broken = RECORD_JSON.replace(
            r#""summary": "Right to injunctive relief.""#,
            r#""summary": 42"#,
        );
        let raw = RawCompletion::from(broken);
        assert!(matches!(extract(&raw), Err(AnalysisError::Schema(_))));
    }

    #[test]
    fn test_unparseable_span_is_malformed_json() {
        let raw = RawCompletion::from(r#"Result: {"clauseIdentifier": "Clause 1", "analysis": }"#);
        assert!(matches!(extract(&raw), Err(AnalysisError::MalformedJson(_))));
    }

    #[test]
    fn test_prose_around_valid_json_is_ignored() {
        let text = format!(
            "Sure! Here is the analysis you asked for:\n```json\n{RECORD_JSON}\n```\nLet me know if you need more."
        );
        let record = extract(&RawCompletion::from(text)).unwrap();
        let expected: ClauseAnalysisRecord = serde_json::from_str(RECORD_JSON).unwrap();
        assert_eq!(record, expected);
        assert_eq!(record.analysis.clause_category, "Remedies");
    }

    #[test]
    fn test_first_valid_block_wins_over_later_blocks() {
        let second = RECORD_JSON.replace("Clause 6 - Remedies", "Clause 99");
        let text = format!("Draft: {{\"note\": \"ignore me\"}} Final: {RECORD_JSON} Alt: {second}");
        let record = extract(&RawCompletion::from(text)).unwrap();
        assert_eq!(record.clause_identifier, "Clause 6 - Remedies");
    }

    #[test]
    fn test_later_fragment_is_tried_after_garbled_fragment() {
        let raw = RawCompletion::new(vec![
            "{ this is not json }".to_string(),
            format!("Second candidate:\n{RECORD_JSON}"),
        ]);
        let record = extract(&raw).unwrap();
        assert_eq!(record.analysis.summary, "Right to injunctive relief.");
    }

    #[test]
    fn test_schema_error_takes_precedence_over_malformed() {
        let raw = RawCompletion::new(vec![
            "{ garbage".to_string() + " }",
            r#"{"clauseIdentifier": "only this"}"#.to_string(),
        ]);
        assert!(matches!(extract(&raw), Err(AnalysisError::Schema(_))));
    }

    #[test]
    fn test_balanced_blocks_ignore_braces_inside_strings() {
        let blocks = balanced_blocks(r#"a {"x": "}{"} b {"y": 1}"#);
        assert_eq!(blocks, vec![r#"{"x": "}{"}"#, r#"{"y": 1}"#]);
    }

    #[test]
    fn test_unclosed_brace_in_prose_does_not_hide_the_record() {
        let text = format!("Note: {{unfinished aside about costs.\nResult: {RECORD_JSON}");
        let record = extract(&RawCompletion::from(text)).unwrap();
        assert_eq!(record.clause_identifier, "Clause 6 - Remedies");
    }

    #[test]
    fn test_balanced_blocks_resume_after_unclosed_brace() {
        let blocks = balanced_blocks(r#"{ open {"a": 1} tail {"b": "x"}"#);
        assert_eq!(blocks, vec![r#"{"a": 1}"#, r#"{"b": "x"}"#]);
    }

    #[test]
    fn test_both_comment_keys_is_schema_error() {
        let both = RECORD_JSON.replace(
            r#""commentsOnChanges": "No changes submitted.""#,
            r#""commentsOnChanges": "No changes submitted.", "comments_on_changes": "dup""#,
        );
        assert!(matches!(
            extract(&RawCompletion::from(both)),
            Err(AnalysisError::Schema(_))
        ));
    }

    #[test]
    fn test_candidate_spans_greedy_first_without_duplicates() {
        let spans = candidate_spans(r#"pre {"a": 1} post"#);
        assert_eq!(spans, vec![r#"{"a": 1}"#]);

        let spans = candidate_spans(r#"{"a": 1} and {"b": 2}"#);
        assert_eq!(
            spans,
            vec![r#"{"a": 1} and {"b": 2}"#, r#"{"a": 1}"#, r#"{"b": 2}"#]
        );
    }
}
