//! Data models for clause analysis: the caller's change input and the validated
//! record parsed out of the oracle's reply.

use serde::{Deserialize, Serialize};

/// Kind of edit recorded in a paragraph's changelog.
///
/// Parsed case-insensitively. Unknown kinds are kept verbatim so a malformed
/// changelog still reaches the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChangeType {
    Insertion,
    Deletion,
    Modification,
    Formatted,
    Other(String),
}

impl From<String> for ChangeType {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "insertion" | "insert" => ChangeType::Insertion,
            "deletion" | "delete" => ChangeType::Deletion,
            "modification" | "modify" => ChangeType::Modification,
            "formatted" | "format" | "formatting" => ChangeType::Formatted,
            _ => ChangeType::Other(raw),
        }
    }
}

impl From<ChangeType> for String {
    fn from(kind: ChangeType) -> Self {
        match kind {
            ChangeType::Insertion => "Insertion".to_string(),
            ChangeType::Deletion => "Deletion".to_string(),
            ChangeType::Modification => "Modification".to_string(),
            ChangeType::Formatted => "Formatted".to_string(),
            ChangeType::Other(raw) => raw,
        }
    }
}

/// One entry of a paragraph's changelog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    pub description: String,
}

/// Input to a single clause analysis. `original_text` and `modified_text` are
/// taken as given; nothing here reconstructs one from the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseChangeInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph_id: Option<String>,
    pub original_text: String,
    pub modified_text: String,
    #[serde(default)]
    pub changes: Vec<ChangeRecord>,
}

/// The seven analysis fields plus comments on the submitted changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseAnalysis {
    pub clause_category: String,
    pub summary: String,
    pub risks_disclosing_party: String,
    pub risks_receiving_party: String,
    pub improvements_disclosing_party: String,
    pub improvements_receiving_party: String,
    pub suggested_wording: String,
    #[serde(alias = "comments_on_changes")]
    pub comments_on_changes: String,
}

/// Validated analysis of one clause. Every field is a required string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseAnalysisRecord {
    pub clause_identifier: String,
    pub original_clause_text: String,
    pub analysis: ClauseAnalysis,
}
