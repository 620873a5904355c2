// Clause analysis pipeline: compose prompt → oracle call → extract & validate record.
// Batch orchestration and free-form suggestions build on the same oracle seam.
// All oracle calls go through llm_client; no direct Gemini calls here.

pub mod analyzer;
pub mod batch;
pub mod composer;
pub mod extractor;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod suggestions;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Failure of a single analysis. Variants stay distinct so callers can tell
/// "oracle unreachable" from "oracle answered with unusable content".
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Google API key not configured")]
    Config,

    #[error("Error communicating with Gemini API: {0}")]
    Transport(LlmError),

    #[error("No JSON object found in oracle response")]
    NoJsonFound,

    #[error("Oracle returned malformed JSON: {0}")]
    MalformedJson(String),

    #[error("Oracle JSON does not match the clause analysis schema: {0}")]
    Schema(String),

    #[error("Oracle returned no suggestions")]
    NoSuggestions,
}

impl AnalysisError {
    /// Stable machine-readable code for logs and batch error entries.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Config => "config_error",
            AnalysisError::Transport(_) => "transport_error",
            AnalysisError::NoJsonFound => "no_json_found",
            AnalysisError::MalformedJson(_) => "malformed_json",
            AnalysisError::Schema(_) => "schema_error",
            AnalysisError::NoSuggestions => "no_suggestions",
        }
    }
}

impl From<LlmError> for AnalysisError {
    fn from(e: LlmError) -> Self {
        if e.is_config() {
            AnalysisError::Config
        } else {
            AnalysisError::Transport(e)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_maps_to_config() {
        let err = AnalysisError::from(LlmError::MissingCredential);
        assert!(matches!(err, AnalysisError::Config));
        assert_eq!(err.kind(), "config_error");
    }

    #[test]
    fn test_api_failure_maps_to_transport() {
        let err = AnalysisError::from(LlmError::Api {
            status: 502,
            message: "bad gateway".to_string(),
        });
        assert_eq!(err.kind(), "transport_error");
        assert!(err.to_string().contains("bad gateway"));
    }
}
