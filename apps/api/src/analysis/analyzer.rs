//! Single-Item Analyzer: compose → complete → extract, nothing more.
//!
//! Failures from the oracle call or the extractor propagate unchanged.
//! There is no fallback record.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::analysis::composer::compose;
use crate::analysis::extractor::extract;
use crate::analysis::models::{ClauseAnalysisRecord, ClauseChangeInput};
use crate::analysis::AnalysisError;
use crate::llm_client::CompletionOracle;

/// Runs one clause through the oracle. Holds no per-call state, so one
/// analyzer serves any number of concurrent requests.
#[derive(Clone)]
pub struct ClauseAnalyzer {
    oracle: Arc<dyn CompletionOracle>,
    timeout: Duration,
}

impl ClauseAnalyzer {
    pub fn new(oracle: Arc<dyn CompletionOracle>, timeout: Duration) -> Self {
        Self { oracle, timeout }
    }

    pub fn oracle(&self) -> &dyn CompletionOracle {
        self.oracle.as_ref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn analyze(
        &self,
        input: &ClauseChangeInput,
    ) -> Result<ClauseAnalysisRecord, AnalysisError> {
        let prompt = compose(input);
        debug!(
            "Composed clause prompt: {} chars, {} changes",
            prompt.len(),
            input.changes.len()
        );

        let raw = self
            .oracle
            .complete(&prompt, self.timeout)
            .await
            .map_err(AnalysisError::from)
            .inspect_err(|e| warn!("Clause analysis oracle call failed ({}): {e}", e.kind()))?;

        debug!(
            "Oracle replied: {} fragments, {} chars",
            raw.fragments().len(),
            raw.len()
        );

        let record = extract(&raw)
            .inspect_err(|e| warn!("Clause analysis extraction failed ({}): {e}", e.kind()))?;

        info!(
            "Clause analyzed: id={:?} category={}",
            input.paragraph_id, record.analysis.clause_category
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::{
        input, ScriptedOracle, UnconfiguredOracle, FAIL_MARKER, RECORD_JSON,
    };

    fn analyzer_with(oracle: Arc<dyn CompletionOracle>) -> ClauseAnalyzer {
        ClauseAnalyzer::new(oracle, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_analyze_returns_the_oracle_record() {
        let oracle = Arc::new(ScriptedOracle::echoing_record());
        let analyzer = analyzer_with(oracle.clone());

        let record = analyzer.analyze(&input("3. Ownership and Title.")).await.unwrap();

        let expected: ClauseAnalysisRecord = serde_json::from_str(RECORD_JSON).unwrap();
        assert_eq!(record, expected);
        assert_eq!(oracle.call_count(), 1);
    }

    #[tokio::test]
    async fn test_analyze_is_idempotent_against_deterministic_oracle() {
        let analyzer = analyzer_with(Arc::new(ScriptedOracle::echoing_record()));
        let clause = input("5. Term and Termination.");

        let first = analyzer.analyze(&clause).await.unwrap();
        let second = analyzer.analyze(&clause).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let analyzer = analyzer_with(Arc::new(ScriptedOracle::echoing_record()));
        let err = analyzer.analyze(&input(FAIL_MARKER)).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Transport(_)));
    }

    #[tokio::test]
    async fn test_missing_credential_propagates_as_config() {
        let analyzer = analyzer_with(Arc::new(UnconfiguredOracle));
        let err = analyzer.analyze(&input("1. Confidential Information.")).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Config));
    }

    #[tokio::test]
    async fn test_refusal_propagates_as_no_json_found() {
        let analyzer = analyzer_with(Arc::new(ScriptedOracle::new(
            "I cannot provide legal advice.",
        )));
        let err = analyzer.analyze(&input("7. Penalties.")).await.unwrap_err();
        assert!(matches!(err, AnalysisError::NoJsonFound));
    }

    #[tokio::test]
    async fn test_incomplete_record_propagates_as_schema_error() {
        let analyzer = analyzer_with(Arc::new(ScriptedOracle::new(
            r#"{"clauseCategory":"X"}"#,
        )));
        let err = analyzer.analyze(&input("7. Penalties.")).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Schema(_)));
    }
}
