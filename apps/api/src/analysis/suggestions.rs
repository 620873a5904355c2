//! Free-form improvement suggestions for a single clause.

use std::time::Duration;

use tracing::info;

use crate::analysis::prompts::SUGGESTION_PROMPT_TEMPLATE;
use crate::analysis::AnalysisError;
use crate::llm_client::{CompletionOracle, RawCompletion};

/// Asks the oracle for suggestions and returns one entry per non-blank line.
pub async fn suggest_improvements(
    oracle: &dyn CompletionOracle,
    clause_text: &str,
    timeout: Duration,
) -> Result<Vec<String>, AnalysisError> {
    let prompt = SUGGESTION_PROMPT_TEMPLATE.replace("{clause_text}", clause_text);
    let raw = oracle.complete(&prompt, timeout).await?;

    if raw.is_empty() {
        return Err(AnalysisError::NoSuggestions);
    }

    let suggestions = split_suggestions(&raw);
    if suggestions.is_empty() {
        return Err(AnalysisError::NoSuggestions);
    }

    info!("Oracle returned {} clause suggestions", suggestions.len());
    Ok(suggestions)
}

/// Bullet dashes and surrounding spaces are stripped from each line.
fn split_suggestions(raw: &RawCompletion) -> Vec<String> {
    raw.fragments()
        .iter()
        .flat_map(|fragment| fragment.lines())
        .map(|line| line.trim().trim_matches(|c: char| c == '-' || c == ' '))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::{ScriptedOracle, UnconfiguredOracle};

    #[test]
    fn test_split_strips_bullets_and_blank_lines() {
        let raw = RawCompletion::new(vec![
            "- Add a definition of Purpose\n\n  - Limit the term to 5 years -\n".to_string(),
            "Require written notice".to_string(),
        ]);
        assert_eq!(
            split_suggestions(&raw),
            vec![
                "Add a definition of Purpose",
                "Limit the term to 5 years",
                "Require written notice"
            ]
        );
    }

    #[tokio::test]
    async fn test_bulleted_reply_becomes_suggestions() {
        let oracle = ScriptedOracle::new("- Tighten the notice period");
        let suggestions = suggest_improvements(
            &oracle,
            "10. Notices. All notices must be sent by email.",
            Duration::from_secs(5),
        )
        .await
        .unwrap();
        assert_eq!(suggestions, vec!["Tighten the notice period"]);
        assert_eq!(oracle.call_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_reply_is_no_suggestions() {
        let oracle = ScriptedOracle::new("  \n - \n");
        let err = suggest_improvements(&oracle, "clause", Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::NoSuggestions));
    }

    #[tokio::test]
    async fn test_missing_credential_is_config_error() {
        let err = suggest_improvements(&UnconfiguredOracle, "clause", Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Config));
    }

    #[test]
    fn test_template_placeholder_is_replaced() {
        let prompt = SUGGESTION_PROMPT_TEMPLATE.replace("{clause_text}", "6. Remedies.");
        assert!(prompt.ends_with("Clause: 6. Remedies."));
    }
}
