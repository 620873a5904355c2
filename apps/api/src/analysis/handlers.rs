//! Axum route handlers for the clause analysis API.
//!
//! Paths and request shapes match what the document-review add-in sends.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::batch::{analyze_batch, BatchResult};
use crate::analysis::models::{
    ChangeRecord, ChangeType, ClauseAnalysisRecord, ClauseChangeInput,
};
use crate::analysis::suggestions::suggest_improvements;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
}

/// One changelog entry as recorded by the add-in.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeLogItem {
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
}

impl ChangeLogItem {
    fn into_change(self) -> ChangeRecord {
        let description = match self.author.as_deref().map(str::trim) {
            Some(author) if !author.is_empty() => format!("{} (author: {author})", self.text),
            _ => self.text,
        };
        ChangeRecord {
            change_type: self.change_type,
            description,
        }
    }
}

/// Single-paragraph request. When `original_text` / `modified_text` are
/// omitted, `paragraph` stands in for both.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeChangesRequest {
    pub paragraph: String,
    #[serde(default)]
    pub changelog: Vec<ChangeLogItem>,
    #[serde(default)]
    pub paragraph_id: Option<String>,
    #[serde(default)]
    pub original_text: Option<String>,
    #[serde(default)]
    pub modified_text: Option<String>,
}

impl AnalyzeChangesRequest {
    fn into_input(self) -> ClauseChangeInput {
        ClauseChangeInput {
            paragraph_id: self.paragraph_id,
            original_text: self.original_text.unwrap_or_else(|| self.paragraph.clone()),
            modified_text: self.modified_text.unwrap_or(self.paragraph),
            changes: self
                .changelog
                .into_iter()
                .map(ChangeLogItem::into_change)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeChangesBatchItem {
    #[serde(rename = "paragraphIndex")]
    pub paragraph_index: i64,
    #[serde(flatten)]
    pub request: AnalyzeChangesRequest,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeChangesBatchRequest {
    pub items: Vec<AnalyzeChangesBatchItem>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeChangesBatchResponse {
    pub results: BatchResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze-clause
///
/// Free-form improvement suggestions for one clause.
pub async fn handle_suggest(
    State(state): State<AppState>,
    Json(request): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let suggestions = suggest_improvements(
        state.analyzer.oracle(),
        &request.text,
        state.analyzer.timeout(),
    )
    .await?;

    Ok(Json(SuggestResponse { suggestions }))
}

/// POST /analyze_changes, POST /analyze_clause_changes
///
/// Structured analysis of one paragraph and its changelog.
pub async fn handle_analyze_changes(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeChangesRequest>,
) -> Result<Json<ClauseAnalysisRecord>, AppError> {
    if request.paragraph.trim().is_empty() {
        return Err(AppError::Validation("paragraph cannot be empty".to_string()));
    }

    let record = state.analyzer.analyze(&request.into_input()).await?;
    Ok(Json(record))
}

/// POST /analyze_changes_batch
///
/// Analyzes every item independently. Per-item failures, blank paragraphs
/// included, are reported inside `results`; the request itself only fails
/// on duplicate indices.
pub async fn handle_analyze_changes_batch(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeChangesBatchRequest>,
) -> Result<Json<AnalyzeChangesBatchResponse>, AppError> {
    let items = request
        .items
        .into_iter()
        .map(|item| (item.paragraph_index, item.request.into_input()))
        .collect();

    let results = analyze_batch(&state.analyzer, items, state.config.batch_concurrency).await?;
    Ok(Json(AnalyzeChangesBatchResponse { results }))
}
