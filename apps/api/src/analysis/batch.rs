//! Batch Orchestrator: runs the analyzer over many indexed clauses.
//!
//! Every item owns one result slot. A failure fills that slot with an error
//! entry and never touches its siblings. Slots are written as items finish
//! (up to `concurrency` in flight) and read back in input order.

use std::collections::HashSet;
use std::future::Future;

use futures::stream::{self, StreamExt};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::analysis::analyzer::ClauseAnalyzer;
use crate::analysis::models::{ClauseAnalysisRecord, ClauseChangeInput};

pub const CANCELLED_KIND: &str = "cancelled";
pub const VALIDATION_KIND: &str = "validation_error";

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Duplicate paragraph index {0} in batch")]
    DuplicateIndex(i64),
}

/// Error descriptor for one failed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchFailure {
    pub index: i64,
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchEntry {
    Success(ClauseAnalysisRecord),
    Failure(BatchFailure),
}

impl BatchEntry {
    pub fn is_success(&self) -> bool {
        matches!(self, BatchEntry::Success(_))
    }
}

/// One entry per submitted item, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    entries: Vec<(i64, BatchEntry)>,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, index: i64) -> Option<&BatchEntry> {
        self.entries
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &BatchEntry)> {
        self.entries.iter().map(|(i, entry)| (*i, entry))
    }

    pub fn failure_count(&self) -> usize {
        self.iter().filter(|(_, e)| !e.is_success()).count()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SuccessEntry<'a> {
    paragraph_index: i64,
    #[serde(flatten)]
    record: &'a ClauseAnalysisRecord,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FailureEntry<'a> {
    paragraph_index: i64,
    error: &'a str,
    error_kind: &'a str,
}

/// Serializes as a JSON object keyed by index, preserving submission order.
/// Success values are the record plus `paragraphIndex`; failures carry
/// `paragraphIndex`, `error` and `errorKind`.
impl Serialize for BatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (index, entry) in self.iter() {
            let key = index.to_string();
            match entry {
                BatchEntry::Success(record) => map.serialize_entry(
                    &key,
                    &SuccessEntry {
                        paragraph_index: index,
                        record,
                    },
                )?,
                BatchEntry::Failure(failure) => map.serialize_entry(
                    &key,
                    &FailureEntry {
                        paragraph_index: index,
                        error: &failure.message,
                        error_kind: failure.kind,
                    },
                )?,
            }
        }
        map.end()
    }
}

/// Analyzes every item. Runs to completion.
pub async fn analyze_batch(
    analyzer: &ClauseAnalyzer,
    items: Vec<(i64, ClauseChangeInput)>,
    concurrency: usize,
) -> Result<BatchResult, BatchError> {
    analyze_batch_until(analyzer, items, concurrency, std::future::pending()).await
}

/// Analyzes every item until `cancel` resolves.
///
/// An item with neither original nor modified text is recorded as a
/// `validation_error` failure without calling the oracle.
///
/// On cancellation, in-flight calls are dropped; items that already finished
/// keep their results and every unfinished item gets a `cancelled` failure.
pub async fn analyze_batch_until<F>(
    analyzer: &ClauseAnalyzer,
    items: Vec<(i64, ClauseChangeInput)>,
    concurrency: usize,
    cancel: F,
) -> Result<BatchResult, BatchError>
where
    F: Future<Output = ()>,
{
    let mut seen = HashSet::with_capacity(items.len());
    for (index, _) in &items {
        if !seen.insert(*index) {
            return Err(BatchError::DuplicateIndex(*index));
        }
    }

    let concurrency = concurrency.max(1);
    info!(
        "Analyzing batch of {} clauses (concurrency {})",
        items.len(),
        concurrency
    );

    let indices: Vec<i64> = items.iter().map(|(index, _)| *index).collect();
    let mut slots: Vec<Option<BatchEntry>> = indices.iter().map(|_| None).collect();

    let pending = stream::iter(items.into_iter().enumerate())
        .map(|(slot, (index, input))| async move {
            if is_blank(&input) {
                warn!("Batch item {index} has no clause text; skipping");
                let entry = BatchEntry::Failure(BatchFailure {
                    index,
                    kind: VALIDATION_KIND,
                    message: format!("Paragraph {index} has no text to analyze"),
                });
                return (slot, entry);
            }
            let entry = match analyzer.analyze(&input).await {
                Ok(record) => BatchEntry::Success(record),
                Err(e) => {
                    warn!("Batch item {index} failed ({}): {e}", e.kind());
                    BatchEntry::Failure(BatchFailure {
                        index,
                        kind: e.kind(),
                        message: e.to_string(),
                    })
                }
            };
            (slot, entry)
        })
        .buffer_unordered(concurrency);
    let mut pending = std::pin::pin!(pending);
    let mut cancel = std::pin::pin!(cancel);

    loop {
        tokio::select! {
            biased;
            _ = &mut cancel => {
                warn!("Batch cancelled; returning partial results");
                break;
            }
            next = pending.next() => match next {
                Some((slot, entry)) => slots[slot] = Some(entry),
                None => break,
            },
        }
    }

    let entries: Vec<(i64, BatchEntry)> = indices
        .into_iter()
        .zip(slots)
        .map(|(index, slot)| {
            let entry = slot.unwrap_or_else(|| {
                BatchEntry::Failure(BatchFailure {
                    index,
                    kind: CANCELLED_KIND,
                    message: "Batch cancelled before this item completed".to_string(),
                })
            });
            (index, entry)
        })
        .collect();

    let result = BatchResult { entries };
    info!(
        "Batch finished: {} items, {} failed",
        result.len(),
        result.failure_count()
    );
    Ok(result)
}

fn is_blank(input: &ClauseChangeInput) -> bool {
    input.original_text.trim().is_empty() && input.modified_text.trim().is_empty()
}
