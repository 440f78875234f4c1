use crate::api::schema::{RecommendRequest, RecommendResponse};
use crate::error::{AdvisorError, Result};
use crate::logic::RecommendationEngine;
use serde::Serialize;

/// One line of batch output. Failures stay in place so results line up with inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchOutcome {
    Ok(RecommendResponse),
    Err { error: String },
}

impl BatchOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, BatchOutcome::Ok(_))
    }
}

/// Evaluate a JSON array of request objects.
///
/// Only a document that is not a JSON array fails as a whole. Each entry is
/// decoded on its own, so one unknown soil type does not sink the batch.
pub fn run_batch(engine: &RecommendationEngine, input: &str) -> Result<Vec<BatchOutcome>> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(input).map_err(|e| {
        AdvisorError::InvalidInput(format!("batch file must be a JSON array: {}", e))
    })?;

    tracing::debug!("Evaluating {} batch entries", entries.len());

    let outcomes = entries
        .into_iter()
        .enumerate()
        .map(|(idx, value)| {
            let result = serde_json::from_value::<RecommendRequest>(value)
                .map_err(|e| AdvisorError::InvalidInput(format!("malformed entry: {}", e)))
                .and_then(|req| req.evaluate(engine));

            match result {
                Ok(rec) => BatchOutcome::Ok(rec.into()),
                Err(e) => {
                    tracing::warn!("Batch entry {} rejected: {}", idx, e);
                    BatchOutcome::Err {
                        error: e.to_string(),
                    }
                }
            }
        })
        .collect();

    Ok(outcomes)
}
