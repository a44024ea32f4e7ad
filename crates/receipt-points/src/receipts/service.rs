use std::sync::Arc;

use super::domain::{Points, ReceiptId, ReceiptSubmission};
use super::scoring::ScoringEngine;
use super::store::{ScoreStore, StoreError};
use super::validation::{ReceiptValidator, ValidationError};

/// Service composing the validator, scoring engine, and score store.
pub struct ReceiptService<S> {
    validator: ReceiptValidator,
    engine: ScoringEngine,
    store: Arc<S>,
}

/// Outcome of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedReceipt {
    pub id: ReceiptId,
    pub points: Points,
}

impl<S> ReceiptService<S>
where
    S: ScoreStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            validator: ReceiptValidator,
            engine: ScoringEngine::new(),
            store,
        }
    }

    /// Validate and score a receipt, then record the points under a fresh id.
    ///
    /// Nothing is stored when validation fails.
    pub fn process(
        &self,
        submission: ReceiptSubmission,
    ) -> Result<ProcessedReceipt, ReceiptServiceError> {
        let receipt = self.validator.validate(submission)?;
        let points = self.engine.score(&receipt);
        let id = self.store.put(points)?;
        Ok(ProcessedReceipt { id, points })
    }

    /// Points previously recorded for `id`.
    pub fn points(&self, id: &ReceiptId) -> Result<Points, ReceiptServiceError> {
        Ok(self.store.get(id)?)
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
