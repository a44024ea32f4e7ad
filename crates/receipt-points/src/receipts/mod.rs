//! Receipt intake: validation, point scoring, and the in-memory score store.
//!
//! Data flows one way: a decoded [`ReceiptSubmission`] is validated into a
//! [`ValidReceipt`], scored by the [`ScoringEngine`], and the points are recorded
//! in a [`ScoreStore`] under a freshly generated [`ReceiptId`].

pub mod domain;
pub mod money;
pub mod router;
pub(crate) mod scoring;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    LineItemSubmission, Points, PointsView, ReceiptId, ReceiptIdView, ReceiptSubmission,
    ValidLineItem, ValidReceipt,
};
pub use money::{Money, MoneyParseError};
pub use router::receipt_router;
pub use scoring::{score, ScoreBreakdown, ScoreComponent, ScoreRule, ScoringEngine};
pub use service::{ProcessedReceipt, ReceiptService, ReceiptServiceError};
pub use store::{
    IdGenerator, InMemoryScoreStore, ScoreStore, StoreError, UuidGenerator, DEFAULT_ID_ATTEMPTS,
};
pub use validation::{
    parse_purchase_date, parse_purchase_time, validate, ReceiptValidator, ValidationError,
};
