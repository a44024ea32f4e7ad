use std::num::NonZeroU32;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::receipts::domain::{LineItemSubmission, Points, ReceiptId, ReceiptSubmission};
use crate::receipts::store::{IdGenerator, InMemoryScoreStore, ScoreStore, StoreError};
use crate::receipts::validation::validate;
use crate::receipts::{receipt_router, ReceiptService, ValidReceipt};

pub(super) fn item(description: &str, price: &str) -> LineItemSubmission {
    LineItemSubmission {
        short_description: description.to_string(),
        price: price.to_string(),
    }
}

/// Five-item Target receipt worth 28 points.
pub(super) fn target_receipt() -> ReceiptSubmission {
    ReceiptSubmission {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        total: "35.35".to_string(),
        items: vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
    }
}

/// Four Gatorades at the corner market, worth 109 points.
pub(super) fn corner_market_receipt() -> ReceiptSubmission {
    ReceiptSubmission {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        total: "9.00".to_string(),
        items: vec![
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
        ],
    }
}

/// Two-item receipt: Mouthwash and Gum, both with description bonuses.
pub(super) fn mouthwash_receipt() -> ReceiptSubmission {
    ReceiptSubmission {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        total: "35.35".to_string(),
        items: vec![item("Mouthwash", "9.00"), item("Gum", "3.00")],
    }
}

pub(super) fn valid(submission: ReceiptSubmission) -> ValidReceipt {
    validate(submission).expect("fixture receipt is valid")
}

/// Generator replaying a fixed script of identifiers, then counting upward.
pub(super) struct ScriptedIds {
    script: Mutex<Vec<&'static str>>,
    fallback: AtomicUsize,
}

impl ScriptedIds {
    pub(super) fn new(script: &[&'static str]) -> Self {
        let mut script = script.to_vec();
        script.reverse();
        Self {
            script: Mutex::new(script),
            fallback: AtomicUsize::new(1),
        }
    }
}

impl IdGenerator for ScriptedIds {
    fn generate(&self) -> ReceiptId {
        let next = self.script.lock().expect("script mutex poisoned").pop();
        match next {
            Some(id) => ReceiptId(id.to_string()),
            None => ReceiptId(format!(
                "generated-{}",
                self.fallback.fetch_add(1, Ordering::SeqCst)
            )),
        }
    }
}

/// Generator that always hands out the same identifier.
pub(super) struct ConstantIds(pub(super) &'static str);

impl IdGenerator for ConstantIds {
    fn generate(&self) -> ReceiptId {
        ReceiptId(self.0.to_string())
    }
}

pub(super) fn attempts(count: u32) -> NonZeroU32 {
    NonZeroU32::new(count).expect("non-zero attempts")
}

/// Store double that records how often it was written to.
#[derive(Default)]
pub(super) struct CountingStore {
    inner: InMemoryScoreStore,
    pub(super) puts: AtomicUsize,
}

impl ScoreStore for CountingStore {
    fn put(&self, points: Points) -> Result<ReceiptId, StoreError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put(points)
    }

    fn get(&self, id: &ReceiptId) -> Result<Points, StoreError> {
        self.inner.get(id)
    }
}

pub(super) struct UnavailableStore;

impl ScoreStore for UnavailableStore {
    fn put(&self, _points: Points) -> Result<ReceiptId, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn get(&self, _id: &ReceiptId) -> Result<Points, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn build_service() -> (ReceiptService<CountingStore>, Arc<CountingStore>) {
    let store = Arc::new(CountingStore::default());
    let service = ReceiptService::new(store.clone());
    (service, store)
}

pub(super) fn router_with_service(service: ReceiptService<CountingStore>) -> axum::Router {
    receipt_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
