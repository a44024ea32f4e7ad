use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Reward points awarded to a receipt.
pub type Points = u64;

/// Opaque identifier issued when a receipt is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(pub String);

impl ReceiptId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Receipt exactly as decoded from the wire, before any validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSubmission {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub total: String,
    pub items: Vec<LineItemSubmission>,
}

/// Line item exactly as decoded from the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemSubmission {
    pub short_description: String,
    pub price: String,
}

/// Receipt that passed validation. Only the validator builds these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidReceipt {
    pub(crate) retailer: String,
    pub(crate) purchase_date: NaiveDate,
    pub(crate) purchase_time: NaiveTime,
    pub(crate) total: Money,
    pub(crate) items: Vec<ValidLineItem>,
}

impl ValidReceipt {
    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    pub fn purchase_time(&self) -> NaiveTime {
        self.purchase_time
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn items(&self) -> &[ValidLineItem] {
        &self.items
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLineItem {
    pub(crate) short_description: String,
    pub(crate) price: Money,
}

impl ValidLineItem {
    /// Description with surrounding whitespace removed, as used by the item rule.
    pub fn trimmed_description(&self) -> &str {
        self.short_description.trim()
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

/// Response body returned after a receipt is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptIdView {
    pub id: ReceiptId,
}

/// Response body returned for a points lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsView {
    pub points: Points,
}
