use chrono::{NaiveDate, NaiveTime};

use super::domain::{LineItemSubmission, ReceiptSubmission, ValidLineItem, ValidReceipt};
use super::money::{Money, MoneyParseError};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Validation errors raised before a receipt can be scored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("retailer {value:?} must be non-empty and contain only letters, digits, whitespace, '-' or '&'")]
    InvalidRetailer { value: String },
    #[error("purchaseDate {value:?} is not a valid YYYY-MM-DD date")]
    InvalidPurchaseDate { value: String },
    #[error("purchaseTime {value:?} is not a valid 24-hour HH:MM time")]
    InvalidPurchaseTime { value: String },
    #[error("total {value:?} must be a non-negative amount with exactly two decimal places")]
    InvalidTotal { value: String },
    #[error("total {value:?} is too large to represent in cents")]
    TotalTooLarge { value: String },
    #[error("receipt must contain at least one item")]
    NoItems,
    #[error("items[{index}].shortDescription {value:?} must be non-empty and contain only letters, digits, whitespace or '-'")]
    InvalidItemDescription { index: usize, value: String },
    #[error("items[{index}].price {value:?} must be a non-negative amount with exactly two decimal places")]
    InvalidItemPrice { index: usize, value: String },
    #[error("items[{index}].price {value:?} is too large to represent in cents")]
    ItemPriceTooLarge { index: usize, value: String },
}

impl ValidationError {
    /// Wire name of the offending field, for structured logging.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidRetailer { .. } => "retailer",
            ValidationError::InvalidPurchaseDate { .. } => "purchaseDate",
            ValidationError::InvalidPurchaseTime { .. } => "purchaseTime",
            ValidationError::InvalidTotal { .. } | ValidationError::TotalTooLarge { .. } => {
                "total"
            }
            ValidationError::NoItems => "items",
            ValidationError::InvalidItemDescription { .. } => "items[].shortDescription",
            ValidationError::InvalidItemPrice { .. }
            | ValidationError::ItemPriceTooLarge { .. } => "items[].price",
        }
    }
}

/// Stateless guard turning decoded submissions into `ValidReceipt` values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptValidator;

impl ReceiptValidator {
    pub fn validate(&self, submission: ReceiptSubmission) -> Result<ValidReceipt, ValidationError> {
        validate(submission)
    }
}

/// Checks every field; the first failing rule rejects the whole receipt.
pub fn validate(submission: ReceiptSubmission) -> Result<ValidReceipt, ValidationError> {
    let ReceiptSubmission {
        retailer,
        purchase_date,
        purchase_time,
        total,
        items,
    } = submission;

    if !is_retailer_name(&retailer) {
        return Err(ValidationError::InvalidRetailer { value: retailer });
    }

    let purchase_date = parse_purchase_date(&purchase_date)?;
    let purchase_time = parse_purchase_time(&purchase_time)?;
    let total = Money::parse(&total).map_err(|err| match err {
        MoneyParseError::Format => ValidationError::InvalidTotal { value: total },
        MoneyParseError::Overflow => ValidationError::TotalTooLarge { value: total },
    })?;

    if items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    let items = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValidReceipt {
        retailer,
        purchase_date,
        purchase_time,
        total,
        items,
    })
}

fn validate_item(index: usize, item: LineItemSubmission) -> Result<ValidLineItem, ValidationError> {
    let LineItemSubmission {
        short_description,
        price,
    } = item;

    if !is_item_description(&short_description) {
        return Err(ValidationError::InvalidItemDescription {
            index,
            value: short_description,
        });
    }

    let price = Money::parse(&price).map_err(|err| match err {
        MoneyParseError::Format => ValidationError::InvalidItemPrice { index, value: price },
        MoneyParseError::Overflow => ValidationError::ItemPriceTooLarge { index, value: price },
    })?;

    Ok(ValidLineItem {
        short_description,
        price,
    })
}

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_purchase_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == raw)
        .ok_or_else(|| ValidationError::InvalidPurchaseDate {
            value: raw.to_string(),
        })
}

/// Parses a strict zero-padded 24-hour `HH:MM` time.
pub fn parse_purchase_time(raw: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(raw, TIME_FORMAT)
        .ok()
        .filter(|time| time.format(TIME_FORMAT).to_string() == raw)
        .ok_or_else(|| ValidationError::InvalidPurchaseTime {
            value: raw.to_string(),
        })
}

// ^[A-Za-z0-9\s\-&]+$
fn is_retailer_name(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || c == '-' || c == '&')
}

// ^[A-Za-z0-9\s\-]+$
fn is_item_description(value: &str) -> bool {
    !value.trim().is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || c == '-')
}
