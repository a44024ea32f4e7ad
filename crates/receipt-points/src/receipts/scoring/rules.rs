use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use super::super::domain::{Points, ValidLineItem, ValidReceipt};
use super::super::money::Money;
use super::{ScoreComponent, ScoreRule};

const ODD_DAY_POINTS: Points = 6;
const AFTERNOON_POINTS: Points = 10;
// Exclusive bounds, minutes after midnight: 14:00 < t < 16:00.
const AFTERNOON_START_MINUTE: u32 = 14 * 60;
const AFTERNOON_END_MINUTE: u32 = 16 * 60;
const WHOLE_DOLLAR_POINTS: Points = 50;
const QUARTER_MULTIPLE_POINTS: Points = 25;
const QUARTER: Money = Money::from_cents(25);
const ITEM_PAIR_POINTS: Points = 5;
const DESCRIPTION_LENGTH_DIVISOR: usize = 3;
const DESCRIPTION_PRICE_PERCENT: u64 = 20;

pub(crate) fn score_receipt(receipt: &ValidReceipt) -> Vec<ScoreComponent> {
    vec![
        retailer_component(receipt.retailer()),
        purchase_component(receipt.purchase_date(), receipt.purchase_time()),
        total_component(receipt.total()),
        items_component(receipt.items()),
    ]
}

fn retailer_component(retailer: &str) -> ScoreComponent {
    let points = retailer_points(retailer);
    ScoreComponent {
        rule: ScoreRule::Retailer,
        points,
        notes: format!("{points} alphanumeric character(s) in retailer name"),
    }
}

fn purchase_component(date: NaiveDate, time: NaiveTime) -> ScoreComponent {
    let day_points = purchase_day_points(date);
    let time_points = purchase_time_points(time);

    let mut notes = Vec::new();
    if day_points > 0 {
        notes.push(format!("odd purchase day {}", date.day()));
    }
    if time_points > 0 {
        notes.push(format!(
            "purchased at {} between 14:00 and 16:00",
            time.format("%H:%M")
        ));
    }
    if notes.is_empty() {
        notes.push("no date or time bonus".to_string());
    }

    ScoreComponent {
        rule: ScoreRule::PurchaseDateTime,
        points: day_points + time_points,
        notes: notes.join("; "),
    }
}

fn total_component(total: Money) -> ScoreComponent {
    let mut points = 0;
    let mut notes = Vec::new();

    if total.is_whole_dollars() {
        points += WHOLE_DOLLAR_POINTS;
        notes.push(format!("{total} is a round dollar amount"));
    }
    if total.is_multiple_of(QUARTER) {
        points += QUARTER_MULTIPLE_POINTS;
        notes.push(format!("{total} is a multiple of 0.25"));
    }
    if notes.is_empty() {
        notes.push(format!("{total} earns no total bonus"));
    }

    ScoreComponent {
        rule: ScoreRule::Total,
        points,
        notes: notes.join("; "),
    }
}

fn items_component(items: &[ValidLineItem]) -> ScoreComponent {
    let pair_points = item_pair_points(items.len());
    let qualifying: Vec<&ValidLineItem> = items
        .iter()
        .filter(|item| description_qualifies(item.trimmed_description()))
        .collect();
    let description_points: Points = qualifying
        .iter()
        .map(|item| description_price_points(item.price()))
        .fold(0, Points::saturating_add);

    ScoreComponent {
        rule: ScoreRule::LineItems,
        points: pair_points.saturating_add(description_points),
        notes: format!(
            "{} item pair(s); {} description(s) with length divisible by 3",
            items.len() / 2,
            qualifying.len()
        ),
    }
}

pub(crate) fn retailer_points(retailer: &str) -> Points {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as Points
}

pub(crate) fn purchase_day_points(date: NaiveDate) -> Points {
    if date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

pub(crate) fn purchase_time_points(time: NaiveTime) -> Points {
    let minute_of_day = time.hour() * 60 + time.minute();
    if minute_of_day > AFTERNOON_START_MINUTE && minute_of_day < AFTERNOON_END_MINUTE {
        AFTERNOON_POINTS
    } else {
        0
    }
}

pub(crate) fn item_pair_points(item_count: usize) -> Points {
    ((item_count / 2) as Points).saturating_mul(ITEM_PAIR_POINTS)
}

fn description_qualifies(trimmed: &str) -> bool {
    let length = trimmed.chars().count();
    length > 0 && length % DESCRIPTION_LENGTH_DIVISOR == 0
}

pub(crate) fn description_price_points(price: Money) -> Points {
    price.percent_ceil_dollars(DESCRIPTION_PRICE_PERCENT)
}
