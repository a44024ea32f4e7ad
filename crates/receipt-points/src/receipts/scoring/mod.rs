mod rules;

use serde::{Deserialize, Serialize};

use super::domain::{Points, ValidReceipt};

#[cfg(test)]
pub(crate) use rules::{
    description_price_points, item_pair_points, purchase_day_points, purchase_time_points,
    retailer_points,
};

/// Stateless engine applying the four receipt rules.
///
/// Totals saturate at `Points::MAX` instead of wrapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, receipt: &ValidReceipt) -> Points {
        self.breakdown(receipt).total
    }

    pub fn breakdown(&self, receipt: &ValidReceipt) -> ScoreBreakdown {
        let components = rules::score_receipt(receipt);
        let total = components
            .iter()
            .map(|component| component.points)
            .fold(0, Points::saturating_add);
        ScoreBreakdown { total, components }
    }
}

/// Total points for a validated receipt.
pub fn score(receipt: &ValidReceipt) -> Points {
    ScoringEngine.score(receipt)
}

/// The independent rules that contribute to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRule {
    Retailer,
    PurchaseDateTime,
    Total,
    LineItems,
}

impl ScoreRule {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreRule::Retailer => "Retailer name",
            ScoreRule::PurchaseDateTime => "Purchase date/time",
            ScoreRule::Total => "Receipt total",
            ScoreRule::LineItems => "Line items",
        }
    }
}

/// Points contributed by one rule, with a note explaining them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rule: ScoreRule,
    pub points: Points,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total: Points,
    pub components: Vec<ScoreComponent>,
}

impl ScoreBreakdown {
    pub fn points_for(&self, rule: ScoreRule) -> Points {
        self.components
            .iter()
            .filter(|component| component.rule == rule)
            .map(|component| component.points)
            .fold(0, Points::saturating_add)
    }
}
