//! Fixed weight and band table shared by the aggregator and classifier.
//!
//! Each weight set sums to 1.0. Band boundaries are inclusive exactly as
//! written below: risk uses `<=` upper bounds, performance uses `>=` lower
//! bounds.

use serde::{Deserialize, Serialize};

/// Named input to a weighted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    PaymentRisk,
    TatViolationRisk,
    DeadlineProximityRisk,
    BlockedTaskRisk,
    TaskCompletionRate,
    OnTimeRate,
    QualityScore,
    LeadConversionRate,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PaymentRisk => "Payment Risk",
            Self::TatViolationRisk => "TAT Violation Risk",
            Self::DeadlineProximityRisk => "Deadline Proximity Risk",
            Self::BlockedTaskRisk => "Blocked-Task Risk",
            Self::TaskCompletionRate => "Task Completion Rate",
            Self::OnTimeRate => "On-Time Rate",
            Self::QualityScore => "Quality Score",
            Self::LeadConversionRate => "Lead Conversion Rate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorWeight {
    pub factor: ScoreFactor,
    pub weight: f64,
}

const fn weighted(factor: ScoreFactor, weight: f64) -> FactorWeight {
    FactorWeight { factor, weight }
}

pub const RISK_WEIGHTS: [FactorWeight; 4] = [
    weighted(ScoreFactor::PaymentRisk, 0.35),
    weighted(ScoreFactor::TatViolationRisk, 0.25),
    weighted(ScoreFactor::DeadlineProximityRisk, 0.25),
    weighted(ScoreFactor::BlockedTaskRisk, 0.15),
];

pub const PERFORMANCE_WEIGHTS: [FactorWeight; 3] = [
    weighted(ScoreFactor::TaskCompletionRate, 0.4),
    weighted(ScoreFactor::OnTimeRate, 0.3),
    weighted(ScoreFactor::QualityScore, 0.3),
];

/// Highest overall risk still labelled "Low".
pub const RISK_LOW_MAX: u8 = 20;
/// Highest overall risk still labelled "Medium".
pub const RISK_MEDIUM_MAX: u8 = 50;

/// Lowest overall performance awarded "gold".
pub const PERFORMANCE_GOLD_MIN: u8 = 80;
/// Lowest overall performance awarded "silver".
pub const PERFORMANCE_SILVER_MIN: u8 = 60;

/// Ratings are collected on a 0-5 scale and rescaled onto 0-100.
pub const RATING_SCALE_MAX: f64 = 5.0;
pub const RATING_TO_PERCENT: f64 = 20.0;
