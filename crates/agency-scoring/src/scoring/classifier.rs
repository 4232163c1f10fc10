use super::weights::{PERFORMANCE_GOLD_MIN, PERFORMANCE_SILVER_MIN, RISK_LOW_MAX, RISK_MEDIUM_MAX};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub fn classify(overall: u8) -> Self {
        match overall {
            score if score <= RISK_LOW_MAX => Self::Low,
            score if score <= RISK_MEDIUM_MAX => Self::Medium,
            _ => Self::High,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBadge {
    Gold,
    Silver,
    Bronze,
}

impl PerformanceBadge {
    pub fn classify(overall: u8) -> Self {
        match overall {
            score if score >= PERFORMANCE_GOLD_MIN => Self::Gold,
            score if score >= PERFORMANCE_SILVER_MIN => Self::Silver,
            _ => Self::Bronze,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Bronze => "bronze",
        }
    }
}
