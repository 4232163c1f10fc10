use super::aggregator::{aggregate, FactorScore};
use super::calculators::FactorMeasurement;
use super::classifier::{PerformanceBadge, RiskBand};
use super::weights::{ScoreFactor, PERFORMANCE_WEIGHTS, RISK_WEIGHTS};
use serde::Serialize;

/// Presentation-ready score: overall value, band label, and the weighted
/// factors with their explanations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub overall: u8,
    pub label: String,
    pub factors: Vec<FactorScore>,
}

impl ScoreResult {
    pub fn factor(&self, factor: ScoreFactor) -> Option<&FactorScore> {
        self.factors.iter().find(|entry| entry.factor == factor)
    }

    pub fn value_of(&self, factor: ScoreFactor) -> f64 {
        self.factor(factor).map(|entry| entry.value).unwrap_or(0.0)
    }

    pub fn summary(&self) -> String {
        format!("{} ({}/100)", self.label, self.overall)
    }
}

pub(crate) fn risk_result(measurements: Vec<FactorMeasurement>) -> ScoreResult {
    let scored = aggregate(measurements, &RISK_WEIGHTS);
    ScoreResult {
        overall: scored.overall,
        label: RiskBand::classify(scored.overall).label().to_string(),
        factors: scored.factors,
    }
}

pub(crate) fn performance_result(measurements: Vec<FactorMeasurement>) -> ScoreResult {
    let scored = aggregate(measurements, &PERFORMANCE_WEIGHTS);
    ScoreResult {
        overall: scored.overall,
        label: PerformanceBadge::classify(scored.overall)
            .label()
            .to_string(),
        factors: scored.factors,
    }
}
