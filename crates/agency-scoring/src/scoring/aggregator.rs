use super::calculators::FactorMeasurement;
use super::weights::{FactorWeight, ScoreFactor};
use serde::Serialize;

/// One weighted input to an overall score, kept for audit and tooltips.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorScore {
    pub factor: ScoreFactor,
    pub name: &'static str,
    pub value: f64,
    pub weight: f64,
    pub weighted_contribution: f64,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightedScore {
    pub overall: u8,
    pub factors: Vec<FactorScore>,
}

/// Combines measurements under a fixed weight table.
///
/// Output follows the table's order. A factor with no measurement scores 0
/// and still occupies its weight; remaining weights are never renormalized.
pub fn aggregate(measurements: Vec<FactorMeasurement>, weights: &[FactorWeight]) -> WeightedScore {
    let mut measurements = measurements;
    let mut factors = Vec::with_capacity(weights.len());
    let mut total = 0.0;

    for entry in weights {
        let measurement = match measurements
            .iter()
            .position(|measurement| measurement.factor == entry.factor)
        {
            Some(index) => measurements.swap_remove(index),
            None => FactorMeasurement::no_data(entry.factor, "factor was not measured"),
        };

        let value = bounded(measurement.value);
        let weighted_contribution = value * entry.weight;
        total += weighted_contribution;

        factors.push(FactorScore {
            factor: entry.factor,
            name: entry.factor.label(),
            value,
            weight: entry.weight,
            weighted_contribution,
            explanation: measurement.explanation,
        });
    }

    WeightedScore {
        overall: total.round().clamp(0.0, 100.0) as u8,
        factors,
    }
}

fn bounded(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
