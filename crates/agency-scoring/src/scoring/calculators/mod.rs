//! One pure function per named factor.
//!
//! Every calculator is total: empty or unusable input yields a value of 0 and
//! an explanation that starts with "no data".

mod rates;
mod risk;

pub use rates::{lead_conversion_rate, on_time_rate, quality_score, task_completion_rate};
pub use risk::{blocked_task_risk, deadline_proximity_risk, payment_risk, tat_violation_risk};

use super::weights::ScoreFactor;
use chrono::Duration;
use serde::Serialize;

/// Raw factor value before a weight is attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorMeasurement {
    pub factor: ScoreFactor,
    pub value: f64,
    pub explanation: String,
}

impl FactorMeasurement {
    pub(crate) fn new(factor: ScoreFactor, value: f64, explanation: impl Into<String>) -> Self {
        Self {
            factor,
            value,
            explanation: explanation.into(),
        }
    }

    pub(crate) fn no_data(factor: ScoreFactor, detail: &str) -> Self {
        Self::new(factor, 0.0, format!("no data: {detail}"))
    }
}

/// `part / total * 100`, or 0 when there is nothing to divide by.
pub(crate) fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Whole days in `delta`, rounded toward negative infinity. Sub-second
/// remainders count, so -400ms is -1 day.
pub(crate) fn floor_days(delta: Duration) -> i64 {
    let seconds = delta.num_seconds();
    let seconds = if delta < Duration::seconds(seconds) {
        seconds - 1
    } else {
        seconds
    };
    seconds.div_euclid(86_400)
}

pub(crate) fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
