//! Weighted risk and performance scoring over in-memory record snapshots.
//!
//! Callers load records elsewhere, hand them in (raw documents go through
//! [`normalizer`] first), and get back a [`ScoreResult`]. Everything here is
//! synchronous and side-effect free apart from debug-level tracing, so the
//! same inputs always produce the same output.

pub mod aggregator;
pub mod calculators;
pub mod classifier;
pub mod domain;
mod formatter;
mod leaderboard;
pub mod normalizer;
mod sales;
pub mod weights;

#[cfg(test)]
mod tests;

pub use aggregator::FactorScore;
pub use calculators::FactorMeasurement;
pub use classifier::{PerformanceBadge, RiskBand};
pub use domain::{
    Lead, LeadStatus, PaymentStatus, Project, RawLead, RawProject, RawSubmission, RawTask,
    RawTeamMember, Submission, SubmissionStatus, Task, TaskStatus, TeamMember,
};
pub use formatter::ScoreResult;
pub use leaderboard::{compute_team_leaderboard, LeaderboardEntry};
pub use sales::{compute_sales_by_rep, compute_sales_conversion, RepSalesSummary, SalesConversionSummary};
pub use weights::ScoreFactor;

use chrono::{DateTime, Utc};
use tracing::debug;

/// Weighted delivery risk for one project: payment, TAT violations, deadline
/// proximity, and blocked work.
pub fn compute_project_risk(project: &Project, tasks: &[Task], now: DateTime<Utc>) -> ScoreResult {
    let measurements = vec![
        calculators::payment_risk(project, now),
        calculators::tat_violation_risk(tasks, now),
        calculators::deadline_proximity_risk(project, tasks, now),
        calculators::blocked_task_risk(tasks),
    ];

    let result = formatter::risk_result(measurements);
    debug!(
        project_id = %project.id,
        task_count = tasks.len(),
        overall = result.overall,
        label = %result.label,
        "computed project risk"
    );
    result
}

/// Weighted performance for one team member from their tasks and submissions.
pub fn compute_team_member_performance(tasks: &[Task], submissions: &[Submission]) -> ScoreResult {
    let measurements = vec![
        calculators::task_completion_rate(tasks),
        calculators::on_time_rate(tasks),
        calculators::quality_score(submissions),
    ];

    let result = formatter::performance_result(measurements);
    debug!(
        task_count = tasks.len(),
        submission_count = submissions.len(),
        overall = result.overall,
        label = %result.label,
        "computed team member performance"
    );
    result
}
