use super::{percentage, FactorMeasurement};
use crate::scoring::domain::{Lead, LeadStatus, Submission, SubmissionStatus, Task};
use crate::scoring::weights::{ScoreFactor, RATING_TO_PERCENT};

pub fn task_completion_rate(tasks: &[Task]) -> FactorMeasurement {
    let factor = ScoreFactor::TaskCompletionRate;
    if tasks.is_empty() {
        return FactorMeasurement::no_data(factor, "no assigned tasks");
    }

    let done = tasks.iter().filter(|task| task.is_done()).count();
    let value = percentage(done, tasks.len());

    FactorMeasurement::new(
        factor,
        value,
        format!("{done} of {} tasks completed ({value:.0}%)", tasks.len()),
    )
}

/// Share of completed tasks that did not finish after their due date.
///
/// Completed tasks missing either instant count as on time.
pub fn on_time_rate(tasks: &[Task]) -> FactorMeasurement {
    let factor = ScoreFactor::OnTimeRate;
    let completed: Vec<&Task> = tasks.iter().filter(|task| task.is_done()).collect();
    if completed.is_empty() {
        return FactorMeasurement::no_data(factor, "no completed tasks");
    }

    let late = completed.iter().filter(|task| task.completed_late()).count();
    let on_time = completed.len() - late;
    let value = percentage(on_time, completed.len());

    FactorMeasurement::new(
        factor,
        value,
        format!(
            "{on_time} of {} completed tasks delivered on time ({value:.0}%)",
            completed.len()
        ),
    )
}

/// Mean rating of approved, rated submissions, rescaled from 0-5 to 0-100.
pub fn quality_score(submissions: &[Submission]) -> FactorMeasurement {
    let factor = ScoreFactor::QualityScore;
    let ratings: Vec<f64> = submissions
        .iter()
        .filter(|submission| submission.status == SubmissionStatus::Approved)
        .filter_map(|submission| submission.rating)
        .collect();
    if ratings.is_empty() {
        return FactorMeasurement::no_data(factor, "no approved submissions with a rating");
    }

    let average = ratings.iter().sum::<f64>() / ratings.len() as f64;
    let value = average * RATING_TO_PERCENT;

    FactorMeasurement::new(
        factor,
        value,
        format!(
            "Average rating {average:.1}/5 across {} approved submission{}",
            ratings.len(),
            if ratings.len() == 1 { "" } else { "s" }
        ),
    )
}

pub fn lead_conversion_rate(leads: &[Lead]) -> FactorMeasurement {
    let factor = ScoreFactor::LeadConversionRate;
    if leads.is_empty() {
        return FactorMeasurement::no_data(factor, "no leads");
    }

    let won = leads
        .iter()
        .filter(|lead| lead.status == LeadStatus::ClosedWon)
        .count();
    let value = percentage(won, leads.len());

    FactorMeasurement::new(
        factor,
        value,
        format!("{won} of {} leads closed-won ({value:.1}%)", leads.len()),
    )
}
