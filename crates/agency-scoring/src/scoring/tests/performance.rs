use super::common::*;

use crate::scoring::calculators::{on_time_rate, quality_score, task_completion_rate};
use crate::scoring::domain::{SubmissionStatus, Task, TaskStatus};
use crate::scoring::{compute_team_member_performance, ScoreFactor};

/// 25 tasks: 20 done (2 of them late) and 5 open, i.e. 80% complete and 90%
/// on time.
fn strong_member_tasks() -> Vec<Task> {
    let mut tasks: Vec<Task> = (0..18).map(|i| on_time_task(&format!("ok-{i}"))).collect();
    tasks.extend((0..2).map(|i| late_task(&format!("late-{i}"))));
    tasks.extend((0..5).map(|i| open_task(&format!("open-{i}"), days_ahead(5))));
    tasks
}

#[test]
fn strong_member_earns_gold() {
    let submissions = vec![
        submission("s1", "u-1", SubmissionStatus::Approved, Some(5.0)),
        submission("s2", "u-1", SubmissionStatus::Approved, Some(5.0)),
    ];

    let result = compute_team_member_performance(&strong_member_tasks(), &submissions);

    assert_eq!(result.value_of(ScoreFactor::TaskCompletionRate), 80.0);
    assert_eq!(result.value_of(ScoreFactor::OnTimeRate), 90.0);
    assert_eq!(result.value_of(ScoreFactor::QualityScore), 100.0);
    assert_eq!(result.overall, 89);
    assert_eq!(result.label, "gold");
}

#[test]
fn performance_factors_carry_weights_and_contributions() {
    let result = compute_team_member_performance(&strong_member_tasks(), &[]);

    let completion = result
        .factor(ScoreFactor::TaskCompletionRate)
        .expect("completion factor");
    assert_eq!(completion.weight, 0.4);
    assert!((completion.weighted_contribution - 32.0).abs() < 1e-9);

    let quality = result.factor(ScoreFactor::QualityScore).expect("quality factor");
    assert_eq!(quality.value, 0.0);
    assert!(quality.explanation.starts_with("no data"));

    // 32 + 27 + 0
    assert_eq!(result.overall, 59);
    assert_eq!(result.label, "bronze");
}

#[test]
fn silver_sits_between_sixty_and_eighty() {
    let tasks = vec![on_time_task("a"), on_time_task("b")];

    let result = compute_team_member_performance(&tasks, &[]);

    // 40 + 30 + 0
    assert_eq!(result.overall, 70);
    assert_eq!(result.label, "silver");
}

#[test]
fn empty_history_scores_zero_bronze() {
    let result = compute_team_member_performance(&[], &[]);

    assert_eq!(result.overall, 0);
    assert_eq!(result.label, "bronze");
    assert_eq!(result.factors.len(), 3);
    assert!(result
        .factors
        .iter()
        .all(|factor| factor.explanation.starts_with("no data")));
}

#[test]
fn completion_rate_is_not_rounded() {
    let tasks = vec![
        on_time_task("a"),
        task("b", TaskStatus::New),
        task("c", TaskStatus::Blocked),
    ];

    let measurement = task_completion_rate(&tasks);

    assert!((measurement.value - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(measurement.explanation, "1 of 3 tasks completed (33%)");
}

#[test]
fn on_time_rate_treats_undated_completions_as_on_time() {
    let mut undated_done = task("undated", TaskStatus::Done);
    undated_done.completed_at = Some(days_ago(1));
    let tasks = vec![
        late_task("late"),
        undated_done,
        on_time_task("ok"),
        open_task("open", days_ago(10)),
    ];

    let measurement = on_time_rate(&tasks);

    assert!((measurement.value - 200.0 / 3.0).abs() < 1e-9);
    assert!(measurement
        .explanation
        .starts_with("2 of 3 completed tasks delivered on time"));
    assert_eq!(on_time_rate(&[open_task("x", days_ago(1))]).value, 0.0);
}

#[test]
fn quality_uses_only_approved_rated_submissions() {
    let submissions = vec![
        submission("a", "u", SubmissionStatus::Approved, Some(4.0)),
        submission("b", "u", SubmissionStatus::Approved, Some(5.0)),
        submission("c", "u", SubmissionStatus::Approved, None),
        submission("d", "u", SubmissionStatus::Rejected, Some(1.0)),
        submission("e", "u", SubmissionStatus::Pending, Some(0.0)),
    ];

    let measurement = quality_score(&submissions);

    assert_eq!(measurement.value, 90.0);
    assert_eq!(
        measurement.explanation,
        "Average rating 4.5/5 across 2 approved submissions"
    );
}

#[test]
fn performance_is_repeatable() {
    let tasks = strong_member_tasks();
    let submissions = vec![submission("s", "u", SubmissionStatus::Approved, Some(3.5))];

    assert_eq!(
        compute_team_member_performance(&tasks, &submissions),
        compute_team_member_performance(&tasks, &submissions)
    );
}
