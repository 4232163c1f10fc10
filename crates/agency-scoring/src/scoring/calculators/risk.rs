use super::{floor_days, percentage, plural, FactorMeasurement};
use crate::scoring::domain::{Project, Task, TaskStatus};
use crate::scoring::weights::ScoreFactor;
use chrono::{DateTime, Utc};

/// More than this many days since start without payment is fully overdue.
const PAYMENT_OVERDUE_AFTER_DAYS: i64 = 7;
const PAYMENT_LATE_FROM_DAYS: i64 = 4;
const PAYMENT_PENDING_FROM_DAYS: i64 = 1;

struct DeadlineRule {
    max_days_remaining: i64,
    completion_below: u32,
    risk: f64,
}

/// Evaluated in order; the first rule whose window and completion gate both
/// match decides the risk.
const DEADLINE_RULES: [DeadlineRule; 4] = [
    DeadlineRule {
        max_days_remaining: -1,
        completion_below: 100,
        risk: 100.0,
    },
    DeadlineRule {
        max_days_remaining: 1,
        completion_below: 100,
        risk: 80.0,
    },
    DeadlineRule {
        max_days_remaining: 4,
        completion_below: 70,
        risk: 60.0,
    },
    DeadlineRule {
        max_days_remaining: 7,
        completion_below: 50,
        risk: 40.0,
    },
];

pub fn payment_risk(project: &Project, now: DateTime<Utc>) -> FactorMeasurement {
    let factor = ScoreFactor::PaymentRisk;

    if project.is_paid() {
        return FactorMeasurement::new(factor, 0.0, "Payment received");
    }

    let balance = balance_note(project);

    if project.completed_at.is_some() {
        return FactorMeasurement::new(
            factor,
            100.0,
            format!("Project completed without payment{balance}"),
        );
    }

    let Some(start) = project.start_date else {
        return FactorMeasurement::no_data(factor, "project has no start date");
    };

    let days = floor_days(now - start);
    let (value, explanation) = if days > PAYMENT_OVERDUE_AFTER_DAYS {
        (
            100.0,
            format!("Payment overdue by >{PAYMENT_OVERDUE_AFTER_DAYS} days ({days} days since start{balance})"),
        )
    } else if days >= PAYMENT_LATE_FROM_DAYS {
        (
            80.0,
            format!("Payment outstanding {days} days after start{balance}"),
        )
    } else if days >= PAYMENT_PENDING_FROM_DAYS {
        (
            50.0,
            format!("Payment pending, {days} day{} since start{balance}", plural(days)),
        )
    } else {
        (0.0, "Project not started yet; payment not due".to_string())
    };

    FactorMeasurement::new(factor, value, explanation)
}

fn balance_note(project: &Project) -> String {
    if project.budget > 0.0 {
        format!(
            "; {:.2} of {:.2} outstanding",
            project.outstanding_balance(),
            project.budget
        )
    } else {
        String::new()
    }
}

/// Open past due, or finished after due. Tasks without a due date never
/// violate.
fn violates_tat(task: &Task, now: DateTime<Utc>) -> bool {
    let Some(due) = task.due_date else {
        return false;
    };
    let open_and_overdue = !task.is_done() && due < now;
    open_and_overdue || task.completed_late()
}

pub fn tat_violation_risk(tasks: &[Task], now: DateTime<Utc>) -> FactorMeasurement {
    let factor = ScoreFactor::TatViolationRisk;
    if tasks.is_empty() {
        return FactorMeasurement::no_data(factor, "no tasks to check for TAT violations");
    }

    let violating = tasks.iter().filter(|task| violates_tat(task, now)).count();
    let value = percentage(violating, tasks.len()).round();

    FactorMeasurement::new(
        factor,
        value,
        format!(
            "{violating} of {} tasks had TAT violations ({value:.0}% risk)",
            tasks.len()
        ),
    )
}

pub fn deadline_proximity_risk(
    project: &Project,
    tasks: &[Task],
    now: DateTime<Utc>,
) -> FactorMeasurement {
    let factor = ScoreFactor::DeadlineProximityRisk;
    if tasks.is_empty() {
        return FactorMeasurement::no_data(factor, "no tasks to measure progress against deadline");
    }
    let Some(end) = project.end_date else {
        return FactorMeasurement::no_data(factor, "project has no end date");
    };

    let done = tasks.iter().filter(|task| task.is_done()).count();
    let completion = percentage(done, tasks.len()).round() as u32;
    let days_remaining = floor_days(end - now);

    let risk = DEADLINE_RULES
        .iter()
        .find(|rule| {
            days_remaining <= rule.max_days_remaining && completion < rule.completion_below
        })
        .map(|rule| rule.risk)
        .unwrap_or(0.0);

    let window = if days_remaining < 0 {
        let overdue = -days_remaining;
        format!("Deadline passed {overdue} day{} ago", plural(overdue))
    } else {
        format!("{days_remaining} day{} to deadline", plural(days_remaining))
    };

    FactorMeasurement::new(
        factor,
        risk,
        format!("{window} with {completion}% of tasks complete ({risk:.0}% risk)"),
    )
}

pub fn blocked_task_risk(tasks: &[Task]) -> FactorMeasurement {
    let factor = ScoreFactor::BlockedTaskRisk;
    if tasks.is_empty() {
        return FactorMeasurement::no_data(factor, "no tasks to check for blockers");
    }

    let blocked = tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Blocked)
        .count();
    let value = percentage(blocked, tasks.len()).round();

    FactorMeasurement::new(
        factor,
        value,
        format!(
            "{blocked} of {} tasks blocked ({value:.0}% risk)",
            tasks.len()
        ),
    )
}
