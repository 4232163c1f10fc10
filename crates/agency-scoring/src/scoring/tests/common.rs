use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::scoring::domain::{
    Lead, LeadStatus, PaymentStatus, Project, Submission, SubmissionStatus, Task, TaskStatus,
    TeamMember,
};

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 16, 12, 0, 0)
        .single()
        .expect("valid reference instant")
}

pub(super) fn days_ago(days: i64) -> DateTime<Utc> {
    now() - Duration::days(days)
}

pub(super) fn days_ahead(days: i64) -> DateTime<Utc> {
    now() + Duration::days(days)
}

pub(super) fn task(id: &str, status: TaskStatus) -> Task {
    Task {
        id: id.to_string(),
        status,
        due_date: None,
        completed_at: None,
        assignee_id: None,
        priority: None,
    }
}

pub(super) fn open_task(id: &str, due: DateTime<Utc>) -> Task {
    Task {
        due_date: Some(due),
        ..task(id, TaskStatus::InProgress)
    }
}

pub(super) fn finished_task(id: &str, due: DateTime<Utc>, completed: DateTime<Utc>) -> Task {
    Task {
        due_date: Some(due),
        completed_at: Some(completed),
        ..task(id, TaskStatus::Done)
    }
}

pub(super) fn on_time_task(id: &str) -> Task {
    finished_task(id, days_ago(1), days_ago(3))
}

pub(super) fn late_task(id: &str) -> Task {
    finished_task(id, days_ago(5), days_ago(2))
}

pub(super) fn assigned(mut task: Task, assignee: &str) -> Task {
    task.assignee_id = Some(assignee.to_string());
    task
}

/// Ten tasks with `done` of them finished on time and the rest still open
/// with a future due date.
pub(super) fn tasks_with_completion(done: usize) -> Vec<Task> {
    (0..10)
        .map(|index| {
            let id = format!("t-{index}");
            if index < done {
                on_time_task(&id)
            } else {
                open_task(&id, days_ahead(30))
            }
        })
        .collect()
}

pub(super) fn project(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Project {
    Project {
        id: "p-1".to_string(),
        name: Some("Rebrand".to_string()),
        start_date: start,
        end_date: end,
        status: Some("active".to_string()),
        budget: 0.0,
        paid_amount: 0.0,
        payment_status: PaymentStatus::Unpaid,
        completed_at: None,
        team: Vec::new(),
    }
}

pub(super) fn submission(
    id: &str,
    user: &str,
    status: SubmissionStatus,
    rating: Option<f64>,
) -> Submission {
    Submission {
        id: id.to_string(),
        task_id: format!("task-for-{id}"),
        user_id: user.to_string(),
        status,
        rating,
        reviewed_at: None,
        feedback: None,
    }
}

pub(super) fn lead(id: &str, status: LeadStatus, budget: f64, rep: Option<&str>) -> Lead {
    Lead {
        id: id.to_string(),
        status,
        budget,
        assigned_to: rep.map(str::to_string),
        converted_date: None,
    }
}

pub(super) fn member(id: &str, name: &str) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        role: "designer".to_string(),
        project_role: None,
    }
}
