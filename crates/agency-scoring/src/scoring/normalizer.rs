//! Coerces loosely typed document snapshots into the typed scoring records.
//!
//! Nothing here fails: bad numbers become `0`, bad dates become absent, and
//! unknown statuses fall back to the initial state of their lifecycle.

use super::domain::{
    Lead, LeadStatus, PaymentStatus, Project, RawLead, RawProject, RawSubmission, RawTask,
    RawTeamMember, Submission, SubmissionStatus, Task, TaskStatus, TeamMember,
};
use super::weights::RATING_SCALE_MAX;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use tracing::debug;

const UNASSIGNED: &str = "unassigned";

pub fn normalize_task(raw: &RawTask) -> Task {
    let completed_at = parse_instant(&raw.completed_at, "task.completedAt");
    let mut status = parse_task_status(&raw.status);
    if completed_at.is_some() && status != TaskStatus::Done {
        debug!(
            task_id = raw.id.as_deref().unwrap_or_default(),
            from = status.label(),
            "task carries completion instant; promoting to Done"
        );
        status = TaskStatus::Done;
    }

    Task {
        id: raw.id.clone().unwrap_or_default(),
        status,
        due_date: parse_instant(&raw.due_date, "task.dueDate"),
        completed_at,
        assignee_id: raw.assignee_id.clone(),
        priority: raw.priority.clone(),
    }
}

pub fn normalize_tasks(raw: &[RawTask]) -> Vec<Task> {
    raw.iter().map(normalize_task).collect()
}

pub fn normalize_submission(raw: &RawSubmission) -> Submission {
    Submission {
        id: raw.id.clone().unwrap_or_default(),
        task_id: raw.task_id.clone().unwrap_or_default(),
        user_id: raw.user_id.clone().unwrap_or_default(),
        status: parse_submission_status(&raw.status),
        rating: parse_rating(&raw.rating),
        reviewed_at: parse_instant(&raw.reviewed_at, "submission.reviewedAt"),
        feedback: raw.feedback.clone(),
    }
}

pub fn normalize_submissions(raw: &[RawSubmission]) -> Vec<Submission> {
    raw.iter().map(normalize_submission).collect()
}

pub fn normalize_team_member(raw: &RawTeamMember) -> TeamMember {
    let id = raw.id.clone().unwrap_or_default();
    TeamMember {
        name: raw.name.clone().unwrap_or_else(|| id.clone()),
        id,
        role: raw.role.clone().unwrap_or_default(),
        project_role: raw.project_role.clone(),
    }
}

pub fn normalize_team_members(raw: &[RawTeamMember]) -> Vec<TeamMember> {
    raw.iter().map(normalize_team_member).collect()
}

pub fn normalize_project(raw: &RawProject) -> Project {
    Project {
        id: raw.id.clone().unwrap_or_default(),
        name: raw.name.clone(),
        start_date: parse_instant(&raw.start_date, "project.startDate"),
        end_date: parse_instant(&raw.end_date, "project.endDate"),
        status: raw.status.clone(),
        budget: coerce_number(&raw.budget, "project.budget"),
        paid_amount: coerce_number(&raw.paid_amount, "project.paidAmount"),
        payment_status: parse_payment_status(&raw.payment_status),
        completed_at: parse_instant(&raw.completed_at, "project.completedAt"),
        team: normalize_team_members(&raw.team),
    }
}

pub fn normalize_lead(raw: &RawLead) -> Lead {
    Lead {
        id: raw.id.clone().unwrap_or_default(),
        status: parse_lead_status(&raw.status),
        budget: coerce_number(&raw.budget, "lead.budget"),
        assigned_to: raw.assigned_to.clone(),
        converted_date: parse_instant(&raw.converted_date, "lead.convertedDate"),
    }
}

pub fn normalize_leads(raw: &[RawLead]) -> Vec<Lead> {
    raw.iter().map(normalize_lead).collect()
}

/// Owner key used when grouping leads by rep.
pub(crate) fn rep_key(lead: &Lead) -> &str {
    lead.assigned_to.as_deref().unwrap_or(UNASSIGNED)
}

/// Parses the textual date forms callers hand us directly (CLI flags, request
/// overrides). Same rules as document fields.
pub fn parse_instant_str(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub(crate) fn parse_instant(value: &Value, field: &'static str) -> Option<DateTime<Utc>> {
    let parsed = match value {
        Value::Null => return None,
        Value::String(text) if text.trim().is_empty() => return None,
        Value::String(text) => parse_instant_str(text),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|millis| millis as i64))
            .and_then(DateTime::from_timestamp_millis),
        Value::Object(map) => {
            let seconds = map
                .get("seconds")
                .or_else(|| map.get("_seconds"))
                .and_then(Value::as_i64);
            let nanos = map
                .get("nanoseconds")
                .or_else(|| map.get("_nanoseconds"))
                .and_then(Value::as_u64)
                .and_then(|nanos| u32::try_from(nanos).ok())
                .unwrap_or(0);
            seconds.and_then(|seconds| DateTime::from_timestamp(seconds, nanos))
        }
        Value::Bool(_) | Value::Array(_) => None,
    };

    if parsed.is_none() {
        debug!(field, raw = %value, "unparseable date treated as absent");
    }
    parsed
}

pub(crate) fn coerce_number(value: &Value, field: &'static str) -> f64 {
    match numeric(value) {
        Some(number) => number,
        None => {
            if !value.is_null() {
                debug!(field, raw = %value, "non-numeric value defaulted to 0");
            }
            0.0
        }
    }
}

fn numeric(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

fn parse_rating(value: &Value) -> Option<f64> {
    let rating = numeric(value)?;
    Some(rating.clamp(0.0, RATING_SCALE_MAX))
}

/// Lowercases and folds spaces/dashes onto underscores: `"In Progress"`,
/// `"in-progress"` and `"IN_PROGRESS"` all become `"in_progress"`.
fn status_key(value: &Value) -> Option<String> {
    let text = value.as_str()?.trim();
    if text.is_empty() {
        return None;
    }
    Some(
        text.chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect(),
    )
}

fn parse_task_status(value: &Value) -> TaskStatus {
    let fallback = TaskStatus::New;
    match status_key(value).as_deref() {
        Some("in_progress") => TaskStatus::InProgress,
        Some("done" | "completed" | "complete") => TaskStatus::Done,
        Some("blocked") => TaskStatus::Blocked,
        Some("new") | None => fallback,
        Some(_) => unknown_status(value, "task.status", fallback.label(), fallback),
    }
}

fn parse_submission_status(value: &Value) -> SubmissionStatus {
    let fallback = SubmissionStatus::Pending;
    match status_key(value).as_deref() {
        Some("approved") => SubmissionStatus::Approved,
        Some("rejected") => SubmissionStatus::Rejected,
        Some("pending") | None => fallback,
        Some(_) => unknown_status(value, "submission.status", fallback.label(), fallback),
    }
}

fn parse_payment_status(value: &Value) -> PaymentStatus {
    let fallback = PaymentStatus::Unpaid;
    match status_key(value).as_deref() {
        Some("paid") => PaymentStatus::Paid,
        Some("unpaid") | None => fallback,
        Some(_) => unknown_status(value, "project.paymentStatus", fallback.label(), fallback),
    }
}

fn parse_lead_status(value: &Value) -> LeadStatus {
    let fallback = LeadStatus::New;
    match status_key(value).as_deref() {
        Some("contacted") => LeadStatus::Contacted,
        Some("proposal_sent") => LeadStatus::ProposalSent,
        Some("negotiation") => LeadStatus::Negotiation,
        Some("closed_won") => LeadStatus::ClosedWon,
        Some("closed_lost") => LeadStatus::ClosedLost,
        Some("new") | None => fallback,
        Some(_) => unknown_status(value, "lead.status", fallback.label(), fallback),
    }
}

fn unknown_status<T>(value: &Value, field: &'static str, label: &'static str, fallback: T) -> T {
    debug!(field, raw = %value, fallback = label, "unknown status replaced by lifecycle default");
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn dates_accept_common_document_forms() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 14, 0, 0, 0).single();

        assert_eq!(parse_instant(&json!("2025-03-14"), "t"), expected);
        assert_eq!(parse_instant(&json!("2025-03-14T00:00:00Z"), "t"), expected);
        assert_eq!(parse_instant(&json!("2025-03-14T00:00:00"), "t"), expected);
        assert_eq!(parse_instant(&json!(1_741_910_400_000_i64), "t"), expected);
        assert_eq!(
            parse_instant(&json!({ "seconds": 1_741_910_400_i64, "nanoseconds": 0 }), "t"),
            expected
        );
        assert_eq!(
            parse_instant(&json!({ "_seconds": 1_741_910_400_i64 }), "t"),
            expected
        );
    }

    #[test]
    fn invalid_dates_become_absent() {
        for value in [
            json!(null),
            json!(""),
            json!("   "),
            json!("next tuesday"),
            json!("2025-13-45"),
            json!(true),
            json!([2025, 3, 14]),
            json!({ "when": "soon" }),
        ] {
            assert_eq!(parse_instant(&value, "t"), None, "value {value}");
        }
    }

    #[test]
    fn numbers_default_to_zero() {
        assert_eq!(coerce_number(&json!(1250.5), "n"), 1250.5);
        assert_eq!(coerce_number(&json!(" 900 "), "n"), 900.0);
        assert_eq!(coerce_number(&json!("twelve"), "n"), 0.0);
        assert_eq!(coerce_number(&json!(null), "n"), 0.0);
        assert_eq!(coerce_number(&json!({ "amount": 3 }), "n"), 0.0);
        assert_eq!(coerce_number(&json!("NaN"), "n"), 0.0);
    }

    #[test]
    fn ratings_keep_only_numeric_values_within_scale() {
        assert_eq!(parse_rating(&json!(4.5)), Some(4.5));
        assert_eq!(parse_rating(&json!("3")), Some(3.0));
        assert_eq!(parse_rating(&json!(9)), Some(5.0));
        assert_eq!(parse_rating(&json!(-1)), Some(0.0));
        assert_eq!(parse_rating(&json!("great")), None);
        assert_eq!(parse_rating(&json!(null)), None);
    }

    #[test]
    fn statuses_match_loosely() {
        assert_eq!(parse_task_status(&json!("In Progress")), TaskStatus::InProgress);
        assert_eq!(parse_task_status(&json!("in-progress")), TaskStatus::InProgress);
        assert_eq!(parse_task_status(&json!("DONE")), TaskStatus::Done);
        assert_eq!(parse_task_status(&json!("Blocked")), TaskStatus::Blocked);
        assert_eq!(parse_task_status(&json!("someday")), TaskStatus::New);
        assert_eq!(parse_task_status(&json!(7)), TaskStatus::New);

        assert_eq!(parse_lead_status(&json!("closed-won")), LeadStatus::ClosedWon);
        assert_eq!(parse_lead_status(&json!("Proposal Sent")), LeadStatus::ProposalSent);
        assert_eq!(parse_payment_status(&json!("PAID")), PaymentStatus::Paid);
        assert_eq!(parse_payment_status(&json!("partial")), PaymentStatus::Unpaid);
        assert_eq!(
            parse_submission_status(&json!("approved")),
            SubmissionStatus::Approved
        );
        assert_eq!(
            parse_submission_status(&json!("needs changes")),
            SubmissionStatus::Pending
        );
        assert_eq!(parse_lead_status(&json!("cold")), LeadStatus::New);
    }

    #[test]
    fn status_labels_round_trip_through_the_normalizer() {
        for status in [
            LeadStatus::New,
            LeadStatus::Contacted,
            LeadStatus::ProposalSent,
            LeadStatus::Negotiation,
            LeadStatus::ClosedWon,
            LeadStatus::ClosedLost,
        ] {
            assert_eq!(parse_lead_status(&json!(status.label())), status);
        }
        for status in [
            SubmissionStatus::Pending,
            SubmissionStatus::Approved,
            SubmissionStatus::Rejected,
        ] {
            assert_eq!(parse_submission_status(&json!(status.label())), status);
        }
        for status in [PaymentStatus::Paid, PaymentStatus::Unpaid] {
            assert_eq!(parse_payment_status(&json!(status.label())), status);
        }
        for status in [
            TaskStatus::New,
            TaskStatus::InProgress,
            TaskStatus::Done,
            TaskStatus::Blocked,
        ] {
            assert_eq!(parse_task_status(&json!(status.label())), status);
        }
    }

    #[test]
    fn completion_instant_promotes_task_to_done() {
        let raw = RawTask {
            id: Some("t-1".to_string()),
            status: json!("In Progress"),
            completed_at: json!("2025-03-14"),
            ..RawTask::default()
        };

        let task = normalize_task(&raw);
        assert_eq!(task.status, TaskStatus::Done);
        assert!(task.completed_at.is_some());
        assert!(task.due_date.is_none());
    }

    #[test]
    fn team_member_name_falls_back_to_id() {
        let member = normalize_team_member(&RawTeamMember {
            id: Some("u-7".to_string()),
            ..RawTeamMember::default()
        });
        assert_eq!(member.name, "u-7");
        assert_eq!(member.role, "");
    }
}
