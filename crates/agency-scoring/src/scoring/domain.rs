use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    New,
    InProgress,
    Done,
    Blocked,
}

impl TaskStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
            Self::Blocked => "Blocked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

impl PaymentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Unpaid => "unpaid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadStatus {
    New,
    Contacted,
    ProposalSent,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl LeadStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::ProposalSent => "proposal-sent",
            Self::Negotiation => "negotiation",
            Self::ClosedWon => "closed-won",
            Self::ClosedLost => "closed-lost",
        }
    }
}

/// Work item after normalization. A completion instant implies `Done`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub status: TaskStatus,
    pub due_date: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub assignee_id: Option<String>,
    pub priority: Option<String>,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Finished after its due date. Needs both instants.
    pub fn completed_late(&self) -> bool {
        matches!(
            (self.completed_at, self.due_date),
            (Some(completed), Some(due)) if completed > due
        )
    }
}

/// Deliverable handed in against a task and optionally reviewed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub task_id: String,
    pub user_id: String,
    pub status: SubmissionStatus,
    pub rating: Option<f64>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub project_role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub budget: f64,
    pub paid_amount: f64,
    pub payment_status: PaymentStatus,
    pub completed_at: Option<DateTime<Utc>>,
    pub team: Vec<TeamMember>,
}

impl Project {
    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }

    pub fn outstanding_balance(&self) -> f64 {
        (self.budget - self.paid_amount).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub status: LeadStatus,
    pub budget: f64,
    pub assigned_to: Option<String>,
    pub converted_date: Option<DateTime<Utc>>,
}

// Raw document shapes. Every field is optional and loosely typed so a snapshot
// straight from the document store deserializes; `normalizer` turns these into
// the typed records above.

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTask {
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    pub status: Value,
    pub due_date: Value,
    pub completed_at: Value,
    #[serde(deserialize_with = "lenient_text")]
    pub assignee_id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub priority: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSubmission {
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub task_id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub user_id: Option<String>,
    pub status: Value,
    pub rating: Value,
    pub reviewed_at: Value,
    #[serde(deserialize_with = "lenient_text")]
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTeamMember {
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub project_role: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawProject {
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    pub start_date: Value,
    pub end_date: Value,
    #[serde(deserialize_with = "lenient_text")]
    pub status: Option<String>,
    pub budget: Value,
    pub paid_amount: Value,
    pub payment_status: Value,
    pub completed_at: Value,
    #[serde(alias = "teamMembers", deserialize_with = "lenient_members")]
    pub team: Vec<RawTeamMember>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawLead {
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    pub status: Value,
    pub budget: Value,
    #[serde(deserialize_with = "lenient_text")]
    pub assigned_to: Option<String>,
    pub converted_date: Value,
}

/// Accepts strings, numbers, and booleans as text; anything else (or a blank
/// string) becomes `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    })
}

fn lenient_members<'de, D>(deserializer: D) -> Result<Vec<RawTeamMember>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}
