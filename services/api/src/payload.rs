//! JSON bodies shared by the HTTP endpoints and the `score` CLI commands.

use crate::infra::deserialize_optional_instant;
use agency_scoring::scoring::normalizer::{
    normalize_leads, normalize_project, normalize_submissions, normalize_tasks,
    normalize_team_members,
};
use agency_scoring::scoring::{
    compute_project_risk, compute_sales_by_rep, compute_sales_conversion,
    compute_team_leaderboard, compute_team_member_performance, LeaderboardEntry, RawLead,
    RawProject, RawSubmission, RawTask, RawTeamMember, RepSalesSummary, SalesConversionSummary,
    ScoreResult,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectRiskRequest {
    pub(crate) project: RawProject,
    #[serde(default)]
    pub(crate) tasks: Vec<RawTask>,
    /// Reference instant; defaults to the time of the request.
    #[serde(default, deserialize_with = "deserialize_optional_instant")]
    pub(crate) now: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProjectRiskResponse {
    pub(crate) project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) project_name: Option<String>,
    pub(crate) evaluated_at: DateTime<Utc>,
    pub(crate) task_count: usize,
    #[serde(flatten)]
    pub(crate) result: ScoreResult,
}

impl ProjectRiskRequest {
    pub(crate) fn evaluate(self, fallback_now: DateTime<Utc>) -> ProjectRiskResponse {
        let now = self.now.unwrap_or(fallback_now);
        let project = normalize_project(&self.project);
        let tasks = normalize_tasks(&self.tasks);
        let result = compute_project_risk(&project, &tasks, now);

        ProjectRiskResponse {
            project_id: project.id,
            project_name: project.name,
            evaluated_at: now,
            task_count: tasks.len(),
            result,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TeamPerformanceRequest {
    pub(crate) tasks: Vec<RawTask>,
    pub(crate) submissions: Vec<RawSubmission>,
}

impl TeamPerformanceRequest {
    pub(crate) fn evaluate(self) -> ScoreResult {
        let tasks = normalize_tasks(&self.tasks);
        let submissions = normalize_submissions(&self.submissions);
        compute_team_member_performance(&tasks, &submissions)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SalesConversionRequest {
    pub(crate) leads: Vec<RawLead>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SalesConversionResponse {
    #[serde(flatten)]
    pub(crate) summary: SalesConversionSummary,
    pub(crate) by_rep: Vec<RepSalesSummary>,
}

impl SalesConversionRequest {
    pub(crate) fn evaluate(self) -> SalesConversionResponse {
        let leads = normalize_leads(&self.leads);
        SalesConversionResponse {
            summary: compute_sales_conversion(&leads),
            by_rep: compute_sales_by_rep(&leads),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TeamLeaderboardRequest {
    pub(crate) members: Vec<RawTeamMember>,
    pub(crate) tasks: Vec<RawTask>,
    pub(crate) submissions: Vec<RawSubmission>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TeamLeaderboardResponse {
    pub(crate) entries: Vec<LeaderboardEntry>,
}

impl TeamLeaderboardRequest {
    pub(crate) fn evaluate(self) -> TeamLeaderboardResponse {
        let members = normalize_team_members(&self.members);
        let tasks = normalize_tasks(&self.tasks);
        let submissions = normalize_submissions(&self.submissions);
        TeamLeaderboardResponse {
            entries: compute_team_leaderboard(&members, &tasks, &submissions),
        }
    }
}
