use super::compute_team_member_performance;
use super::domain::{Submission, Task, TeamMember};
use super::formatter::ScoreResult;
use super::weights::ScoreFactor;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub member_id: String,
    pub name: String,
    pub role: String,
    pub result: ScoreResult,
}

/// Scores each member over the tasks assigned to them and the submissions
/// they authored, then ranks by overall score.
///
/// Ties fall back to completion rate (higher first), then name. A member id
/// listed twice is scored once; members without an id are left off the board
/// since no task or submission can be attributed to them.
pub fn compute_team_leaderboard(
    members: &[TeamMember],
    tasks: &[Task],
    submissions: &[Submission],
) -> Vec<LeaderboardEntry> {
    let mut seen = HashSet::new();
    let mut entries: Vec<LeaderboardEntry> = members
        .iter()
        .filter(|member| !member.id.is_empty() && seen.insert(member.id.as_str()))
        .map(|member| {
            let assigned: Vec<Task> = tasks
                .iter()
                .filter(|task| task.assignee_id.as_deref() == Some(member.id.as_str()))
                .cloned()
                .collect();
            let authored: Vec<Submission> = submissions
                .iter()
                .filter(|submission| submission.user_id == member.id)
                .cloned()
                .collect();

            LeaderboardEntry {
                rank: 0,
                member_id: member.id.clone(),
                name: member.name.clone(),
                role: member
                    .project_role
                    .clone()
                    .unwrap_or_else(|| member.role.clone()),
                result: compute_team_member_performance(&assigned, &authored),
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.result
            .overall
            .cmp(&a.result.overall)
            .then_with(|| {
                b.result
                    .value_of(ScoreFactor::TaskCompletionRate)
                    .total_cmp(&a.result.value_of(ScoreFactor::TaskCompletionRate))
            })
            .then_with(|| a.name.cmp(&b.name))
    });

    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index + 1;
    }
    entries
}
