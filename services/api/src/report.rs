use crate::payload::{
    ProjectRiskRequest, ProjectRiskResponse, SalesConversionRequest, SalesConversionResponse,
    TeamLeaderboardRequest, TeamLeaderboardResponse, TeamPerformanceRequest,
};
use agency_scoring::error::AppError;
use agency_scoring::scoring::{FactorScore, ScoreResult};
use chrono::{DateTime, Utc};
use clap::Args;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ProjectRiskArgs {
    /// JSON file with `project`, `tasks` and an optional `now`
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Reference instant (RFC 3339 or YYYY-MM-DD). Overrides `now` in the input.
    #[arg(long, value_parser = crate::infra::parse_instant)]
    pub(crate) now: Option<DateTime<Utc>>,
    /// Print the raw JSON result instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreInputArgs {
    /// JSON file shaped like the matching HTTP request body
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the raw JSON result instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_project_risk(args: ProjectRiskArgs) -> Result<(), AppError> {
    let mut request: ProjectRiskRequest = read_request(&args.input)?;
    if args.now.is_some() {
        request.now = args.now;
    }

    let response = request.evaluate(Utc::now());
    if args.json {
        return print_json(&response);
    }

    render_project_risk(&response);
    Ok(())
}

pub(crate) fn run_team_performance(args: ScoreInputArgs) -> Result<(), AppError> {
    let request: TeamPerformanceRequest = read_request(&args.input)?;
    let result = request.evaluate();
    if args.json {
        return print_json(&result);
    }

    println!("Team member performance");
    render_score(&result);
    Ok(())
}

pub(crate) fn run_sales(args: ScoreInputArgs) -> Result<(), AppError> {
    let request: SalesConversionRequest = read_request(&args.input)?;
    let response = request.evaluate();
    if args.json {
        return print_json(&response);
    }

    render_sales(&response);
    Ok(())
}

pub(crate) fn run_leaderboard(args: ScoreInputArgs) -> Result<(), AppError> {
    let request: TeamLeaderboardRequest = read_request(&args.input)?;
    let response = request.evaluate();
    if args.json {
        return print_json(&response);
    }

    render_leaderboard(&response);
    Ok(())
}

fn read_request<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_project_risk(response: &ProjectRiskResponse) {
    let name = response
        .project_name
        .as_deref()
        .unwrap_or(response.project_id.as_str());
    println!("Project risk: {name}");
    println!(
        "Evaluated {} across {} task{}",
        response.evaluated_at.format("%Y-%m-%d %H:%M UTC"),
        response.task_count,
        if response.task_count == 1 { "" } else { "s" }
    );
    render_score(&response.result);
}

fn render_score(result: &ScoreResult) {
    println!("Overall: {}", result.summary());
    println!("\nFactors");
    for factor in &result.factors {
        println!("{}", factor_line(factor));
    }
}

fn factor_line(factor: &FactorScore) -> String {
    format!(
        "- {} {:.0} x {:.2} = {:.2}: {}",
        factor.name, factor.value, factor.weight, factor.weighted_contribution, factor.explanation
    )
}

fn render_sales(response: &SalesConversionResponse) {
    let summary = &response.summary;
    println!("Sales conversion");
    println!("{}", summary.explanation);
    println!(
        "Revenue {:.2} from {} closed-won (average deal {:.2}), {} closed-lost",
        summary.total_revenue, summary.closed_won, summary.average_deal_size, summary.closed_lost
    );

    if response.by_rep.is_empty() {
        return;
    }

    println!("\nBy representative");
    for rep in &response.by_rep {
        println!(
            "- {}: {} of {} won ({:.1}%), revenue {:.2}",
            rep.rep_id,
            rep.summary.closed_won,
            rep.summary.total_leads,
            rep.summary.conversion_rate,
            rep.summary.total_revenue
        );
    }
}

fn render_leaderboard(response: &TeamLeaderboardResponse) {
    if response.entries.is_empty() {
        println!("Team leaderboard: no members");
        return;
    }

    println!("Team leaderboard");
    for entry in &response.entries {
        println!(
            "{}. {} ({}) {}",
            entry.rank,
            entry.name,
            entry.role,
            entry.result.summary()
        );
    }
}
