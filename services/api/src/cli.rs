use crate::report::{
    run_leaderboard, run_project_risk, run_sales, run_team_performance, ProjectRiskArgs,
    ScoreInputArgs,
};
use crate::server;
use agency_scoring::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Agency Scorecard",
    about = "Serve or run project risk, team performance and sales scoring from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a JSON snapshot and print the report
    Score {
        #[command(subcommand)]
        command: ScoreCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ScoreCommand {
    /// Risk score for one project and its tasks
    ProjectRisk(ProjectRiskArgs),
    /// Performance badge for one team member's tasks and submissions
    TeamPerformance(ScoreInputArgs),
    /// Lead conversion summary with a per-rep breakdown
    Sales(ScoreInputArgs),
    /// Ranked performance for a whole team
    Leaderboard(ScoreInputArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score { command } => match command {
            ScoreCommand::ProjectRisk(args) => run_project_risk(args),
            ScoreCommand::TeamPerformance(args) => run_team_performance(args),
            ScoreCommand::Sales(args) => run_sales(args),
            ScoreCommand::Leaderboard(args) => run_leaderboard(args),
        },
    }
}
