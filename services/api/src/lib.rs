mod cli;
mod infra;
mod payload;
mod report;
mod routes;
mod server;

use agency_scoring::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
