mod cli;
mod demo;
mod infra;
mod jobs;

use talent_board::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
