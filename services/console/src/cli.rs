use crate::demo::{run_demo, DemoArgs};
use crate::jobs::{run_jobs, JobsArgs};
use clap::{Parser, Subcommand};
use talent_board::config::AppConfig;
use talent_board::error::AppError;
use talent_board::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Mural de Talentos",
    about = "Drive the talent board listing and account flows from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List seeded job postings with optional filters (default command)
    Jobs(JobsArgs),
    /// Run a scripted session covering registration, listing, profile and publishing
    Demo(DemoArgs),
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(
        environment = config.environment.as_str(),
        collection = %config.publishing.vacancy_collection,
        "configuration loaded"
    );

    let command = cli
        .command
        .unwrap_or_else(|| Command::Jobs(JobsArgs::default()));

    match command {
        Command::Jobs(args) => run_jobs(args, &config),
        Command::Demo(args) => run_demo(args, &config).await,
    }
}
