use clap::{Args, ValueEnum};
use serde::Serialize;
use talent_board::config::AppConfig;
use talent_board::error::AppError;
use talent_board::workflows::listing::{
    BoardTab, FilterCriteria, JobBoard, JobPosting, SalaryBounds,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum TabArg {
    #[default]
    Available,
    Applied,
}

impl From<TabArg> for BoardTab {
    fn from(value: TabArg) -> Self {
        match value {
            TabArg::Available => BoardTab::Available,
            TabArg::Applied => BoardTab::Applied,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct JobsArgs {
    /// Case-insensitive text matched against title and company
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Restrict to a location (repeatable)
    #[arg(long = "location")]
    pub(crate) locations: Vec<String>,
    /// Restrict to a job type such as CLT or PJ (repeatable)
    #[arg(long = "job-type")]
    pub(crate) job_types: Vec<String>,
    /// Lower salary bound (defaults to the configured floor)
    #[arg(long)]
    pub(crate) salary_min: Option<f64>,
    /// Upper salary bound (defaults to the configured ceiling)
    #[arg(long)]
    pub(crate) salary_max: Option<f64>,
    /// Mark postings with this title as applied before listing (repeatable)
    #[arg(long = "apply")]
    pub(crate) apply: Vec<String>,
    /// Which tab to print
    #[arg(long, value_enum, default_value_t = TabArg::Available)]
    pub(crate) tab: TabArg,
    /// Emit JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct TabCounts {
    available: usize,
    applied: usize,
}

#[derive(Debug, Serialize)]
struct JobsReport<'a> {
    criteria: &'a FilterCriteria,
    tabs: TabCounts,
    tab: BoardTab,
    postings: &'a [&'a JobPosting],
}

pub(crate) fn run_jobs(args: JobsArgs, config: &AppConfig) -> Result<(), AppError> {
    let mut board = JobBoard::seeded(&config.board);
    apply_args(&mut board, &args);

    let view = board.view();
    let tab = BoardTab::from(args.tab);
    debug!(visible = view.len(), tab = tab.title(), "listing postings");

    if args.json {
        let report = JobsReport {
            criteria: board.criteria(),
            tabs: TabCounts {
                available: view.count(BoardTab::Available),
                applied: view.count(BoardTab::Applied),
            },
            tab,
            postings: view.tab(tab),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", view.tab_labels().join(" | "));
    println!("Locations: {}", board.locations().join(", "));
    println!("Job types: {}", board.job_types().join(", "));
    println!();
    let postings = view.tab(tab);
    if postings.is_empty() {
        println!("No postings match the current filters.");
    }
    for posting in postings {
        print_posting(posting);
    }

    Ok(())
}

pub(crate) fn apply_args(board: &mut JobBoard, args: &JobsArgs) {
    for title in &args.apply {
        board.mark_applied(title);
    }
    if let Some(search) = &args.search {
        board.set_search_text(search.clone());
    }
    for location in &args.locations {
        if !board.criteria().selected_locations.contains(location) {
            board.toggle_location(location);
        }
    }
    for job_type in &args.job_types {
        if !board.criteria().selected_types.contains(job_type) {
            board.toggle_job_type(job_type);
        }
    }
    if args.salary_min.is_some() || args.salary_max.is_some() {
        let defaults = board.default_bounds();
        board.set_salary_bounds(SalaryBounds::new(
            args.salary_min.unwrap_or(defaults.min()),
            args.salary_max.unwrap_or(defaults.max()),
        ));
    }
}

pub(crate) fn print_posting(posting: &JobPosting) {
    let published = posting
        .published_on()
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| posting.published_date.clone());
    let action = if posting.can_apply() {
        "Candidatar-se"
    } else {
        "Candidatado"
    };
    println!(
        "- {} @ {} [{}] {} | {} | publicado {} | {}",
        posting.title,
        posting.company,
        posting.job_type,
        posting.location,
        posting.salary_range,
        published,
        action
    );
}
