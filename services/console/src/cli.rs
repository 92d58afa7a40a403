use crate::infra::load_repository;
use crate::menu::run_interactive;
use crate::query::{run_query, QueryCommand};
use application_process::config::AppConfig;
use application_process::error::AppError;
use application_process::telemetry;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "application-process",
    about = "Query the coding-school admissions dataset from the command line",
    version
)]
struct Cli {
    /// Directory with mentors.csv, applicants.csv, schools.csv and applications.csv
    /// (overrides APP_DATASET_DIR)
    #[arg(long, global = true)]
    dataset_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive menu (default command)
    Menu,
    /// Run a single query and print its results
    Query {
        #[command(subcommand)]
        command: QueryCommand,
    },
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(dir) = cli.dataset_dir {
        config.data.dataset_dir = Some(dir);
        config.data.validate()?;
    }

    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "application process console starting");

    let repository = load_repository(&config.data)?;

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => run_interactive(&repository)?,
        Command::Query { command } => {
            let stdout = io::stdout();
            run_query(command, &repository, &mut stdout.lock())?;
        }
    }

    Ok(())
}
