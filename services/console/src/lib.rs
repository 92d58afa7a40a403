mod cli;
mod infra;
mod menu;
mod query;
mod render;

use application_process::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
