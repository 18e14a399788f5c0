mod cli;
mod demo;
mod infra;

use patternworks::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
