use crate::demo::{run_demo, run_discount_demo, run_visa_demo, DiscountArgs, VisaArgs};
use clap::{Parser, Subcommand};
use patternworks::config::AppConfig;
use patternworks::error::AppError;
use patternworks::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "patternworks",
    about = "Run the discount notification and visa evaluation demos from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Announce discounts and notify wishlist subscribers
    Discounts(DiscountArgs),
    /// Evaluate the demo visa applicants
    Visa(VisaArgs),
    /// Run both demos in sequence (default command)
    Demo(DiscountArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, "configuration loaded");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DiscountArgs::default()));

    match command {
        Command::Discounts(args) => run_discount_demo(args, &config),
        Command::Visa(args) => run_visa_demo(args, &config),
        Command::Demo(args) => run_demo(args, &config),
    }
}
