//! car-cli - Command line tool for the pollution-aware route planner.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "car-cli",
    version,
    about = "Clean-air route planning toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: car_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    car_cmd::run(cli.command).await
}
