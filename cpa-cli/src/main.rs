//! CPA CLI - Command line tool for crop and planting-window recommendations.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cpa-cli",
    version,
    about = "Crop suitability and planting-window advisor"
)]
struct Cli {
    #[command(subcommand)]
    command: cpa_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cpa_cmd::run(cli.command)
}
