mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{score, stats};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    match &cli.command {
        Commands::Score(args) => score::run(&cli, args),
        Commands::Stats(args) => stats::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
