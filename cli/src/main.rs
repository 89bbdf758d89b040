mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{redistrict, score};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    match &cli.command {
        Commands::Redistrict(args) => redistrict::run(&cli, args),
        Commands::Score(args) => score::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
