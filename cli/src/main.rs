use anyhow::Result;
use clap::Parser;

mod args;

use args::{Cli, Commands};
use cli::commands::{generate, inspect};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate {
            input,
            output,
            direct,
        } => generate::generate_file(input, output, *direct),
        Commands::Inspect { input } => inspect::inspect_file(input),
    }
}
