use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use seqdiff::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("seqdiff=debug,info")
    } else {
        EnvFilter::new("seqdiff=info")
    };

    // Logs go to stderr so the table can be written to stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Tally(args) => {
            cli::tally::run(args)?;
        }
        cli::Commands::Summary(args) => {
            cli::summary::run(args)?;
        }
    }

    Ok(())
}
