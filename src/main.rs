use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{execute_command, Cli};

/// Main entry point for the program
#[tokio::main]
async fn main() {
    // Initialize the logging subsystem
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Parse and execute the CLI command
    if let Err(e) = execute_command(cli).await {
        eprintln!("ERROR: {e}");
        ::std::process::exit(exitcode::DATAERR);
    }
}
