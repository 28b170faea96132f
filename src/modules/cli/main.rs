//! tabgen CLI
//!
//! Command-line interface for the tabgen completion script generator.

use tabgen_cli::{Cli, Commands};
use tabgen_core::TabgenError;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<(), TabgenError> {
    let cli = Cli::parse_args();
    let tree_path = cli.tree_path().to_string();

    // Initialize logging. Scripts go to stdout, so logs stay on stderr.
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Generate(cmd) => {
            cmd.execute(&tree_path)?;
        }
        Commands::Records(cmd) => {
            cmd.execute(&tree_path)?;
        }
        Commands::Init(cmd) => {
            cmd.execute()?;
        }
        Commands::Completion(cmd) => {
            cmd.execute()?;
        }
    }

    Ok(())
}
