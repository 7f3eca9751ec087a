//! # dirtree Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Main entry point for the dirtree CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up logging based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # List the `src` directory of the current project
//! dirtree list src
//!
//! # Same, with debug logging on stderr
//! dirtree -vv list src
//!
//! # Show the effective configuration
//! dirtree --config ./ci.toml config
//! ```
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (list, config)
mod common; // Local file-system host
mod core; // Errors and configuration
mod tree; // Host-independent tree rendering

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "dirtree",
    about = "Print a directory tree, skipping binaries, generated caches and ignored paths",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file that overrides user and project settings.
    #[arg(long, global = true, env = "DIRTREE_CONFIG")]
    config: Option<PathBuf>,
}

/// All available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "ls")]
    List(commands::list::ListArgs),
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let config_path = cli.config.as_deref();
    let command_result = match cli.command {
        Commands::List(args) => commands::list::handle_list(args, config_path).await,
        Commands::Config(args) => commands::config::handle_config(args, config_path).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
