// ABOUTME: Entry point for the kivotos CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use kivotos::config::{self, Config};
use kivotos::error::{Error, Result};
use kivotos::export;
use kivotos::runtime::{BollardRuntime, RuntimeError, detect_local};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { force } => {
            let cwd = env::current_dir()?;
            config::init_config(&cwd, force)?;
            println!("Created {}", config::CONFIG_FILENAME);
            Ok(())
        }
        Commands::Export {
            output_dir,
            runtime,
            socket,
        } => {
            let cwd = env::current_dir()?;
            let mut config = Config::discover_or_default(&cwd)?;

            // CLI flags override the config file
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            if let Some(runtime) = runtime {
                config.runtime.runtime = Some(runtime.parse().map_err(Error::InvalidConfig)?);
            }
            if let Some(socket) = socket {
                config.runtime.socket = Some(socket);
            }

            export_environment(config).await
        }
    }
}

/// Run one full export against the local runtime.
async fn export_environment(config: Config) -> Result<()> {
    println!("  → Detecting runtime...");
    let info = detect_local(Some(&config.runtime)).map_err(RuntimeError::from)?;
    println!(
        "  → Found {} at {}",
        info.runtime_type, info.socket_path
    );

    let source = BollardRuntime::connect(&info).map_err(RuntimeError::from)?;

    println!("  → Capturing containers and networks...");
    let path = export::export(&source, &config.output_dir).await?;

    println!("  ✓ Backup written to {}", path.display());
    Ok(())
}
