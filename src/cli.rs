// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kivotos")]
#[command(about = "Declarative environment backup for Docker and Podman")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new kivotos.yml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Export the live container environment to a backup document
    Export {
        /// Directory to write the backup document into
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Runtime to connect to (docker or podman), skipping auto-detection
        #[arg(long)]
        runtime: Option<String>,

        /// Runtime socket path
        #[arg(long)]
        socket: Option<String>,
    },
}
