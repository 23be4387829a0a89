//! jsxmith CLI - convert HTML pages into JSX components.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;
mod naming;
mod render;
mod templates;

#[derive(Parser)]
#[command(name = "jsxmith")]
#[command(about = "Convert HTML pages into JSX components")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to jsxmith.toml config file
    #[arg(short, long, default_value = "jsxmith.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default jsxmith.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Convert one HTML or JSON tree file
    Convert {
        /// Input file (.html, .htm or .json)
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Component name (defaults to the input file stem)
        #[arg(short, long)]
        name: Option<String>,

        /// Emit bare JSX without the component wrapper
        #[arg(long)]
        fragment: bool,
    },

    /// Convert every HTML file under a directory
    Batch {
        /// Directory to scan
        dir: PathBuf,

        /// Output directory for generated .tsx files
        #[arg(short, long, default_value = "components")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for converted output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Convert {
            input,
            output,
            name,
            fragment,
        } => {
            let config = config::load_config(&cli.config)?;
            commands::convert::run(input, output, name, fragment, config).await?;
        }
        Commands::Batch { dir, output } => {
            let config = config::load_config(&cli.config)?;
            commands::batch::run(dir, output, config).await?;
        }
    }

    Ok(())
}
