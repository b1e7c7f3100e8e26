//! Storefront CLI - static catalog and product page generator.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Generate a static storefront from a JSON product catalog")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to storefront.toml config file
    #[arg(short, long, default_value = "storefront.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Inject product cards into the catalog page and write detail pages (default)
    Build {
        /// Product catalog JSON file
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Catalog page to rewrite in place
        #[arg(short, long)]
        page: Option<PathBuf>,

        /// Directory for the detail pages
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Scaffold a sample catalog and catalog page
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Fatal errors go through the same subscriber as progress lines.
    match execute(cli.command, &cli.config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Option<Commands>, config: &Path) -> Result<()> {
    match command {
        Some(Commands::Build { data, page, output }) => {
            let overrides = commands::build::Overrides { data, page, output };
            commands::build::run(config, overrides)
        }
        Some(Commands::Init { yes }) => commands::init::run(yes),
        None => commands::build::run(config, commands::build::Overrides::default()),
    }
}
