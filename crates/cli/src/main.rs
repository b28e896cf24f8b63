//! Premium Vape CLI - Browse the storefront from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Print the catalog
//! pv-cli catalog
//!
//! # Print the catalog as JSON
//! pv-cli catalog --json
//!
//! # Print the page with a given section active
//! pv-cli section delivery
//!
//! # Start an interactive shopping session
//! pv-cli shell
//! ```
//!
//! # Commands
//!
//! - `catalog` - List catalog products
//! - `section` - Render the page for one section
//! - `shell` - Interactive session with a cart

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand, ValueEnum};
use premium_vape_storefront::StorefrontConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "pv-cli")]
#[command(author, version, about = "Premium Vape storefront in the terminal")]
struct Cli {
    /// Log output format (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Catalog {
        /// Print products as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Render the page with a section active
    Section {
        /// Section key (`catalog`, `about`, `delivery`, `reviews`, `contacts`)
        name: String,
    },
    /// Start an interactive shopping session
    Shell,
}

fn init_tracing(format: LogFormat) {
    // Defaults to info for the CLI and the library if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "premium_vape_storefront=info,pv_cli=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Catalog { json } => {
            commands::catalog::list(&config, json, std::io::stdout().lock())?;
        }
        Commands::Section { name } => {
            commands::section::show(&config, &name, std::io::stdout().lock())?;
        }
        Commands::Shell => commands::shell::start(config)?,
    }
    Ok(())
}
