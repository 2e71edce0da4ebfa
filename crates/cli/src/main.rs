//! ShopEase CLI - Drive the storefront state layer from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Replay the reference cart walkthrough
//! shopease demo
//!
//! # Load a catalog export and put one of everything in the cart
//! shopease catalog products.json --quantity 2
//!
//! # Check a sign-up form
//! shopease signup --name "Jane Doe" --email jane@example.com \
//!     --password Sup3rSecret --confirm-password Sup3rSecret --accept-terms
//! ```
//!
//! # Commands
//!
//! - `demo` - Walk a cart through add, merge, update, remove and logout
//! - `catalog` - Fill a cart from a JSON product list and summarise it
//! - `signup` - Validate sign-up fields and show the registration body

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::{CliConfig, LogFormat};

#[derive(Parser)]
#[command(name = "shopease")]
#[command(author, version, about = "ShopEase storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the reference cart walkthrough
    Demo,
    /// Fill a cart from a JSON array of products
    Catalog {
        /// Path to the product list
        path: PathBuf,

        /// Units of each product to add
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Validate a sign-up form
    Signup {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,

        /// Password confirmation
        #[arg(long)]
        confirm_password: String,

        /// Accept the terms of service
        #[arg(long)]
        accept_terms: bool,
    },
}

fn init_tracing(format: LogFormat) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopease_storefront=info,shopease_cli=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Pretty => registry
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

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Failed to load configuration: {e}");
            return ExitCode::from(2);
        }
    };

    init_tracing(config.log_format);

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Demo => commands::demo::run(config.currency)?,
        Commands::Catalog { path, quantity } => {
            commands::catalog::run(&path, quantity, config.currency)?;
        }
        Commands::Signup {
            name,
            email,
            password,
            confirm_password,
            accept_terms,
        } => {
            commands::signup::run(name, email, password, confirm_password, accept_terms)?;
        }
    }
    Ok(())
}
