//! Mahatta CLI - Storefront driver for the Mahatta Art state core.
//!
//! # Usage
//!
//! ```bash
//! # Print the catalog
//! mahatta catalog
//!
//! # Query a listing
//! mahatta listing --category Modern --sort price-desc
//!
//! # Replay a shopper session from a script
//! mahatta run session.txt
//!
//! # Drive a session interactively (one action per line on stdin)
//! mahatta repl
//! ```
//!
//! # Commands
//!
//! - `catalog` - Print every product
//! - `listing` - Print a filtered, sorted listing
//! - `run` - Replay a script of shopper actions
//! - `repl` - Read shopper actions from stdin
//!
//! Views are written to stdout as JSON; logs go to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mahatta_core::SortKey;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod script;

use commands::listing::ListingQuery;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "mahatta")]
#[command(author, version, about = "Mahatta Art storefront CLI")]
struct Cli {
    /// YAML catalog seed (overrides `MAHATTA_CATALOG`)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Stay on the current page after adding to cart
    #[arg(long, global = true)]
    stay_on_add: bool,

    /// Print single-line JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the product catalog
    Catalog,
    /// Print a filtered, sorted listing
    Listing {
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        room_type: Option<String>,

        #[arg(long)]
        mood: Option<String>,

        #[arg(long)]
        sub_category: Option<String>,

        /// Sort order (`relevance`, `newest`, `price-asc`, `price-desc`)
        #[arg(short, long, default_value = "relevance")]
        sort: SortKey,
    },
    /// Replay a script of shopper actions
    Run {
        /// Script file, one action per line
        script: PathBuf,
    },
    /// Read shopper actions from stdin
    Repl,
}

fn main() {
    // Logs go to stderr so stdout carries only views.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mahatta_cli=info,mahatta_core=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::from_env()?;
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }
    if cli.stay_on_add {
        config.store.open_cart_on_add = false;
    }

    match cli.command {
        Commands::Catalog => commands::catalog::show(&config, cli.compact)?,
        Commands::Listing {
            category,
            room_type,
            mood,
            sub_category,
            sort,
        } => {
            let query = ListingQuery {
                category,
                room_type,
                mood,
                sub_category,
                sort,
            };
            commands::listing::run(&config, query, cli.compact)?;
        }
        Commands::Run { script } => {
            commands::session::run_script(&config, &script, cli.compact)?;
        }
        Commands::Repl => commands::session::repl(&config, cli.compact)?,
    }
    Ok(())
}
