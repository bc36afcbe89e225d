//! Bookshelf CLI - Command-line interface for the book catalog

mod commands;

use anyhow::{Context, Result};
use bookshelf_core::{
    BookId, BookStatus, BookStore, FileStorage, LatencyConfig, SimulatedBackend, StoreConfig,
};
use clap::{Parser, Subcommand};
use commands::{BookFields, ListOptions};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the data directory
const DATA_DIR_ENV: &str = "BOOKSHELF_DATA_DIR";

/// Data directory used when neither flag nor environment names one
const DEFAULT_DATA_DIR: &str = "./bookshelf_data";

/// Parse and validate a page argument (must be at least 1)
fn parse_page(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("page must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Catalog directory (defaults to $BOOKSHELF_DATA_DIR, then ./bookshelf_data)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Wait like a remote service on add, edit and delete
    #[arg(long, global = true)]
    simulate_latency: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List books, one page at a time
    List {
        /// Match title or author (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Only books of this genre
        #[arg(short, long)]
        genre: Option<String>,

        /// Only books with this status (available, issued)
        #[arg(long)]
        status: Option<BookStatus>,

        /// Page to show (must be at least 1)
        #[arg(short, long, default_value = "1", value_parser = parse_page)]
        page: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a single book
    Show {
        /// Book id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a book to the catalog
    Add {
        #[command(flatten)]
        fields: BookFields,
    },

    /// Edit an existing book
    Edit {
        /// Book id
        id: String,

        #[command(flatten)]
        fields: BookFields,
    },

    /// Delete a book
    Delete {
        /// Book id
        id: String,
    },

    /// List the genres present in the catalog
    Genres,

    /// Show catalog counters
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Flag, then environment, then the default
fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookshelf_cli=debug,bookshelf_core=debug"
    } else {
        "bookshelf_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let data_dir = resolve_data_dir(cli.data_dir);
    let latency = if cli.simulate_latency {
        LatencyConfig::default()
    } else {
        LatencyConfig::instant()
    };
    tracing::debug!("Opening catalog in {}", data_dir.display());

    let store = BookStore::open(
        Arc::new(FileStorage::new(&data_dir)),
        Arc::new(SimulatedBackend::new(latency)),
        StoreConfig::default(),
    )
    .await
    .with_context(|| format!("Failed to open catalog in {}", data_dir.display()))?;

    match cli.command {
        Commands::List {
            search,
            genre,
            status,
            page,
            json,
        } => {
            let options = ListOptions {
                search,
                genre,
                status,
                page,
                json,
            };
            commands::list(&store, options)
        }

        Commands::Show { id, json } => commands::show(&store, &BookId::new(id), json),

        Commands::Add { fields } => commands::add(&store, fields).await,

        Commands::Edit { id, fields } => commands::edit(&store, &BookId::new(id), fields).await,

        Commands::Delete { id } => commands::delete(&store, &BookId::new(id)).await,

        Commands::Genres => commands::genres(&store),

        Commands::Stats { json } => commands::stats(&store, json),
    }
}
