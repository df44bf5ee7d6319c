//! Literate CLI - browse the sample book catalog from the terminal

mod app;
mod commands;
mod render;

use anyhow::Result;
use app::App;
use clap::{Parser, Subcommand};
use commands::Selector;
use literate_core::Section;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "literate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding cover images
    #[arg(long, global = true, env = "LITERATE_COVERS")]
    covers: Option<PathBuf>,

    /// Catalog section (listings, library)
    #[arg(short, long, global = true, default_value = "listings")]
    section: Section,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the books in a section
    List {
        /// Only books whose title or author contains this text
        #[arg(long)]
        search: Option<String>,

        /// Only favorites
        #[arg(long)]
        favorites: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display details of a book
    Show {
        /// Book id or 1-based position
        selector: Selector,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute the map region framing the located books
    Region {
        /// Only books whose title or author contains this text
        #[arg(long)]
        search: Option<String>,

        /// Only favorites
        #[arg(long)]
        favorites: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the map markers for located books
    Map {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the share text for a book
    Share {
        /// Book id or 1-based position
        selector: Selector,
    },

    /// Interactive session reading commands from stdin
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "literate_cli=debug,literate_core=debug"
    } else {
        "literate_cli=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut app = App::new(cli.section, cli.covers);

    match cli.command {
        Commands::List {
            search,
            favorites,
            json,
        } => commands::list(&app, &commands::filter_from(search, favorites), json),

        Commands::Show { selector, json } => commands::show(&app, &selector, json),

        Commands::Region {
            search,
            favorites,
            json,
        } => commands::region(&app, &commands::filter_from(search, favorites), json),

        Commands::Map { json } => commands::map(&app, json),

        Commands::Share { selector } => commands::share(&app, &selector),

        Commands::Shell => commands::shell(&mut app),
    }
}
