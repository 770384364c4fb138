//! CRUD front end for the book catalog.
//!
//! Resolves the store path from `BOOKS_FILE` (default `books.json`), parses
//! one subcommand, and hands it to the library dispatcher. Argument errors
//! exit 2 through clap; catalog failures print `Error: ...` and exit 1.

use anyhow::Result;
use bookshelf::logging::init_logging;
use bookshelf::{Book, BookId, CatalogStore, Command, StockChange, StoreConfig, UpdateRequest};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "books")]
#[command(about = "CRUD for books.json")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create an empty books.json
    Init,
    /// List all books
    List {
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Get a single book by id
    Get {
        #[arg(long, allow_negative_numbers = true)]
        id: BookId,
    },
    /// Add a new book
    Add {
        #[arg(long, allow_negative_numbers = true)]
        id: BookId,
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long, allow_negative_numbers = true)]
        year: i64,
        #[arg(long, num_args = 0..)]
        genres: Vec<String>,
        #[command(flatten)]
        stock: StockFlags,
    },
    /// Update fields of a book by id
    Update {
        #[arg(long, allow_negative_numbers = true)]
        id: BookId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        year: Option<i64>,
        /// Replacement genres; pass the flag with no values to clear them
        #[arg(long, num_args = 0..)]
        genres: Option<Vec<String>>,
        #[command(flatten)]
        stock: StockFlags,
    },
    /// Delete a book by id
    Delete {
        #[arg(long, allow_negative_numbers = true)]
        id: BookId,
    },
}

#[derive(Args, Debug)]
#[group(multiple = false)]
struct StockFlags {
    #[arg(long)]
    in_stock: bool,
    #[arg(long)]
    out_of_stock: bool,
}

impl StockFlags {
    fn change(&self) -> StockChange {
        StockChange::from_flags(self.in_stock, self.out_of_stock)
    }
}

impl From<Commands> for Command {
    fn from(parsed: Commands) -> Self {
        match parsed {
            Commands::Init => Command::Init,
            Commands::List { pretty } => Command::List { pretty },
            Commands::Get { id } => Command::Get { id },
            Commands::Add {
                id,
                title,
                author,
                year,
                genres,
                stock,
            } => {
                // Only an explicit --out-of-stock clears the default.
                let in_stock = stock.change() != StockChange::OutOfStock;
                Command::Add {
                    book: Book::new(id, title, author, year)
                        .with_genres(genres)
                        .with_in_stock(in_stock),
                }
            }
            Commands::Update {
                id,
                title,
                author,
                year,
                genres,
                stock,
            } => Command::Update {
                id,
                changes: UpdateRequest {
                    title,
                    author,
                    year,
                    genres,
                    in_stock: stock.change(),
                },
            },
            Commands::Delete { id } => Command::Delete { id },
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = StoreConfig::from_env();
    let command = Command::from(cli.command);
    debug!(command = command.name(), path = %config.path().display(), "dispatching");

    let store = CatalogStore::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    bookshelf::run_command(&store, command, &mut out)?;
    out.flush()?;
    Ok(())
}
