//! Greetdb CLI - Command-line interface for the greeting store

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use greetdb::config;
use greetdb::storage::GreetingStore;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "greetdb")]
#[command(version = "0.1.0")]
#[command(about = "Prefix-searchable greeting store with an HTTP API")]
#[command(long_about = r#"
Greetdb keeps greeting messages in a SQLite table and serves them
over HTTP:
  • GET /greetings/{prefix} returns every greeting whose message
    starts with the given prefix, as a JSON array
  • The store is seeded and inspected from the command line

Example usage:
  greetdb add --message "hello world"
  greetdb list --prefix hello
  greetdb serve --port 3000
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Store a new greeting
    Add {
        /// The greeting message to store
        #[arg(short, long)]
        message: String,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// List stored greetings, optionally filtered by message prefix
    List {
        /// Only show greetings whose message starts with this prefix
        #[arg(short, long)]
        prefix: Option<String>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Show statistics about the stored greetings
    Stats {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = config::load_config(None)?;

    match cli.command {
        Commands::Serve { port, database } => {
            let port = config::resolve_port(port, config.as_ref());
            let database = config::resolve_database(database, config.as_ref());
            config::ensure_db_dir(&database)?;

            tracing::info!("Serving greetings from {:?}", database);
            greetdb::server::start_server(port, &database).await?;
        }

        Commands::Add { message, database } => {
            let database = config::resolve_database(database, config.as_ref());
            config::ensure_db_dir(&database)?;

            let store = GreetingStore::open(&database)?;
            let greeting = store.insert(&message)?;

            println!("✅ Stored greeting #{}", greeting.id);
        }

        Commands::List { prefix, database } => {
            let database = config::resolve_database(database, config.as_ref());
            let store = GreetingStore::open(&database)?;

            let prefix = prefix.unwrap_or_default();
            let greetings = store.find_by_prefix(&prefix)?;

            if greetings.is_empty() {
                println!("∅ No greetings found.");
            } else {
                for greeting in greetings {
                    println!("- {}", greeting);
                }
            }
        }

        Commands::Stats { database } => {
            let database = config::resolve_database(database, config.as_ref());
            let store = GreetingStore::open(&database)?;
            let stats = store.stats()?;

            println!("📊 Greetdb Statistics ({:?})", database);
            println!("------------------------------------");
            println!("{}", stats);
        }
    }

    Ok(())
}
