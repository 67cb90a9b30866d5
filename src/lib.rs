//! # Greetdb - Prefix-Searchable Greeting Store
//!
//! A small read API over one SQLite table of greetings.
//!
//! Greetdb provides:
//! - A persisted `Greeting` record with a database-assigned id
//! - A SQLite-backed store with a left-anchored prefix query
//! - One HTTP route, `GET /greetings/{prefix}`, returning a JSON array
//! - A CLI for serving, seeding and inspecting the store

pub mod greeting;
pub mod storage;
pub mod server;
pub mod config;

// Re-exports for convenient access
pub use greeting::Greeting;
pub use storage::GreetingStore;

/// Result type alias for greetdb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for greetdb operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
