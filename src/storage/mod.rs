//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with one table:
//! - greetings(id, message)

pub mod schema;
pub mod sqlite;

pub use sqlite::{GreetingStore, StoreStats};
