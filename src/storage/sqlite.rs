//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params, OptionalExtension};
use crate::Result;
use crate::greeting::Greeting;
use super::schema;

/// SQLite-backed storage for greetings
pub struct GreetingStore {
    conn: Connection,
}

impl GreetingStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Insert a greeting and return it with its database-assigned id
    pub fn insert(&self, message: &str) -> Result<Greeting> {
        self.conn.execute(
            "INSERT INTO greetings (message) VALUES (?1)",
            params![message],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(Greeting::new(id, message))
    }

    /// Get a greeting by id
    pub fn get(&self, id: i64) -> Result<Option<Greeting>> {
        self.conn
            .query_row(
                "SELECT id, message FROM greetings WHERE id = ?1",
                [id],
                |row| self.row_to_greeting(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Find greetings whose message starts with the given prefix.
    ///
    /// The prefix becomes the left-anchored half of a `LIKE` pattern
    /// (`{prefix}%`), bound as a statement parameter. `%` and `_` in the
    /// caller's prefix keep their `LIKE` wildcard meaning; case folding
    /// follows SQLite's default `LIKE` collation (ASCII case-insensitive).
    /// An empty prefix matches every stored greeting.
    ///
    /// Results come back in ascending id order, so repeated queries
    /// against unchanged data return identical sequences.
    pub fn find_by_prefix(&self, prefix: &str) -> Result<Vec<Greeting>> {
        let pattern = format!("{}%", prefix);
        let mut stmt = self.conn.prepare(
            "SELECT id, message FROM greetings WHERE message LIKE ?1 ORDER BY id"
        )?;

        let greetings = stmt
            .query_map([pattern], |row| self.row_to_greeting(row))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(greetings)
    }

    /// Count all greetings
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM greetings", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Delete all greetings (test setup and re-seeding)
    pub fn clear_all(&self) -> Result<()> {
        self.conn.execute("DELETE FROM greetings", [])?;
        Ok(())
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats {
            greetings: self.count()?,
        })
    }

    /// Helper to convert a row to a Greeting
    fn row_to_greeting(&self, row: &rusqlite::Row) -> rusqlite::Result<Greeting> {
        Ok(Greeting {
            id: row.get(0)?,
            message: row.get(1)?,
        })
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub greetings: usize,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        writeln!(f, "  Greetings: {}", self.greetings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store(messages: &[&str]) -> GreetingStore {
        let store = GreetingStore::open_in_memory().unwrap();
        for message in messages {
            store.insert(message).unwrap();
        }
        store
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let store = GreetingStore::open_in_memory().unwrap();

        let first = store.insert("hello world").unwrap();
        let second = store.insert("good morning").unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.message, "hello world");
    }

    #[test]
    fn test_get_by_id() {
        let store = seeded_store(&["hello world"]);

        let found = store.get(1).unwrap().unwrap();
        assert_eq!(found.message, "hello world");

        assert!(store.get(42).unwrap().is_none());
    }

    #[test]
    fn test_find_by_prefix_is_left_anchored() {
        let store = seeded_store(&["abc", "abd", "xyz"]);

        assert_eq!(store.find_by_prefix("ab").unwrap().len(), 2);
        assert_eq!(store.find_by_prefix("abc").unwrap().len(), 1);
        assert_eq!(store.find_by_prefix("xyz").unwrap().len(), 1);

        // "b" occurs inside "abc" but no message starts with it
        assert!(store.find_by_prefix("b").unwrap().is_empty());
    }

    #[test]
    fn test_empty_prefix_matches_everything() {
        let store = seeded_store(&["abc", "abd", "xyz"]);

        let all = store.find_by_prefix("").unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_no_match_returns_empty_vec() {
        let store = seeded_store(&["hello world"]);

        let none = store.find_by_prefix("zzz").unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_results_ordered_by_id() {
        let store = seeded_store(&["hello world", "hello there", "hello again"]);

        let hellos = store.find_by_prefix("hello").unwrap();
        let ids: Vec<i64> = hellos.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_like_wildcards_pass_through() {
        let store = seeded_store(&["abc", "xyz"]);

        // The prefix is not escaped, so LIKE wildcards keep their meaning
        assert_eq!(store.find_by_prefix("%").unwrap().len(), 2);
        assert_eq!(store.find_by_prefix("a_c").unwrap().len(), 1);
    }

    #[test]
    fn test_prefix_match_is_ascii_case_insensitive() {
        let store = seeded_store(&["hello world"]);

        // SQLite's default LIKE folds ASCII case
        assert_eq!(store.find_by_prefix("Hello").unwrap().len(), 1);
        assert_eq!(store.find_by_prefix("HELLO").unwrap().len(), 1);
    }

    #[test]
    fn test_clear_all_then_reseed() {
        let store = seeded_store(&["stale one", "stale two"]);

        store.clear_all().unwrap();
        assert_eq!(store.count().unwrap(), 0);
        assert!(store.find_by_prefix("").unwrap().is_empty());

        let reseeded = store.insert("hello world").unwrap();
        assert_eq!(store.find_by_prefix("hello").unwrap(), vec![reseeded]);
    }

    #[test]
    fn test_count_and_stats() {
        let store = seeded_store(&["abc", "abd"]);

        assert_eq!(store.count().unwrap(), 2);
        assert_eq!(store.stats().unwrap().greetings, 2);
    }
}
