//! Database schema definitions

/// SQL to create the greetings table
pub const CREATE_GREETINGS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS greetings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    message TEXT NOT NULL
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_greetings_message ON greetings(message)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_GREETINGS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
