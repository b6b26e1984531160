//! Builds the SELECT, INSERT, UPDATE and DELETE statements for a books table.

use crate::error::ConfigError;

const COLUMNS: &str = r#""id", "title", "author", "description""#;

/// Quote identifier for PostgreSQL (safe: only from config).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse `table` or `schema.table` into a quoted, qualified name.
pub fn qualified_table(name: &str) -> Result<String, ConfigError> {
    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() > 2 || !parts.iter().all(|p| is_identifier(p)) {
        return Err(ConfigError::InvalidTableName(name.to_string()));
    }
    Ok(parts.iter().map(|p| quoted(p)).collect::<Vec<_>>().join("."))
}

/// The five statements, rendered once for a given table.
#[derive(Clone, Debug)]
pub struct BookQueries {
    pub select_all: String,
    pub select_by_id: String,
    /// Binds title, author, description; returns the stored row.
    pub insert: String,
    /// Binds id, title, author, description.
    pub update: String,
    pub delete: String,
}

impl BookQueries {
    pub fn for_table(name: &str) -> Result<Self, ConfigError> {
        let table = qualified_table(name)?;
        Ok(BookQueries {
            select_all: format!("SELECT {} FROM {}", COLUMNS, table),
            select_by_id: format!("SELECT {} FROM {} WHERE \"id\" = $1", COLUMNS, table),
            insert: format!(
                "INSERT INTO {} (\"title\", \"author\", \"description\") VALUES ($1, $2, $3) RETURNING {}",
                table, COLUMNS
            ),
            update: format!(
                "UPDATE {} SET \"title\" = $2, \"author\" = $3, \"description\" = $4 WHERE \"id\" = $1",
                table
            ),
            delete: format!("DELETE FROM {} WHERE \"id\" = $1", table),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualifies_schema_and_table() {
        assert_eq!(qualified_table("books").unwrap(), "\"books\"");
        assert_eq!(qualified_table("library.books").unwrap(), "\"library\".\"books\"");
    }

    #[test]
    fn rejects_unsafe_names() {
        for name in ["", "a.b.c", "books; drop table x", "1books", "books.", "bo\"oks"] {
            assert!(qualified_table(name).is_err(), "{name} should be rejected");
        }
    }

    #[test]
    fn statements_bind_values_as_parameters() {
        let q = BookQueries::for_table("books").unwrap();
        assert_eq!(
            q.select_all,
            "SELECT \"id\", \"title\", \"author\", \"description\" FROM \"books\""
        );
        assert_eq!(
            q.select_by_id,
            "SELECT \"id\", \"title\", \"author\", \"description\" FROM \"books\" WHERE \"id\" = $1"
        );
        assert_eq!(
            q.insert,
            "INSERT INTO \"books\" (\"title\", \"author\", \"description\") VALUES ($1, $2, $3) \
             RETURNING \"id\", \"title\", \"author\", \"description\""
        );
        assert_eq!(
            q.update,
            "UPDATE \"books\" SET \"title\" = $2, \"author\" = $3, \"description\" = $4 WHERE \"id\" = $1"
        );
        assert_eq!(q.delete, "DELETE FROM \"books\" WHERE \"id\" = $1");
    }
}
