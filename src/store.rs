//! A string key-value store backed by SQLite.
//!
//! The catalog is persisted as a single JSON document under one key, so the
//! store only needs get and set. Values are replaced in full on every write.

use rusqlite::{Connection, Error, OptionalExtension};

/// Create the table that holds key-value pairs.
///
/// # Errors
/// Returns an error if the table already exists or if there is an SQL error.
pub fn create_store_table(connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "CREATE TABLE kv_store (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
        (),
    )?;

    Ok(())
}

/// Get the value stored under `key`, or `None` if the key has never been set.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn get_item(key: &str, connection: &Connection) -> Result<Option<String>, Error> {
    connection
        .prepare("SELECT value FROM kv_store WHERE key = :key")?
        .query_row(&[(":key", key)], |row| row.get(0))
        .optional()
}

/// Set `key` to `value`, replacing any previous value.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn set_item(key: &str, value: &str, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        (key, value),
    )?;

    Ok(())
}
