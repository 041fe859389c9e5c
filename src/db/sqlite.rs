use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use super::StoreError;

/// Open the analytics store strictly read-only. The engine never mutates
/// the store, so connections that cannot write are all it ever holds.
pub fn open_readonly(path: &Path) -> Result<Connection, StoreError> {
    if !path.is_file() {
        return Err(StoreError::Unavailable);
    }
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|_| StoreError::Unavailable)?;
    Ok(conn)
}

/// Open an in-memory database with the production schema (for testing).
pub fn open_memory_database() -> Result<Connection, StoreError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch(include_str!("../../resources/schema.sql"))?;
    Ok(conn)
}

/// Count tables in the database (for verification)
pub fn count_tables(conn: &Connection) -> Result<i64, StoreError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(count)
}
