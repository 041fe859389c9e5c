pub mod sqlite;

pub use sqlite::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The store file does not exist or cannot be opened. Query functions
    /// degrade to an empty result carrying this message, never a panic.
    #[error("Database not found")]
    Unavailable,

    #[error("Query failed: {0}")]
    Query(#[from] rusqlite::Error),
}
