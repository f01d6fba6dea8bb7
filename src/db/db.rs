use crate::libs::config::DatabaseConfig;
use crate::libs::error::StorageError;
use rusqlite::Connection;
use tracing::info;

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the one connection the application uses.
    pub fn open(config: &DatabaseConfig) -> Result<Db, StorageError> {
        let conn = if config.is_in_memory() {
            Connection::open_in_memory()
        } else {
            Connection::open(&config.path)
        }
        .map_err(|source| StorageError::Open {
            path: config.path.clone(),
            source,
        })?;

        info!(path = %config.path, "database connection opened");
        Ok(Db { conn })
    }
}
