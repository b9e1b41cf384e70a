use crate::libs::config::DatabaseConfig;
use rusqlite::{Connection, Result};
use std::time::Duration;
use tracing::debug;

/// One scoped connection to the booking database.
///
/// Every repository owns a `Db` for the length of a single operation; the
/// connection closes when the repository is dropped.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn open(config: &DatabaseConfig) -> Result<Db> {
        debug!(path = %config.path.display(), "opening database");
        let conn = Connection::open(&config.path)?;
        conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))?;
        conn.pragma_update(None, "foreign_keys", true)?;

        Ok(Db { conn })
    }
}
