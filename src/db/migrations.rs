//! Schema provisioning for the booking database.
//!
//! The schema is built by versioned migrations recorded in a `migrations`
//! table, so provisioning can run on every startup: applied versions are
//! skipped and the seed step only fills an empty `rooms` table.
//!
//! ```rust,no_run
//! use hotelbook::db::migrations::provision;
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("hotel.db")?;
//! let seeded = provision(&mut conn)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::db::Db;
use crate::libs::config::DatabaseConfig;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction, TransactionBehavior};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Guest ids start here so they never look like room or booking ids.
pub const FIRST_GUEST_ID: i64 = 101;

/// Sample rooms inserted into an empty database: type and price in cents.
pub const SEED_ROOMS: [(&str, i64); 4] = [("Single", 10_000), ("Double", 15_000), ("Suite", 25_000), ("Single", 9_000)];

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Ordered registry of schema migrations.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: rooms, guests and bookings
        self.add_migration(1, "create_booking_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS rooms (
                    room_id INTEGER PRIMARY KEY AUTOINCREMENT,
                    room_type TEXT NOT NULL,
                    availability BOOLEAN NOT NULL DEFAULT TRUE,
                    price_cents INTEGER NOT NULL
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS guests (
                    guest_id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL,
                    phone TEXT NOT NULL,
                    email TEXT NOT NULL
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS bookings (
                    booking_id INTEGER PRIMARY KEY AUTOINCREMENT,
                    room_id INTEGER NOT NULL,
                    guest_id INTEGER NOT NULL,
                    check_in DATE NOT NULL,
                    check_out DATE NOT NULL,
                    CHECK (check_in < check_out),
                    FOREIGN KEY (room_id) REFERENCES rooms(room_id),
                    FOREIGN KEY (guest_id) REFERENCES guests(guest_id)
                )",
                [],
            )?;

            // AUTOINCREMENT hands out seq + 1, so the first guest gets FIRST_GUEST_ID
            tx.execute(
                "INSERT INTO sqlite_sequence (name, seq)
                 SELECT 'guests', ?1 WHERE NOT EXISTS (SELECT 1 FROM sqlite_sequence WHERE name = 'guests')",
                params![FIRST_GUEST_ID - 1],
            )?;
            Ok(())
        });

        // Version 2: overlap lookups scan bookings per room by date
        self.add_migration(2, "add_bookings_room_dates_index", |tx| {
            tx.execute(
                "CREATE INDEX IF NOT EXISTS idx_bookings_room_dates ON bookings(room_id, check_in, check_out)",
                [],
            )?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every pending migration in one IMMEDIATE transaction.
    ///
    /// The version is read after the write lock is taken, so a second
    /// process provisioning the same file waits and then finds nothing left
    /// to apply.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(&tx)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            tx.commit()?;
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_debug!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_debug!(Message::AllMigrationsCompleted);

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;

        Ok(version.unwrap_or(0))
    }

    /// Version, name and timestamp of every applied migration.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }

    fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Inserts the sample rooms if the `rooms` table is empty.
///
/// Returns how many rooms were inserted (zero when rooms already exist).
pub fn seed_rooms(conn: &mut Connection) -> Result<usize> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let existing: i64 = tx.query_row("SELECT COUNT(*) FROM rooms", [], |row| row.get(0))?;
    if existing > 0 {
        return Ok(0);
    }

    for (room_type, price_cents) in SEED_ROOMS {
        tx.execute(
            "INSERT INTO rooms (room_type, availability, price_cents) VALUES (?1, TRUE, ?2)",
            params![room_type, price_cents],
        )?;
    }
    tx.commit()?;

    Ok(SEED_ROOMS.len())
}

/// Brings the schema up to date and seeds sample rooms when needed.
///
/// Safe to run any number of times. Returns the number of rooms seeded.
pub fn provision(conn: &mut Connection) -> Result<usize> {
    MigrationManager::new().run_migrations(conn)?;
    seed_rooms(conn)
}

/// Opens the configured database and provisions it.
pub fn provision_database(config: &DatabaseConfig) -> Result<usize> {
    let mut db = Db::open(config)?;
    provision(&mut db.conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.get_current_version(conn)? < manager.latest_version())
}
