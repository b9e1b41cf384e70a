use super::db::Db;
use crate::libs::booking::{Guest, GuestId};
use crate::libs::config::DatabaseConfig;
use crate::libs::error::BookingError;
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_GUEST: &str = "INSERT INTO guests (name, phone, email) VALUES (?1, ?2, ?3)";
const SELECT_GUEST: &str = "SELECT guest_id, name, phone, email FROM guests WHERE guest_id = ?1";
const COUNT_GUESTS: &str = "SELECT COUNT(*) FROM guests";

/// Read access to guest records. Guests are only ever written as part of a
/// booking, see [`insert_guest`].
pub struct Guests {
    db: Db,
}

impl Guests {
    pub fn open(config: &DatabaseConfig) -> Result<Guests, BookingError> {
        Ok(Guests { db: Db::open(config)? })
    }

    pub fn get(&self, id: GuestId) -> Result<Option<Guest>, BookingError> {
        let guest = self
            .db
            .conn
            .query_row(SELECT_GUEST, params![id], |row| {
                Ok(Guest {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    phone: row.get(2)?,
                    email: row.get(3)?,
                })
            })
            .optional()?;

        Ok(guest)
    }

    pub fn count(&self) -> Result<i64, BookingError> {
        Ok(self.db.conn.query_row(COUNT_GUESTS, [], |row| row.get(0))?)
    }
}

/// Inserts a guest on the given connection (normally an open booking
/// transaction) and returns the generated id.
pub(crate) fn insert_guest(conn: &Connection, guest: &Guest) -> rusqlite::Result<GuestId> {
    conn.execute(INSERT_GUEST, params![guest.name, guest.phone, guest.email])?;
    Ok(conn.last_insert_rowid())
}
