use super::db::Db;
use crate::libs::booking::{Money, Room, RoomId};
use crate::libs::config::DatabaseConfig;
use crate::libs::error::BookingError;
use chrono::{Local, NaiveDate};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, instrument};

const SELECT_ROOMS: &str = "SELECT room_id, room_type, availability, price_cents FROM rooms";
const WHERE_FREE_ON: &str = "WHERE NOT EXISTS (
    SELECT 1 FROM bookings b
    WHERE b.room_id = rooms.room_id AND b.check_in <= ?1 AND ?1 < b.check_out
)";
const WHERE_ID: &str = "WHERE room_id = ?1";
const ORDER_BY_ID: &str = "ORDER BY room_id";

pub struct Rooms {
    db: Db,
}

impl Rooms {
    pub fn open(config: &DatabaseConfig) -> Result<Rooms, BookingError> {
        Ok(Rooms { db: Db::open(config)? })
    }

    /// Rooms with no booking covering today's date.
    pub fn available_now(&self) -> Result<Vec<Room>, BookingError> {
        self.available_on(Local::now().date_naive())
    }

    /// Rooms with no booking whose stay contains `date`.
    ///
    /// A booking holds its room from the check-in day up to, but not
    /// including, the check-out day.
    #[instrument(skip(self))]
    pub fn available_on(&self, date: NaiveDate) -> Result<Vec<Room>, BookingError> {
        let mut stmt = self.db.conn.prepare(&format!("{} {} {}", SELECT_ROOMS, WHERE_FREE_ON, ORDER_BY_ID))?;
        let rooms = stmt.query_map(params![date], room_from_row)?.collect::<Result<Vec<_>, _>>()?;

        debug!(count = rooms.len(), "available rooms");
        Ok(rooms)
    }

    pub fn all(&self) -> Result<Vec<Room>, BookingError> {
        let mut stmt = self.db.conn.prepare(&format!("{} {}", SELECT_ROOMS, ORDER_BY_ID))?;
        let rooms = stmt.query_map([], room_from_row)?.collect::<Result<Vec<_>, _>>()?;

        Ok(rooms)
    }

    pub fn get(&self, id: RoomId) -> Result<Option<Room>, BookingError> {
        Ok(find_room(&self.db.conn, id)?)
    }
}

/// Room lookup usable inside an open transaction.
pub(crate) fn find_room(conn: &Connection, id: RoomId) -> rusqlite::Result<Option<Room>> {
    conn.query_row(&format!("{} {}", SELECT_ROOMS, WHERE_ID), params![id], room_from_row)
        .optional()
}

fn room_from_row(row: &Row) -> rusqlite::Result<Room> {
    Ok(Room {
        id: row.get(0)?,
        room_type: row.get(1)?,
        available: row.get(2)?,
        price: Money::from_cents(row.get(3)?),
    })
}
