//! Booking storage: create with overlap check, cancel, and detail lookup.
//!
//! Creation is the only multi-statement operation. It runs in an IMMEDIATE
//! transaction, which takes the database write lock before the overlap
//! check reads anything, so two desks booking the same room at once are
//! serialized: the second waits (up to the configured busy timeout) and
//! then sees the first one's booking.

use super::db::Db;
use super::guests::insert_guest;
use super::rooms::find_room;
use crate::libs::booking::{BookingDetails, BookingId, BookingRequest, RoomId, Stay};
use crate::libs::config::DatabaseConfig;
use crate::libs::error::BookingError;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use tracing::{debug, info, instrument};

const INSERT_BOOKING: &str = "INSERT INTO bookings (room_id, guest_id, check_in, check_out) VALUES (?1, ?2, ?3, ?4)";
const DELETE_BOOKING: &str = "DELETE FROM bookings WHERE booking_id = ?1";
const SELECT_ROOM_STAYS: &str = "SELECT booking_id, check_in, check_out FROM bookings WHERE room_id = ?1 ORDER BY check_in";
const SELECT_DETAILS: &str = "SELECT b.booking_id, r.room_id, r.room_type, b.check_in, b.check_out, g.name, g.email, g.phone
    FROM bookings b
    JOIN rooms r ON r.room_id = b.room_id
    JOIN guests g ON g.guest_id = b.guest_id
    WHERE b.booking_id = ?1";
const COUNT_BOOKINGS: &str = "SELECT COUNT(*) FROM bookings";

pub struct Bookings {
    db: Db,
}

impl Bookings {
    pub fn open(config: &DatabaseConfig) -> Result<Bookings, BookingError> {
        Ok(Bookings { db: Db::open(config)? })
    }

    /// Books a room for a new guest.
    ///
    /// The guest row and the booking row are written in the same
    /// transaction; on any error the transaction is dropped uncommitted and
    /// nothing is left behind.
    #[instrument(skip(self, request), fields(room_id = request.room_id, check_in = %request.check_in, check_out = %request.check_out))]
    pub fn create(&mut self, request: &BookingRequest) -> Result<BookingId, BookingError> {
        let stay = Stay::new(request.check_in, request.check_out)?;

        let tx = self.db.conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        if find_room(&tx, request.room_id)?.is_none() {
            return Err(BookingError::RoomNotFound(request.room_id));
        }

        if let Some(booking_id) = find_conflict(&tx, request.room_id, &stay)? {
            debug!(booking_id, "stay overlaps an existing booking");
            return Err(BookingError::Conflict {
                room_id: request.room_id,
                booking_id,
            });
        }

        let guest_id = insert_guest(&tx, &request.guest)?;
        tx.execute(INSERT_BOOKING, params![request.room_id, guest_id, stay.check_in, stay.check_out])?;
        let booking_id = tx.last_insert_rowid();
        tx.commit()?;

        info!(booking_id, guest_id, "booking created");
        Ok(booking_id)
    }

    /// Deletes a booking. Returns `false` when no booking has that id.
    #[instrument(skip(self))]
    pub fn cancel(&self, id: BookingId) -> Result<bool, BookingError> {
        let deleted = self.db.conn.execute(DELETE_BOOKING, params![id])?;

        if deleted > 0 {
            info!("booking cancelled");
        }
        Ok(deleted > 0)
    }

    #[instrument(skip(self))]
    pub fn details(&self, id: BookingId) -> Result<Option<BookingDetails>, BookingError> {
        let details = self
            .db
            .conn
            .query_row(SELECT_DETAILS, params![id], |row| {
                Ok(BookingDetails {
                    booking_id: row.get(0)?,
                    room_id: row.get(1)?,
                    room_type: row.get(2)?,
                    check_in: row.get(3)?,
                    check_out: row.get(4)?,
                    guest_name: row.get(5)?,
                    email: row.get(6)?,
                    phone: row.get(7)?,
                })
            })
            .optional()?;

        Ok(details)
    }

    /// Every booking of a room as `(booking id, stay)`, earliest first.
    pub fn for_room(&self, room_id: RoomId) -> Result<Vec<(BookingId, Stay)>, BookingError> {
        Ok(room_stays(&self.db.conn, room_id)?)
    }

    pub fn count(&self) -> Result<i64, BookingError> {
        Ok(self.db.conn.query_row(COUNT_BOOKINGS, [], |row| row.get(0))?)
    }
}

fn room_stays(conn: &Connection, room_id: RoomId) -> rusqlite::Result<Vec<(BookingId, Stay)>> {
    let mut stmt = conn.prepare(SELECT_ROOM_STAYS)?;
    let stays = stmt
        .query_map(params![room_id], |row| {
            Ok((
                row.get(0)?,
                Stay {
                    check_in: row.get(1)?,
                    check_out: row.get(2)?,
                },
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(stays)
}

/// First booking of the room whose stay overlaps `stay`, if any.
fn find_conflict(conn: &Connection, room_id: RoomId, stay: &Stay) -> rusqlite::Result<Option<BookingId>> {
    let conflict = room_stays(conn, room_id)?
        .into_iter()
        .find(|(_, existing)| existing.overlaps(stay))
        .map(|(booking_id, _)| booking_id);

    Ok(conflict)
}
