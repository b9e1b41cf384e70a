//! Command handlers behind the four desk actions.
//!
//! Each handler takes the configuration and already-parsed input, runs one
//! data-access operation on its own connection, and folds every possible
//! result into an [`Outcome`]. Front-ends only ever match on `Outcome`; they
//! never see a `rusqlite` error.

use crate::db::bookings::Bookings;
use crate::db::rooms::Rooms;
use crate::libs::booking::{BookingDetails, BookingForm, BookingId, Room};
use crate::libs::config::Config;
use crate::libs::error::{BookingError, ValidationError};
use chrono::NaiveDate;
use tracing::warn;

/// Result of one desk action.
#[derive(Debug, PartialEq)]
pub enum Outcome<T> {
    /// The action succeeded.
    Done(T),
    /// Input failed a local check; the database was not touched.
    Invalid(ValidationError),
    /// The request broke a booking rule (dates out of order, overlap,
    /// unknown room).
    Rejected(BookingError),
    /// No booking has this id.
    NotFound(BookingId),
    /// The database failed; carries the underlying message.
    Failed(String),
}

impl<T> Outcome<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done(_))
    }

    pub fn done(self) -> Option<T> {
        match self {
            Outcome::Done(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<BookingError> for Outcome<T> {
    fn from(error: BookingError) -> Self {
        if error.is_business_rule() {
            Outcome::Rejected(error)
        } else {
            warn!(%error, "booking operation failed");
            Outcome::Failed(error.to_string())
        }
    }
}

impl<T> From<Result<T, BookingError>> for Outcome<T> {
    fn from(result: Result<T, BookingError>) -> Self {
        match result {
            Ok(value) => Outcome::Done(value),
            Err(error) => error.into(),
        }
    }
}

/// Rooms free right now.
pub fn view_rooms(config: &Config) -> Outcome<Vec<Room>> {
    Rooms::open(&config.database).and_then(|rooms| rooms.available_now()).into()
}

/// Rooms free on the given date.
pub fn rooms_on(config: &Config, date: NaiveDate) -> Outcome<Vec<Room>> {
    Rooms::open(&config.database).and_then(|rooms| rooms.available_on(date)).into()
}

/// Every room regardless of bookings.
pub fn all_rooms(config: &Config) -> Outcome<Vec<Room>> {
    Rooms::open(&config.database).and_then(|rooms| rooms.all()).into()
}

/// Validates the form locally, then books the room.
pub fn book_room(config: &Config, form: &BookingForm) -> Outcome<BookingId> {
    let request = match form.validate() {
        Ok(request) => request,
        Err(error) => return Outcome::Invalid(error),
    };

    Bookings::open(&config.database).and_then(|mut bookings| bookings.create(&request)).into()
}

pub fn cancel_booking(config: &Config, id: BookingId) -> Outcome<BookingId> {
    match Bookings::open(&config.database).and_then(|bookings| bookings.cancel(id)) {
        Ok(true) => Outcome::Done(id),
        Ok(false) => Outcome::NotFound(id),
        Err(error) => error.into(),
    }
}

pub fn view_booking(config: &Config, id: BookingId) -> Outcome<BookingDetails> {
    match Bookings::open(&config.database).and_then(|bookings| bookings.details(id)) {
        Ok(Some(details)) => Outcome::Done(details),
        Ok(None) => Outcome::NotFound(id),
        Err(error) => error.into(),
    }
}
