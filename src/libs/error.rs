//! Error types for booking input and booking storage.
//!
//! Two layers are kept apart:
//!
//! - [`ValidationError`] is raised by the form checks in
//!   [`validation`](super::validation) before anything touches the database.
//! - [`BookingError`] is raised by the data-access layer. Apart from
//!   [`BookingError::Database`] every variant is a business rule the user can
//!   act on (pick other dates, another room).

use crate::libs::booking::{BookingId, RoomId};
use chrono::NaiveDate;
use thiserror::Error;

/// A form field failed a local format check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required ({0} is empty).")]
    MissingField(&'static str),

    #[error("Please select a room.")]
    NoRoomSelected,

    #[error("Invalid email format.")]
    InvalidEmail,

    #[error("Invalid phone number. Please enter a numeric value with 7 to 15 digits.")]
    InvalidPhone,

    #[error("Invalid date '{0}'. Use YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("Booking ID must be a numeric value.")]
    InvalidBookingId,
}

/// Failure of a booking data-access operation.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Check-out date ({check_out}) must be after check-in date ({check_in}).")]
    InvalidStay { check_in: NaiveDate, check_out: NaiveDate },

    #[error("Room {0} does not exist.")]
    RoomNotFound(RoomId),

    #[error("Room {room_id} is not available for the selected dates (held by booking {booking_id}).")]
    Conflict { room_id: RoomId, booking_id: BookingId },

    #[error("{0}")]
    Database(#[from] rusqlite::Error),
}

impl BookingError {
    /// True for outcomes caused by the request itself rather than the store.
    pub fn is_business_rule(&self) -> bool {
        !matches!(self, BookingError::Database(_))
    }
}

impl PartialEq for BookingError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            // rusqlite errors carry no useful equality; any two store failures compare equal
            (Self::Database(_), Self::Database(_)) => true,
            (
                Self::InvalidStay { check_in: a, check_out: b },
                Self::InvalidStay { check_in: c, check_out: d },
            ) => a == c && b == d,
            (Self::RoomNotFound(a), Self::RoomNotFound(b)) => a == b,
            (
                Self::Conflict { room_id: a, booking_id: b },
                Self::Conflict { room_id: c, booking_id: d },
            ) => a == c && b == d,
            _ => false,
        }
    }
}
