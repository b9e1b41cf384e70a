use crate::libs::error::{BookingError, ValidationError};
use crate::libs::validation::{parse_date, validate_email, validate_phone};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type RoomId = i64;
pub type GuestId = i64;
pub type BookingId = i64;

/// Fixed-point currency amount kept in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    pub id: RoomId,
    pub room_type: String,
    pub available: bool,
    #[serde(rename = "price_cents")]
    pub price: Money,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Guest {
    pub id: Option<GuestId>,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Guest {
    pub fn new(name: &str, phone: &str, email: &str) -> Self {
        Guest {
            id: None,
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }
}

/// Nights a room is held, from the check-in day up to but excluding the
/// check-out day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Stay {
    /// Builds a stay, rejecting a check-out that is not after check-in.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, BookingError> {
        if check_in >= check_out {
            return Err(BookingError::InvalidStay { check_in, check_out });
        }
        Ok(Stay { check_in, check_out })
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Half-open overlap: stays that only touch (one checks out the day the
    /// other checks in) do not overlap.
    pub fn overlaps(&self, other: &Stay) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    /// Whether the room is occupied on the night of `day`.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.check_in <= day && day < self.check_out
    }
}

/// Raw booking form as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub room_id: Option<RoomId>,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub check_in: String,
    pub check_out: String,
}

impl BookingForm {
    /// Runs the local checks in the order the form presents them and
    /// produces a request ready for the data-access layer.
    ///
    /// Values are checked exactly as typed; surrounding whitespace fails the
    /// phone, email and date checks.
    pub fn validate(&self) -> Result<BookingRequest, ValidationError> {
        let room_id = self.room_id.ok_or(ValidationError::NoRoomSelected)?;

        let (name, phone, email) = (self.name.as_str(), self.phone.as_str(), self.email.as_str());
        let (check_in, check_out) = (self.check_in.as_str(), self.check_out.as_str());

        for (field, value) in [
            ("name", name),
            ("phone", phone),
            ("email", email),
            ("check-in", check_in),
            ("check-out", check_out),
        ] {
            if value.is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }

        if !validate_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !validate_phone(phone) {
            return Err(ValidationError::InvalidPhone);
        }

        Ok(BookingRequest {
            room_id,
            guest: Guest::new(name, phone, email),
            check_in: parse_date(check_in)?,
            check_out: parse_date(check_out)?,
        })
    }
}

/// A booking request whose fields passed local validation.
///
/// Date order is not checked here; `Bookings::create` rejects a check-out
/// on or before check-in.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub room_id: RoomId,
    pub guest: Guest,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl BookingRequest {
    pub fn new(room_id: RoomId, guest: Guest, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        BookingRequest {
            room_id,
            guest,
            check_in,
            check_out,
        }
    }
}

/// Flattened view of one booking with its room and guest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingDetails {
    pub booking_id: BookingId,
    pub room_id: RoomId,
    pub room_type: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guest_name: String,
    pub email: String,
    pub phone: String,
}
