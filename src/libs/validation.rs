//! Local checks for booking form input.
//!
//! Every function here is pure and total. The shell runs them before any
//! database work so that malformed input never costs a round trip.

use crate::libs::booking::BookingId;
use crate::libs::error::ValidationError;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Date format accepted on every date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const PHONE_MIN_DIGITS: usize = 7;
pub const PHONE_MAX_DIGITS: usize = 15;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email pattern is a valid regex"))
}

/// Checks for a `local@domain.tld` shape without whitespace.
pub fn validate_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Checks that the phone number is 7 to 15 ASCII digits.
pub fn validate_phone(phone: &str) -> bool {
    let len = phone.chars().count();
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&len) && phone.chars().all(|c| c.is_ascii_digit())
}

/// Checks for a real calendar date written strictly as `YYYY-MM-DD`.
pub fn validate_date(date: &str) -> bool {
    parse_date(date).is_ok()
}

/// Parses a strict `YYYY-MM-DD` date.
///
/// chrono accepts single-digit months and days for `%m`/`%d`, so the shape
/// is checked byte by byte before parsing.
pub fn parse_date(date: &str) -> Result<NaiveDate, ValidationError> {
    let bytes = date.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() });

    if !well_formed {
        return Err(ValidationError::InvalidDate(date.to_string()));
    }

    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate(date.to_string()))
}

/// Parses a booking identifier typed by the user.
///
/// Only plain digits naming a positive integer are accepted; signs,
/// whitespace and zero are rejected.
pub fn parse_booking_id(input: &str) -> Result<BookingId, ValidationError> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidBookingId);
    }

    match input.parse::<BookingId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::InvalidBookingId),
    }
}
