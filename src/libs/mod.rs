//! Core library modules for the booking desk.
//!
//! - **Domain**: rooms, guests, stays and booking requests ([`booking`])
//! - **Input checks**: email, phone, date and booking-id validation ([`validation`])
//! - **Errors**: validation and storage error types ([`error`])
//! - **Handlers**: the four desk actions as functions returning an [`handlers::Outcome`]
//! - **Infrastructure**: configuration, data directory, messages, logging, table output
//!
//! ```rust,no_run
//! use hotelbook::libs::booking::BookingForm;
//! use hotelbook::libs::config::Config;
//! use hotelbook::libs::handlers::{book_room, Outcome};
//!
//! let config = Config::read()?;
//! let form = BookingForm {
//!     room_id: Some(1),
//!     name: "Ada".into(),
//!     phone: "5551234567".into(),
//!     email: "ada@example.com".into(),
//!     check_in: "2024-07-01".into(),
//!     check_out: "2024-07-03".into(),
//! };
//! if let Outcome::Done(id) = book_room(&config, &form) {
//!     println!("booked #{}", id);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod booking;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod messages;
pub mod validation;
pub mod view;
