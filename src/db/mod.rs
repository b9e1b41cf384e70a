//! SQLite persistence for rooms, guests and bookings.
//!
//! Every repository (`Rooms`, `Guests`, `Bookings`) opens its own
//! connection from a [`DatabaseConfig`](crate::libs::config::DatabaseConfig)
//! and closes it when dropped, so each desk action is one scoped unit of
//! work. The schema itself is owned by [`migrations`].
//!
//! ```rust,no_run
//! use hotelbook::db::{bookings::Bookings, migrations::provision_database, rooms::Rooms};
//! use hotelbook::libs::config::DatabaseConfig;
//!
//! let config = DatabaseConfig::new("hotel.db");
//! provision_database(&config)?;
//! let free = Rooms::open(&config)?.available_now()?;
//! let details = Bookings::open(&config)?.details(1)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Scoped connection with per-connection pragmas applied.
pub mod db;

/// Versioned schema and sample-room seeding.
pub mod migrations;

/// Booking creation with overlap check, cancellation and detail lookup.
pub mod bookings;

/// Guest rows, written only as part of a booking.
pub mod guests;

/// Room listing and point-in-time availability.
pub mod rooms;
