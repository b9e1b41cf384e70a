//! # hotelbook - a booking desk for a small hotel
//!
//! An interactive terminal application over a SQLite database of rooms,
//! guests and bookings.
//!
//! ## Features
//!
//! - **Room Lookup**: Rooms free today, or on any given date
//! - **Booking**: New guest plus booking in one transaction, rejected when the
//!   stay overlaps an existing booking of the room
//! - **Cancellation**: Remove a booking by id
//! - **Booking Details**: Room, guest and dates for a booking id
//! - **Provisioning**: Idempotent schema setup with sample rooms
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hotelbook::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
