//! User-facing text for every [`Message`].
//!
//! All wording shown by the desk lives here so the shell, the commands and
//! the provisioner stay free of string literals.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === MENU ===
            Message::MenuTitle => "Hotel Booking System".to_string(),
            Message::MenuViewRooms => "View Available Rooms".to_string(),
            Message::MenuBookRoom => "Book Room".to_string(),
            Message::MenuCancelBooking => "Cancel Booking".to_string(),
            Message::MenuViewBooking => "View Booking".to_string(),
            Message::MenuExit => "Exit".to_string(),
            Message::Goodbye => "Goodbye.".to_string(),

            // === ROOM MESSAGES ===
            Message::AvailableRoomsHeader => "Available Rooms".to_string(),
            Message::AvailableRoomsOnHeader(date) => format!("Rooms available on {}", date),
            Message::AllRoomsHeader => "All Rooms".to_string(),
            Message::NoRoomsAvailable => "No rooms available.".to_string(),
            Message::NoRoomsAvailableForBooking => "No rooms available for booking.".to_string(),

            // === BOOKING MESSAGES ===
            Message::BookingCreated(id) => format!("Room booked successfully! Your Booking ID is {}.", id),
            Message::BookingCancelled(id) => format!("Booking with ID {} has been successfully canceled.", id),
            Message::BookingNotFound(id) => format!("No booking found with Booking ID {}.", id),
            Message::BookingDetailsNotFound(id) => format!("No details found for Booking ID: {}", id),
            Message::BookingDetailsHeader => "Booking Details".to_string(),
            Message::BookingRejected(reason) => reason.clone(),
            Message::BookingFormInvalid(reason) => reason.clone(),
            Message::RetryBookingForm => "Correct the form and try again?".to_string(),

            // === PROMPTS ===
            Message::PromptSelectRoom => "Select Room".to_string(),
            Message::PromptGuestName => "Enter your Name".to_string(),
            Message::PromptGuestPhone => "Enter your Phone Number".to_string(),
            Message::PromptGuestEmail => "Enter your Email Address".to_string(),
            Message::PromptCheckIn => "Check-in Date (YYYY-MM-DD)".to_string(),
            Message::PromptCheckOut => "Check-out Date (YYYY-MM-DD)".to_string(),
            Message::PromptCancelBookingId => "Enter Booking ID to cancel".to_string(),
            Message::PromptViewBookingId => "Enter Booking ID to view details".to_string(),
            Message::PromptDatabasePath => "Database file".to_string(),
            Message::PromptBusyTimeout => "Wait for a busy database (milliseconds)".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleDatabase => "Database settings".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseError(error) => format!("Database error: {}", error),
            Message::DatabaseReady(path) => format!("Database and tables initialized successfully: {}", path),
            Message::RoomsSeeded(count) => format!("Seeded {} sample room(s).", count),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
        };
        write!(f, "{}", text)
    }
}
