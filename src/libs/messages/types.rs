use crate::libs::booking::BookingId;

#[derive(Debug, Clone)]
pub enum Message {
    // === MENU ===
    MenuTitle,
    MenuViewRooms,
    MenuBookRoom,
    MenuCancelBooking,
    MenuViewBooking,
    MenuExit,
    Goodbye,

    // === ROOM MESSAGES ===
    AvailableRoomsHeader,
    AvailableRoomsOnHeader(String), // date
    AllRoomsHeader,
    NoRoomsAvailable,
    NoRoomsAvailableForBooking,

    // === BOOKING MESSAGES ===
    BookingCreated(BookingId),
    BookingCancelled(BookingId),
    BookingNotFound(BookingId),
    BookingDetailsNotFound(BookingId),
    BookingDetailsHeader,
    BookingRejected(String),
    BookingFormInvalid(String),
    RetryBookingForm,

    // === PROMPTS ===
    PromptSelectRoom,
    PromptGuestName,
    PromptGuestPhone,
    PromptGuestEmail,
    PromptCheckIn,
    PromptCheckOut,
    PromptCancelBookingId,
    PromptViewBookingId,
    PromptDatabasePath,
    PromptBusyTimeout,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleDatabase,

    // === DATABASE MESSAGES ===
    DatabaseError(String),
    DatabaseReady(String),  // path
    RoomsSeeded(usize),     // count

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseUpToDate,
}
