use super::booking::{BookingDetails, Room};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn rooms(rooms: &[Room]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TYPE", "PRICE"]);
        for room in rooms {
            table.add_row(row![room.id, room.room_type, room.price]);
        }
        table.printstd();
    }

    pub fn booking(details: &BookingDetails) {
        let mut table = Table::new();

        table.add_row(row!["Booking ID", details.booking_id]);
        table.add_row(row!["Room ID", details.room_id]);
        table.add_row(row!["Room Type", details.room_type]);
        table.add_row(row!["Check-in Date", details.check_in]);
        table.add_row(row!["Check-out Date", details.check_out]);
        table.add_row(row!["Guest Name", details.guest_name]);
        table.add_row(row!["Guest Email", details.email]);
        table.add_row(row!["Guest Phone", details.phone]);
        table.printstd();
    }

    /// One-line label used in the room selection list.
    pub fn room_choice(room: &Room) -> String {
        format!("ID: {}, Type: {}, Price: {}", room.id, room.room_type, room.price)
    }
}
