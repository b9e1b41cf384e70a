use super::settle;
use crate::libs::booking::Room;
use crate::libs::config::Config;
use crate::libs::handlers::{self, Outcome};
use crate::libs::messages::Message;
use crate::libs::validation::parse_date;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RoomsArgs {
    /// Show rooms free on this date (YYYY-MM-DD) instead of today
    #[arg(long, conflicts_with = "all")]
    on: Option<String>,

    /// List every room, booked or not
    #[arg(long)]
    all: bool,

    /// Print the rooms as JSON
    #[arg(long)]
    json: bool,
}

pub fn cmd(config: &Config, args: RoomsArgs) -> Result<()> {
    let (header, outcome) = if args.all {
        (Message::AllRoomsHeader, handlers::all_rooms(config))
    } else if let Some(on) = args.on {
        match parse_date(&on) {
            Ok(date) => (Message::AvailableRoomsOnHeader(date.to_string()), handlers::rooms_on(config, date)),
            Err(error) => (Message::AvailableRoomsHeader, Outcome::Invalid(error)),
        }
    } else {
        (Message::AvailableRoomsHeader, handlers::view_rooms(config))
    };

    let Some(rooms) = settle(outcome, Message::BookingNotFound) else {
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rooms)?);
        return Ok(());
    }
    render(header, &rooms);
    Ok(())
}

/// The menu's "View Available Rooms" action.
pub fn show_available(config: &Config) {
    if let Some(rooms) = settle(handlers::view_rooms(config), Message::BookingNotFound) {
        render(Message::AvailableRoomsHeader, &rooms);
    }
}

fn render(header: Message, rooms: &[Room]) {
    if rooms.is_empty() {
        msg_info!(Message::NoRoomsAvailable);
        return;
    }

    msg_print!(header, true);
    View::rooms(rooms);
}
