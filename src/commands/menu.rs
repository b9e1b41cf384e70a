//! The desk's main window: a menu of the four booking actions.
//!
//! Each choice runs to completion (prompts, database round trip, result
//! message) before the menu comes back. Esc or "Exit" closes the desk.

use super::{book, cancel, rooms, show};
use crate::libs::booking::BookingForm;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Action {
    ViewRooms,
    BookRoom,
    CancelBooking,
    ViewBooking,
    Exit,
}

const ACTIONS: [Action; 5] = [
    Action::ViewRooms,
    Action::BookRoom,
    Action::CancelBooking,
    Action::ViewBooking,
    Action::Exit,
];

impl Action {
    fn label(self) -> Message {
        match self {
            Action::ViewRooms => Message::MenuViewRooms,
            Action::BookRoom => Message::MenuBookRoom,
            Action::CancelBooking => Message::MenuCancelBooking,
            Action::ViewBooking => Message::MenuViewBooking,
            Action::Exit => Message::MenuExit,
        }
    }
}

pub fn cmd(config: &Config) -> Result<()> {
    let theme = ColorfulTheme::default();
    let labels: Vec<String> = ACTIONS.iter().map(|action| action.label().to_string()).collect();

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt(Message::MenuTitle.to_string())
            .items(&labels)
            .default(0)
            .interact_opt()?;

        let action = selection.map(|index| ACTIONS[index]).unwrap_or(Action::Exit);
        msg_debug!(format!("menu action: {:?}", action));

        match action {
            Action::ViewRooms => rooms::show_available(config),
            Action::BookRoom => book::form(config, BookingForm::default())?,
            Action::CancelBooking => cancel::cmd(config, cancel::CancelArgs::prompt())?,
            Action::ViewBooking => show::cmd(config, show::ShowArgs::prompt())?,
            Action::Exit => {
                msg_print!(Message::Goodbye);
                return Ok(());
            }
        }
    }
}
