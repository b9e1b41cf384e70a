use super::settle;
use crate::libs::booking::{BookingForm, BookingId, Room, RoomId};
use crate::libs::config::Config;
use crate::libs::handlers::{self, Outcome};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

/// Booking fields; anything left out is asked for interactively.
#[derive(Debug, Args)]
pub struct BookArgs {
    /// Room to book
    #[arg(long)]
    room: Option<RoomId>,
    /// Guest name
    #[arg(long)]
    name: Option<String>,
    /// Guest phone number, 7 to 15 digits
    #[arg(long)]
    phone: Option<String>,
    /// Guest email address
    #[arg(long)]
    email: Option<String>,
    /// Check-in date (YYYY-MM-DD)
    #[arg(long)]
    check_in: Option<String>,
    /// Check-out date (YYYY-MM-DD)
    #[arg(long)]
    check_out: Option<String>,
}

impl BookArgs {
    fn is_complete(&self) -> bool {
        self.room.is_some()
            && self.name.is_some()
            && self.phone.is_some()
            && self.email.is_some()
            && self.check_in.is_some()
            && self.check_out.is_some()
    }

    fn into_form(self) -> BookingForm {
        BookingForm {
            room_id: self.room,
            name: self.name.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            check_in: self.check_in.unwrap_or_default(),
            check_out: self.check_out.unwrap_or_default(),
        }
    }
}

pub fn cmd(config: &Config, args: BookArgs) -> Result<()> {
    if args.is_complete() {
        report(handlers::book_room(config, &args.into_form()));
        return Ok(());
    }

    form(config, args.into_form())
}

/// The booking form: pick a currently free room, fill in the guest and the
/// dates, submit. A form that fails local validation can be corrected and
/// resubmitted without losing what was typed.
pub fn form(config: &Config, preset: BookingForm) -> Result<()> {
    let Some(rooms) = settle(handlers::view_rooms(config), Message::BookingNotFound) else {
        return Ok(());
    };
    if rooms.is_empty() {
        msg_info!(Message::NoRoomsAvailableForBooking);
        return Ok(());
    }

    let mut current = preset;
    loop {
        current = match prompt(&rooms, current)? {
            Some(filled) => filled,
            None => return Ok(()),
        };

        match handlers::book_room(config, &current) {
            Outcome::Invalid(error) => {
                msg_error!(Message::BookingFormInvalid(error.to_string()));
                let retry = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::RetryBookingForm.to_string())
                    .default(true)
                    .interact()?;
                if !retry {
                    return Ok(());
                }
            }
            outcome => {
                report(outcome);
                return Ok(());
            }
        }
    }
}

/// Fills the form, keeping previous answers as defaults. `None` when the
/// room selection is dismissed.
fn prompt(rooms: &[Room], current: BookingForm) -> Result<Option<BookingForm>> {
    let theme = ColorfulTheme::default();

    let room_id = match current.room_id {
        Some(id) => id,
        None => {
            let labels: Vec<String> = rooms.iter().map(View::room_choice).collect();
            let selection = Select::with_theme(&theme)
                .with_prompt(Message::PromptSelectRoom.to_string())
                .items(&labels)
                .default(0)
                .interact_opt()?;
            match selection {
                Some(index) => rooms[index].id,
                None => return Ok(None),
            }
        }
    };

    Ok(Some(BookingForm {
        room_id: Some(room_id),
        name: ask(&theme, Message::PromptGuestName, &current.name)?,
        phone: ask(&theme, Message::PromptGuestPhone, &current.phone)?,
        email: ask(&theme, Message::PromptGuestEmail, &current.email)?,
        check_in: ask(&theme, Message::PromptCheckIn, &current.check_in)?,
        check_out: ask(&theme, Message::PromptCheckOut, &current.check_out)?,
    }))
}

// Empty answers are accepted here and reported by form validation.
fn ask(theme: &ColorfulTheme, prompt: Message, current: &str) -> Result<String> {
    let mut input = Input::<String>::with_theme(theme).with_prompt(prompt.to_string()).allow_empty(true);
    if !current.is_empty() {
        input = input.default(current.to_string());
    }
    Ok(input.interact_text()?)
}

fn report(outcome: Outcome<BookingId>) {
    if let Some(id) = settle(outcome, Message::BookingNotFound) {
        msg_success!(Message::BookingCreated(id));
    }
}
