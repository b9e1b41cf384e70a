use super::settle;
use crate::libs::config::Config;
use crate::libs::handlers::{self, Outcome};
use crate::libs::messages::Message;
use crate::libs::validation::parse_booking_id;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Booking ID to look up; prompted for when omitted
    id: Option<String>,

    /// Print the booking as JSON
    #[arg(long)]
    json: bool,
}

impl ShowArgs {
    /// Arguments that make the command ask for the id.
    pub fn prompt() -> Self {
        ShowArgs { id: None, json: false }
    }
}

pub fn cmd(config: &Config, args: ShowArgs) -> Result<()> {
    let raw = match args.id {
        Some(id) => id,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptViewBookingId.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    let outcome = match parse_booking_id(raw.trim()) {
        Ok(id) => handlers::view_booking(config, id),
        Err(error) => Outcome::Invalid(error),
    };

    let Some(details) = settle(outcome, Message::BookingDetailsNotFound) else {
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        msg_print!(Message::BookingDetailsHeader, true);
        View::booking(&details);
    }
    Ok(())
}
