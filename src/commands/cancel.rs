use super::settle;
use crate::libs::config::Config;
use crate::libs::handlers::{self, Outcome};
use crate::libs::messages::Message;
use crate::libs::validation::parse_booking_id;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct CancelArgs {
    /// Booking ID to cancel; prompted for when omitted
    id: Option<String>,
}

impl CancelArgs {
    /// Arguments that make the command ask for the id.
    pub fn prompt() -> Self {
        CancelArgs { id: None }
    }
}

pub fn cmd(config: &Config, args: CancelArgs) -> Result<()> {
    let raw = match args.id {
        Some(id) => id,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCancelBookingId.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    let outcome = match parse_booking_id(raw.trim()) {
        Ok(id) => handlers::cancel_booking(config, id),
        Err(error) => Outcome::Invalid(error),
    };

    if let Some(id) = settle(outcome, Message::BookingNotFound) {
        msg_success!(Message::BookingCancelled(id));
    }
    Ok(())
}
