pub mod book;
pub mod cancel;
pub mod init;
pub mod menu;
pub mod rooms;
pub mod show;

use crate::db::migrations::provision_database;
use crate::libs::booking::BookingId;
use crate::libs::config::Config;
use crate::libs::handlers::Outcome;
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_warning};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the database and provision tables and sample rooms")]
    Init(init::InitArgs),
    #[command(about = "Open the interactive booking desk (default)")]
    Menu,
    #[command(about = "List available rooms")]
    Rooms(rooms::RoomsArgs),
    #[command(about = "Book a room for a new guest")]
    Book(book::BookArgs),
    #[command(about = "Cancel a booking")]
    Cancel(cancel::CancelArgs),
    #[command(about = "Show booking details")]
    Show(show::ShowArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command.unwrap_or(Commands::Menu) {
            Commands::Init(args) => init::cmd(args),
            Commands::Menu => menu::cmd(&Self::startup()?),
            Commands::Rooms(args) => rooms::cmd(&Self::startup()?, args),
            Commands::Book(args) => book::cmd(&Self::startup()?, args),
            Commands::Cancel(args) => cancel::cmd(&Self::startup()?, args),
            Commands::Show(args) => show::cmd(&Self::startup()?, args),
        }
    }

    /// Reads the configuration and makes sure the schema exists.
    fn startup() -> Result<Config> {
        let config = Config::read()?;
        provision_database(&config.database)?;
        Ok(config)
    }
}

/// Renders every non-success outcome and hands back the success value.
///
/// `not_found` builds the message shown when the booking id does not exist,
/// since cancel and view word it differently.
pub(crate) fn settle<T>(outcome: Outcome<T>, not_found: impl FnOnce(BookingId) -> Message) -> Option<T> {
    match outcome {
        Outcome::Done(value) => Some(value),
        Outcome::Invalid(error) => {
            msg_error!(Message::BookingFormInvalid(error.to_string()));
            None
        }
        Outcome::Rejected(error) => {
            msg_warning!(Message::BookingRejected(error.to_string()));
            None
        }
        Outcome::NotFound(id) => {
            msg_info!(not_found(id));
            None
        }
        Outcome::Failed(error) => {
            msg_error!(Message::DatabaseError(error));
            None
        }
    }
}
