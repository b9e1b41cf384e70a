//! Setup command: configure the database location and provision it.
//!
//! Runs an interactive wizard (or takes the defaults with `--defaults`),
//! saves the configuration, then creates the tables and seeds the sample
//! rooms. Running it again is harmless: applied migrations are skipped and
//! rooms are only seeded into an empty table.

use crate::{
    db::migrations::provision_database,
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Skip the prompts and keep the current (or default) settings
    #[arg(long)]
    defaults: bool,

    /// Remove the saved configuration instead of creating one
    ///
    /// The database file itself is left untouched.
    #[arg(short, long, conflicts_with = "defaults")]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        Config::delete()?;
        msg_success!(Message::ConfigDeleted);
        return Ok(());
    }

    let config = if init_args.defaults { Config::read()? } else { Config::init()? };
    config.save()?;
    msg_success!(Message::ConfigSaved);

    let seeded = provision_database(&config.database)?;
    if seeded > 0 {
        msg_info!(Message::RoomsSeeded(seeded));
    }
    msg_success!(Message::DatabaseReady(config.database.path.display().to_string()));
    Ok(())
}
