//! Listing commands for the reference data: clients, rooms and shifts.

use std::io;

use clap::Args;
use cowork::Database;

use crate::error::CliError;
use crate::render::{write_clients, write_rooms, write_shifts};
use crate::utils::{load_configuration, open_store, GlobalOptions};

/// List registered clients.
#[derive(Args)]
pub struct ClientsCommand {}

impl ClientsCommand {
    /// Execute the clients command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;
        let clients = store.with_database(|db| Database::list_clients(db.connection()))?;

        if clients.is_empty() {
            if !global.quiet {
                eprintln!("No clients registered yet");
            }
            return Ok(());
        }
        write_clients(&mut io::stdout().lock(), &clients)?;
        Ok(())
    }
}

/// List registered rooms.
#[derive(Args)]
pub struct RoomsCommand {}

impl RoomsCommand {
    /// Execute the rooms command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;
        let rooms = store.with_database(|db| Database::list_rooms(db.connection()))?;

        if rooms.is_empty() {
            if !global.quiet {
                eprintln!("No rooms registered yet");
            }
            return Ok(());
        }
        write_rooms(&mut io::stdout().lock(), &rooms)?;
        Ok(())
    }
}

/// List the shifts of the day.
#[derive(Args)]
pub struct ShiftsCommand {}

impl ShiftsCommand {
    /// Execute the shifts command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;
        let shifts = store.with_database(|db| Database::list_shifts(db.connection()))?;
        write_shifts(&mut io::stdout().lock(), &shifts)?;
        Ok(())
    }
}
