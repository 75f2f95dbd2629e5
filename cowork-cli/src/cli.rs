//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    CancelCommand, ClientsCommand, CompletionsCommand, InitCommand, ListCommand, MenuCommand,
    RegisterClientCommand, RegisterRoomCommand, RenameCommand, ReserveCommand, RoomsCommand,
    ShiftsCommand,
};

/// Room bookings for a shared workspace.
#[derive(Parser)]
#[command(name = "cowork")]
#[command(
    version,
    about = "Book rooms in a shared workspace",
    long_about = "Book rooms in a shared workspace. Without a subcommand the interactive menu starts."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "COWORK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "COWORK_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u64>,

    /// Read an additional configuration file
    #[arg(long, value_name = "FILE", global = true, env = "COWORK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and database
    Init(InitCommand),

    /// Register a client
    RegisterClient(RegisterClientCommand),

    /// Register a room
    RegisterRoom(RegisterRoomCommand),

    /// List registered clients
    Clients(ClientsCommand),

    /// List registered rooms
    Rooms(RoomsCommand),

    /// List the shifts of the day
    Shifts(ShiftsCommand),

    /// Book a room for one shift of one day
    Reserve(ReserveCommand),

    /// Change the event name of a reservation
    Rename(RenameCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// List reservations in a date range, optionally exporting them
    List(ListCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),

    /// Run the interactive menu
    Menu(MenuCommand),
}
