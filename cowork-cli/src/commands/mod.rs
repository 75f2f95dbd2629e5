//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Create the data directory and database
//! - `register_client`, `register_room`: Add clients and rooms
//! - `catalog`: List clients, rooms and shifts
//! - `reserve`: Book a room for one shift of one day
//! - `rename`: Change a reservation's event name
//! - `cancel`: Cancel a reservation
//! - `list`: Query reservations by date range and export them
//! - `completions`: Shell completion scripts
//! - `menu`: The interactive menu

pub mod cancel;
pub mod catalog;
pub mod completions;
pub mod init;
pub mod list;
pub mod menu;
pub mod register_client;
pub mod register_room;
pub mod rename;
pub mod reserve;

pub use cancel::CancelCommand;
pub use catalog::{ClientsCommand, RoomsCommand, ShiftsCommand};
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use menu::MenuCommand;
pub use register_client::RegisterClientCommand;
pub use register_room::RegisterRoomCommand;
pub use rename::RenameCommand;
pub use reserve::ReserveCommand;
