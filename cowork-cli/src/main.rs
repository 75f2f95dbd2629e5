//! Main entry point for the cowork CLI.
//!
//! This is the command-line interface for the coworking room booking
//! system. Without a subcommand it runs the interactive menu; the
//! subcommands expose the same operations for scripts:
//! - `register-client` / `register-room`: Add clients and rooms
//! - `reserve`: Book a room for one shift of one day
//! - `rename`: Change the event name of a reservation
//! - `cancel`: Cancel a reservation and free its slot
//! - `list`: Show and export the reservations in a date range

mod cli;
mod commands;
mod error;
mod prompt;
mod render;
mod utils;

use clap::Parser;
use cli::{Cli, Command};
use commands::MenuCommand;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cowork::install_logger(cowork::init_logger(cli.verbose, cli.quiet)) {
        if cli.verbose {
            eprintln!("Warning: logging disabled: {e}");
        }
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        config: cli.config,
    };

    let result = match cli.command {
        None => MenuCommand {}.execute(&global),
        Some(Command::Init(cmd)) => cmd.execute(&global),
        Some(Command::RegisterClient(cmd)) => cmd.execute(&global),
        Some(Command::RegisterRoom(cmd)) => cmd.execute(&global),
        Some(Command::Clients(cmd)) => cmd.execute(&global),
        Some(Command::Rooms(cmd)) => cmd.execute(&global),
        Some(Command::Shifts(cmd)) => cmd.execute(&global),
        Some(Command::Reserve(cmd)) => cmd.execute(&global),
        Some(Command::Rename(cmd)) => cmd.execute(&global),
        Some(Command::Cancel(cmd)) => cmd.execute(&global),
        Some(Command::List(cmd)) => cmd.execute(&global),
        Some(Command::Completions(cmd)) => cmd.execute(&global),
        Some(Command::Menu(cmd)) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
