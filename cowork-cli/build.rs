//! Build script for cowork-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here in a reduced form.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("cowork")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book rooms in a shared workspace")
        .long_about(
            "Book rooms in a shared workspace. Without a subcommand the interactive menu starts.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("COWORK_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("COWORK_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read an additional configuration file")
                .value_name("FILE")
                .global(true)
                .env("COWORK_CONFIG"),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Initialize the data directory and database")
                .long_about("Create the data directory, the database and optionally a config file"),
            Command::new("register-client")
                .about("Register a client")
                .long_about("Add a client by first and last name"),
            Command::new("register-room")
                .about("Register a room")
                .long_about("Add a room with its name and seating capacity"),
            Command::new("clients").about("List registered clients"),
            Command::new("rooms").about("List registered rooms"),
            Command::new("shifts").about("List the shifts of the day"),
            Command::new("reserve")
                .about("Book a room for one shift of one day")
                .long_about("Book a room for a client, subject to the notice and weekday rules"),
            Command::new("rename")
                .about("Change the event name of a reservation")
                .long_about("Rename the event of an Active reservation found in a date range"),
            Command::new("cancel")
                .about("Cancel a reservation")
                .long_about("Cancel an Active reservation and free its slot for new bookings"),
            Command::new("list")
                .about("List reservations in a date range, optionally exporting them")
                .long_about(
                    "Show the Active reservations in a date range as a table, JSON or CSV, \
                     and write table, spreadsheet or JSON export files",
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
            Command::new("menu")
                .about("Run the interactive menu")
                .long_about("Run the numbered interactive menu on the terminal"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("cowork.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
