//! Reserve command implementation.
//!
//! This module implements the `reserve` command, which books a room for one
//! shift of one day under the configured booking rules.

use chrono::NaiveDate;
use clap::Args;
use cowork::operations::{CreateOptions, CreatePlan};
use cowork::{ClientId, RoomId, Shift};

use crate::error::CliError;
use crate::render::{warn_all, write_dry_run};
use crate::utils::{
    load_configuration, open_store, parse_date_arg, parse_shift_arg, run_plan, GlobalOptions,
};

/// Book a room for one shift of one day.
#[derive(Args)]
pub struct ReserveCommand {
    /// Client identifier
    #[arg(long, value_name = "ID")]
    pub client: i64,

    /// Room identifier
    #[arg(long, value_name = "ID")]
    pub room: i64,

    /// Event date (MM-DD-YYYY)
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    pub date: NaiveDate,

    /// Shift: 1/morning/matutino, 2/afternoon/vespertino or 3/night/nocturno
    #[arg(long, value_name = "SHIFT", value_parser = parse_shift_arg)]
    pub shift: Shift,

    /// Event name; letters and spaces only
    #[arg(long, value_name = "NAME")]
    pub event: String,

    /// Book the following day if the date falls on the closed weekday
    #[arg(long)]
    pub accept_substitute: bool,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl ReserveCommand {
    /// Execute the reserve command.
    ///
    /// Prints the new reservation's identifier to stdout.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let options = CreateOptions::new(
            ClientId::new(self.client),
            RoomId::new(self.room),
            self.date,
            self.shift,
            self.event,
        )
        .with_accept_substitute(self.accept_substitute);
        let planner = CreatePlan::new(options, config.booking_policy());

        let result = run_plan(&store, self.dry_run, |db| planner.build_plan(db.connection()))?;

        if result.dry_run {
            if !global.quiet {
                write_dry_run(&mut std::io::stderr(), &result)?;
            }
        } else if let Some(id) = result.reservation_id() {
            println!("{id}");
        }
        warn_all(&result, global.quiet);

        Ok(())
    }
}
