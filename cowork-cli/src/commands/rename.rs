//! Rename command implementation.

use chrono::NaiveDate;
use clap::Args;
use cowork::operations::{RenameOptions, RenamePlan};
use cowork::ReservationId;

use crate::error::CliError;
use crate::render::write_dry_run;
use crate::utils::{
    date_range, load_configuration, open_store, parse_date_arg, run_plan, GlobalOptions,
};

/// Change the event name of a reservation.
///
/// The reservation must have its date within `--from`..`--to`.
#[derive(Args)]
pub struct RenameCommand {
    /// First day of the range (MM-DD-YYYY)
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    pub from: NaiveDate,

    /// Last day of the range (MM-DD-YYYY)
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    pub to: NaiveDate,

    /// Reservation identifier
    #[arg(long, value_name = "ID")]
    pub id: i64,

    /// New event name; letters and spaces only
    #[arg(long, value_name = "NAME")]
    pub event: String,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl RenameCommand {
    /// Execute the rename command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let range = date_range(self.from, self.to)?;
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let planner = RenamePlan::new(RenameOptions::new(
            range,
            ReservationId::new(self.id),
            self.event,
        ));
        let result = run_plan(&store, self.dry_run, |db| planner.build_plan(db.connection()))?;

        if result.dry_run {
            if !global.quiet {
                write_dry_run(&mut std::io::stderr(), &result)?;
            }
        } else if !global.quiet {
            eprintln!("Event name of reservation {} updated", self.id);
        }

        Ok(())
    }
}
