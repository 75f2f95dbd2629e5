//! Cancel command implementation.
//!
//! Cancellation cannot be undone, so the command refuses to run without
//! `--yes`.

use chrono::NaiveDate;
use clap::Args;
use cowork::operations::{CancelOptions, CancelPlan};
use cowork::ReservationId;

use crate::error::CliError;
use crate::render::write_dry_run;
use crate::utils::{
    date_range, load_configuration, open_store, parse_date_arg, run_plan, GlobalOptions,
};

/// Cancel a reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// First day of the range (MM-DD-YYYY)
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    pub from: NaiveDate,

    /// Last day of the range (MM-DD-YYYY)
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    pub to: NaiveDate,

    /// Reservation identifier
    #[arg(long, value_name = "ID")]
    pub id: i64,

    /// Confirm the cancellation
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let range = date_range(self.from, self.to)?;
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        // A dry run writes nothing, so it needs no confirmation
        let options = CancelOptions::new(range, ReservationId::new(self.id))
            .with_confirmed(self.yes || self.dry_run);
        let planner = CancelPlan::new(options, config.booking_policy());
        let result = run_plan(&store, self.dry_run, |db| planner.build_plan(db.connection()))?;

        if result.dry_run {
            if !global.quiet {
                write_dry_run(&mut std::io::stderr(), &result)?;
            }
        } else if !global.quiet {
            eprintln!("Reservation {} cancelled; its slot is free again", self.id);
        }

        Ok(())
    }
}
