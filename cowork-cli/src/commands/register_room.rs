//! Register-room command implementation.

use clap::Args;
use cowork::operations::{RegisterPlan, RegisterRoomOptions};

use crate::error::CliError;
use crate::render::write_dry_run;
use crate::utils::{load_configuration, open_store, run_plan, GlobalOptions};

/// Register a room.
#[derive(Args)]
pub struct RegisterRoomCommand {
    /// Room name; letters and spaces only
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Number of people the room holds
    #[arg(long, value_name = "PEOPLE", allow_negative_numbers = true)]
    pub capacity: i64,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl RegisterRoomCommand {
    /// Execute the register-room command.
    ///
    /// Prints the new room's identifier to stdout.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let plan = RegisterPlan::room(RegisterRoomOptions::new(self.name, self.capacity));
        let result = run_plan(&store, self.dry_run, |_| plan.build_plan())?;

        if result.dry_run {
            if !global.quiet {
                write_dry_run(&mut std::io::stderr(), &result)?;
            }
        } else if let Some(id) = result.room_id() {
            println!("{id}");
        }

        Ok(())
    }
}
