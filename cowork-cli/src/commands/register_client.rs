//! Register-client command implementation.

use clap::Args;
use cowork::operations::{RegisterClientOptions, RegisterPlan};

use crate::error::CliError;
use crate::render::write_dry_run;
use crate::utils::{load_configuration, open_store, run_plan, GlobalOptions};

/// Register a client.
#[derive(Args)]
pub struct RegisterClientCommand {
    /// First name(s); letters and spaces only
    #[arg(long, value_name = "NAME")]
    pub first_name: String,

    /// Last name(s); letters and spaces only
    #[arg(long, value_name = "NAME")]
    pub last_name: String,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl RegisterClientCommand {
    /// Execute the register-client command.
    ///
    /// Prints the new client's identifier to stdout.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let plan = RegisterPlan::client(RegisterClientOptions::new(self.first_name, self.last_name));
        let result = run_plan(&store, self.dry_run, |_| plan.build_plan())?;

        if result.dry_run {
            if !global.quiet {
                write_dry_run(&mut std::io::stderr(), &result)?;
            }
        } else if let Some(id) = result.client_id() {
            println!("{id}");
        }

        Ok(())
    }
}
