//! Plan execution engine.
//!
//! The executor applies the actions of an [`OperationPlan`] to the store in
//! order. Each action is one statement; a failing action stops execution and
//! its error is returned.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::registry::{ClientId, RoomId};
use crate::reservation::ReservationId;
use crate::schedule::availability::{AvailabilityChecker, StoreAvailability};

use super::plan::{OperationPlan, PlanAction};

/// A record created while executing a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatedRecord {
    /// A client was registered.
    Client(ClientId),
    /// A room was registered.
    Room(RoomId),
    /// A reservation was stored.
    Reservation(ReservationId),
}

/// Result of executing a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry run (no changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in a dry run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The last record created, if any.
    pub created: Option<CreatedRecord>,
}

impl ExecutionResult {
    fn from_plan(plan: &OperationPlan, dry_run: bool, created: Option<CreatedRecord>) -> Self {
        Self {
            success: true,
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            created,
        }
    }

    /// The identifier of the created reservation, if the plan created one.
    #[must_use]
    pub const fn reservation_id(&self) -> Option<ReservationId> {
        match self.created {
            Some(CreatedRecord::Reservation(id)) => Some(id),
            _ => None,
        }
    }

    /// The identifier of the registered client, if the plan registered one.
    #[must_use]
    pub const fn client_id(&self) -> Option<ClientId> {
        match self.created {
            Some(CreatedRecord::Client(id)) => Some(id),
            _ => None,
        }
    }

    /// The identifier of the registered room, if the plan registered one.
    #[must_use]
    pub const fn room_id(&self) -> Option<RoomId> {
        match self.created {
            Some(CreatedRecord::Room(id)) => Some(id),
            _ => None,
        }
    }
}

/// Executes operation plans against the store.
///
/// # Examples
///
/// ```
/// use cowork::database::{Database, DatabaseConfig};
/// use cowork::operations::{PlanExecutor, RegisterClientOptions, RegisterPlan};
///
/// let dir = tempfile::tempdir().unwrap();
/// let db = Database::open(DatabaseConfig::in_data_dir(dir.path())).unwrap();
///
/// let plan = RegisterPlan::client(RegisterClientOptions::new("Ana", "Ruiz"))
///     .build_plan()
///     .unwrap();
///
/// // Dry run reports without writing
/// let preview = PlanExecutor::new(db.connection()).dry_run().execute(&plan).unwrap();
/// assert!(preview.dry_run);
/// assert!(Database::list_clients(db.connection()).unwrap().is_empty());
///
/// let result = PlanExecutor::new(db.connection()).execute(&plan).unwrap();
/// assert!(result.client_id().is_some());
/// ```
#[derive(Debug)]
pub struct PlanExecutor<'a> {
    conn: &'a Connection,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub const fn new(conn: &'a Connection) -> Self {
        Self {
            conn,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode the plan is reported but nothing is written.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// # Errors
    ///
    /// Returns the error of the first action that fails.
    pub fn execute(&self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            log::info!("dry run: {}", plan.description);
            return Ok(ExecutionResult::from_plan(plan, true, None));
        }

        for warning in &plan.warnings {
            log::warn!("{warning}");
        }

        let mut created = None;
        for action in &plan.actions {
            log::debug!("executing: {}", action.description());
            if let Some(record) = self.execute_action(action)? {
                created = Some(record);
            }
        }

        log::info!("{}", plan.description);
        Ok(ExecutionResult::from_plan(plan, false, created))
    }

    fn execute_action(&self, action: &PlanAction) -> Result<Option<CreatedRecord>> {
        match action {
            PlanAction::RegisterClient(client) => {
                let id = Database::insert_client(self.conn, client)?;
                Ok(Some(CreatedRecord::Client(id)))
            }
            PlanAction::RegisterRoom(room) => {
                let id = Database::insert_room(self.conn, room)?;
                Ok(Some(CreatedRecord::Room(id)))
            }
            PlanAction::CreateReservation(reservation) => {
                // Final gate; the unique index still catches a concurrent writer
                let slot = reservation.slot;
                if StoreAvailability::new(self.conn).is_occupied(&slot)? {
                    return Err(Error::SlotOccupied { slot });
                }
                let id = Database::insert_reservation(self.conn, reservation)?;
                Ok(Some(CreatedRecord::Reservation(id)))
            }
            PlanAction::RenameEvent { id, event_name } => {
                if !Database::update_event_name(self.conn, *id, event_name)? {
                    return Err(self.missing_active(*id));
                }
                Ok(None)
            }
            PlanAction::CancelReservation(id) => {
                if !Database::cancel_reservation(self.conn, *id)? {
                    return Err(self.missing_active(*id));
                }
                Ok(None)
            }
        }
    }

    /// Explains why no Active reservation matched `id`.
    fn missing_active(&self, id: ReservationId) -> Error {
        match Database::get_reservation(self.conn, id) {
            Ok(Some(_)) => Error::AlreadyCancelled { id },
            Ok(None) => Error::NotFound {
                resource: format!("reservation {id}"),
            },
            Err(e) => e,
        }
    }
}
