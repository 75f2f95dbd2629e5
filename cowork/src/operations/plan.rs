//! Plan types for lifecycle operations.
//!
//! A plan describes what an operation will change without changing it. Plans
//! are built against the store, can be inspected or shown to the operator,
//! and are applied by the [`PlanExecutor`](super::PlanExecutor).

use crate::registry::{NewClient, NewRoom};
use crate::reservation::{EventName, NewReservation, ReservationId};

/// A single change to be applied during plan execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Register a new client.
    RegisterClient(NewClient),

    /// Register a new room.
    RegisterRoom(NewRoom),

    /// Store a new Active reservation.
    CreateReservation(NewReservation),

    /// Replace the event name of an Active reservation.
    RenameEvent {
        /// The reservation to rename.
        id: ReservationId,
        /// The new event name.
        event_name: EventName,
    },

    /// Cancel an Active reservation, releasing its slot.
    CancelReservation(ReservationId),
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::RegisterClient(client) => {
                format!(
                    "Register client {} {}",
                    client.first_name(),
                    client.last_name()
                )
            }
            Self::RegisterRoom(room) => {
                format!(
                    "Register room {} with capacity {}",
                    room.name(),
                    room.capacity()
                )
            }
            Self::CreateReservation(reservation) => {
                format!(
                    "Reserve {} for client {}: {}",
                    reservation.slot, reservation.client_id, reservation.event_name
                )
            }
            Self::RenameEvent { id, event_name } => {
                format!("Rename event of reservation {id} to {event_name}")
            }
            Self::CancelReservation(id) => format!("Cancel reservation {id}"),
        }
    }
}

/// A complete operation plan describing all actions to be taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the operator.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates an empty plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use cowork::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Cancel reservation 4");
    /// assert_eq!(plan.description, "Cancel reservation 4");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use cowork::operations::{OperationPlan, PlanAction};
    /// use cowork::ReservationId;
    ///
    /// let plan = OperationPlan::new("Cancel")
    ///     .add_action(PlanAction::CancelReservation(ReservationId::new(4)));
    /// assert_eq!(plan.len(), 1);
    /// ```
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
