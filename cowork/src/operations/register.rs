//! Client and room registration planning.

use crate::error::{Error, Result};
use crate::registry::{NewClient, NewRoom};

use super::plan::{OperationPlan, PlanAction};

/// Options for registering a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterClientOptions {
    /// First name as entered.
    pub first_name: String,
    /// Last name as entered.
    pub last_name: String,
}

impl RegisterClientOptions {
    /// Creates client registration options.
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Options for registering a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRoomOptions {
    /// Room name as entered.
    pub name: String,
    /// Capacity as entered; must be a non-negative whole number.
    pub capacity: i64,
}

impl RegisterRoomOptions {
    /// Creates room registration options.
    #[must_use]
    pub fn new(name: impl Into<String>, capacity: i64) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }
}

/// A registration plan generator for either a client or a room.
#[derive(Debug, Clone)]
pub enum RegisterPlan {
    /// Register a client.
    Client(RegisterClientOptions),
    /// Register a room.
    Room(RegisterRoomOptions),
}

impl RegisterPlan {
    /// Plans a client registration.
    #[must_use]
    pub const fn client(options: RegisterClientOptions) -> Self {
        Self::Client(options)
    }

    /// Plans a room registration.
    #[must_use]
    pub const fn room(options: RegisterRoomOptions) -> Self {
        Self::Room(options)
    }

    /// Validates the input and builds the plan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for names that are empty or contain
    /// anything but letters and spaces, and for negative or oversized
    /// capacities.
    ///
    /// # Examples
    ///
    /// ```
    /// use cowork::operations::{RegisterPlan, RegisterRoomOptions};
    ///
    /// assert!(RegisterPlan::room(RegisterRoomOptions::new("Sala A", 4)).build_plan().is_ok());
    /// assert!(RegisterPlan::room(RegisterRoomOptions::new("Sala A", -1)).build_plan().is_err());
    /// ```
    pub fn build_plan(&self) -> Result<OperationPlan> {
        match self {
            Self::Client(options) => {
                let client = NewClient::new(&options.first_name, &options.last_name)?;
                Ok(OperationPlan::new(format!(
                    "Register client {} {}",
                    client.first_name(),
                    client.last_name()
                ))
                .add_action(PlanAction::RegisterClient(client)))
            }
            Self::Room(options) => {
                let capacity =
                    u32::try_from(options.capacity).map_err(|_| Error::Validation {
                        field: "capacity".into(),
                        message: format!(
                            "{} is not a non-negative whole number",
                            options.capacity
                        ),
                    })?;
                let room = NewRoom::new(&options.name, capacity)?;
                Ok(OperationPlan::new(format!("Register room {}", room.name()))
                    .add_action(PlanAction::RegisterRoom(room)))
            }
        }
    }
}
