//! Client and room records.
//!
//! Clients and rooms are registered once and never updated or deleted.
//! Names are restricted to letters and spaces; a room's capacity is a
//! non-negative whole number.

use serde::{Deserialize, Serialize};

use crate::reservation::ValidationError;

record_id!(
    /// Identifier of a registered client.
    ClientId
);

record_id!(
    /// Identifier of a registered room.
    RoomId
);

/// Validates a name made of letters and spaces.
///
/// Leading and trailing whitespace is removed before checking. Any Unicode
/// letter is accepted, so accented names pass.
///
/// # Errors
///
/// Returns an error if the trimmed value is empty or contains anything other
/// than letters and spaces.
///
/// # Examples
///
/// ```
/// use cowork::registry::validate_letters;
///
/// assert_eq!(validate_letters("first_name", "  José María ").unwrap(), "José María");
/// assert!(validate_letters("first_name", "R2D2").is_err());
/// assert!(validate_letters("first_name", "   ").is_err());
/// ```
pub fn validate_letters(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError {
            field: field.into(),
            message: "must not be empty".into(),
        });
    }
    if !trimmed.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(ValidationError {
            field: field.into(),
            message: format!("'{trimmed}' may contain only letters and spaces"),
        });
    }
    Ok(trimmed.to_string())
}

/// Parses a room capacity written as a whole number.
///
/// # Errors
///
/// Returns an error for signs, decimals, or anything that is not a number
/// representable as `u32`.
///
/// # Examples
///
/// ```
/// use cowork::registry::parse_capacity;
///
/// assert_eq!(parse_capacity(" 12 ").unwrap(), 12);
/// assert_eq!(parse_capacity("0").unwrap(), 0);
/// assert!(parse_capacity("-1").is_err());
/// assert!(parse_capacity("4.5").is_err());
/// ```
pub fn parse_capacity(input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    let invalid = || ValidationError {
        field: "capacity".into(),
        message: format!("'{trimmed}' is not a non-negative whole number"),
    };
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    trimmed.parse().map_err(|_| invalid())
}

/// A client that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    first_name: String,
    last_name: String,
}

impl NewClient {
    /// Validates and creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if either name is empty or contains characters other
    /// than letters and spaces.
    pub fn new(first_name: &str, last_name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: validate_letters("first_name", first_name)?,
            last_name: validate_letters("last_name", last_name)?,
        })
    }

    /// The client's first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The client's last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

/// A stored client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// The client's identifier.
    pub id: ClientId,
    /// The client's first name.
    pub first_name: String,
    /// The client's last name.
    pub last_name: String,
}

impl Client {
    /// First and last name separated by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A room that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoom {
    name: String,
    capacity: u32,
}

impl NewRoom {
    /// Validates and creates a new room.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or contains characters other
    /// than letters and spaces.
    pub fn new(name: &str, capacity: u32) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_letters("name", name)?,
            capacity,
        })
    }

    /// The room's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of people the room holds.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }
}

/// A stored room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// The room's identifier.
    pub id: RoomId,
    /// The room's name.
    pub name: String,
    /// The number of people the room holds.
    pub capacity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_spaces_accepted() {
        assert_eq!(validate_letters("name", "Sala A").unwrap(), "Sala A");
        assert_eq!(validate_letters("name", "Ruíz").unwrap(), "Ruíz");
    }

    #[test]
    fn test_digits_and_punctuation_rejected() {
        for bad in ["Sala 1", "O'Neil", "Ana-María", "x_y", "\t"] {
            let err = validate_letters("name", bad).unwrap_err();
            assert_eq!(err.field, "name");
        }
    }

    #[test]
    fn test_new_client_trims_names() {
        let client = NewClient::new(" Ana ", "Ruiz  ").unwrap();
        assert_eq!(client.first_name(), "Ana");
        assert_eq!(client.last_name(), "Ruiz");
    }

    #[test]
    fn test_new_client_reports_failing_field() {
        let err = NewClient::new("Ana", "").unwrap_err();
        assert_eq!(err.field, "last_name");
        let err = NewClient::new("4na", "Ruiz").unwrap_err();
        assert_eq!(err.field, "first_name");
    }

    #[test]
    fn test_client_full_name() {
        let client = Client {
            id: ClientId::new(1),
            first_name: "Ana".into(),
            last_name: "Ruiz".into(),
        };
        assert_eq!(client.full_name(), "Ana Ruiz");
    }

    #[test]
    fn test_capacity_parsing() {
        assert_eq!(parse_capacity("4").unwrap(), 4);
        for bad in ["", "+4", "-4", "four", "1e3", "99999999999"] {
            let err = parse_capacity(bad).unwrap_err();
            assert_eq!(err.field, "capacity");
        }
    }

    #[test]
    fn test_new_room() {
        let room = NewRoom::new("Sala A", 4).unwrap();
        assert_eq!(room.name(), "Sala A");
        assert_eq!(room.capacity(), 4);
        assert!(NewRoom::new("Sala #1", 4).is_err());
    }

    #[test]
    fn test_id_parsing() {
        assert_eq!("7".parse::<ClientId>().unwrap(), ClientId::new(7));
        assert_eq!(" 12 ".parse::<RoomId>().unwrap().value(), 12);
        assert!("0".parse::<RoomId>().is_err());
        assert!("abc".parse::<ClientId>().is_err());
    }
}
