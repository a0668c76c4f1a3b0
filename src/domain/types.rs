//! Strongly-typed value objects used by domain entities.

use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
}

/// Opaque lead identifier.
///
/// The database backend hands out autoincrement integers, the local backend
/// hands out `lead_<millis>` strings. Callers only ever compare and echo it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct LeadId(String);

impl LeadId {
    /// Wraps a non-empty identifier.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(value))
    }

    /// Borrow the identifier as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for LeadId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for LeadId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for LeadId {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_id_rejects_blank_values() {
        assert_eq!(LeadId::new("  "), Err(TypeConstraintError::EmptyString));
        assert_eq!(LeadId::new("lead_1").unwrap().as_str(), "lead_1");
    }

    #[test]
    fn lead_id_serializes_as_plain_string() {
        let id = LeadId::from(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
        let parsed: LeadId = serde_json::from_str("\"lead_1700000000000\"").unwrap();
        assert_eq!(parsed.as_str(), "lead_1700000000000");
    }
}
