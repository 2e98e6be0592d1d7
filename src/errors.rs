use crate::types::Type;
use thiserror::Error;

/// Errors returned when assigning or presenting record data.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A setter was given a value that doesn't match the field's grammar.
    /// The field keeps whatever value it had before.
    #[error("invalid {field} '{value}': {reason}")]
    Validation {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// A numeric value is outside the bounds the RFC allows for this field.
    #[error("{field} {value} is out of range, expected {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// The record was presented before all of its required fields were set.
    #[error("{rtype} record is missing required field {field}")]
    IncompleteRecord { rtype: Type, field: &'static str },
}

/// A simple type alias so as to DRY.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(field: &'static str, value: &str, reason: &'static str) -> Error {
        Error::Validation {
            field,
            value: value.to_string(),
            reason,
        }
    }

    pub(crate) fn out_of_range<V, B>(field: &'static str, value: V, min: B, max: B) -> Error
    where
        V: Into<i64>,
        B: Into<i64>,
    {
        Error::OutOfRange {
            field,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    /// Returns the name of the field this error is about.
    pub fn field(&self) -> &'static str {
        match self {
            Error::Validation { field, .. }
            | Error::OutOfRange { field, .. }
            | Error::IncompleteRecord { field, .. } => *field,
        }
    }
}
