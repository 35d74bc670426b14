// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error taxonomy shared by every layer of the crate.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while parsing literals, reading a dataset
/// schema, reading record fields, or dispatching a registered function.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A date literal or date components could not be resolved.
    #[error("malformed date: {0}")]
    MalformedDate(String),

    /// A time literal or time components are out of range.
    #[error("malformed time: {0}")]
    MalformedTime(String),

    /// The field-binding schema of a dataset is missing or inconsistent.
    #[error("configuration error in '{container}': {message}")]
    Config { container: String, message: String },

    /// The record reader returned something that is not an integer or a float.
    #[error("field '{field}' does not hold a numeric value")]
    NotNumeric { field: String },

    /// The record reader has no field with this name.
    #[error("field '{field}' does not exist in the current record")]
    UnknownField { field: String },

    /// A registered function was called with the wrong number of arguments.
    #[error("function '{name}' expects {min}-{max} arguments, got {actual}")]
    Arity {
        name: String,
        min: usize,
        max: usize,
        actual: usize,
    },

    /// No function with this name has been registered.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    /// The evaluator could not add or fill a synthesized output field.
    #[error("output error: {0}")]
    Output(String),
}

impl Error {
    pub(crate) fn config(container: &str, message: impl Into<String>) -> Self {
        Error::Config {
            container: container.to_string(),
            message: message.into(),
        }
    }

    /// `true` for the errors that disable a dataset feature instead of
    /// aborting a single query.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_message_names_bounds() {
        let err = Error::Arity {
            name: "date".into(),
            min: 1,
            max: 2,
            actual: 3,
        };
        assert_eq!(err.to_string(), "function 'date' expects 1-2 arguments, got 3");
    }

    #[test]
    fn test_config_helper() {
        let err = Error::config("DODS_Date", "no year_variable");
        assert!(err.is_config());
        assert!(err.to_string().contains("DODS_Date"));
        assert!(!Error::MalformedDate("x".into()).is_config());
    }
}
