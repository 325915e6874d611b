//! Precondition errors.
//!
//! These are programmer errors raised while *building* inputs or
//! configuration. They never describe a validation outcome; that is what
//! [`ValidationResult`](crate::ValidationResult) is for.

use std::fmt;

/// Error returned when a [`Customer`](crate::Customer) cannot be constructed.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use rulechain::{Customer, CustomerError};
///
/// let birth = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// let err = Customer::new("  ", "a@b.c", "+4812345678", birth).unwrap_err();
/// assert_eq!(err, CustomerError::MissingField { field: "name" });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerError {
    /// A required field was empty or only whitespace.
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },
}

impl fmt::Display for CustomerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerError::MissingField { field } => {
                write!(f, "customer field `{}` is required", field)
            }
        }
    }
}

impl std::error::Error for CustomerError {}

/// Error returned when a rule configuration is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A lower bound exceeds its upper bound.
    InvalidRange {
        /// Which setting was rejected.
        setting: &'static str,
        /// Lower bound supplied.
        min: usize,
        /// Upper bound supplied.
        max: usize,
    },
    /// A string setting must not be empty.
    Empty {
        /// Which setting was rejected.
        setting: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRange { setting, min, max } => {
                write!(f, "{}: min ({}) is greater than max ({})", setting, min, max)
            }
            ConfigError::Empty { setting } => write!(f, "{} must not be empty", setting),
        }
    }
}

impl std::error::Error for ConfigError {}
