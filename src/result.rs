//! Validation verdicts
//!
//! A [`ValidationResult`] is the single answer produced by applying a
//! [`Rule`](crate::Rule): either `Success` or exactly one failure reason.
//!
//! # Example
//!
//! ```
//! use rulechain::{ValidationResult, VerdictKind};
//!
//! let verdict = ValidationResult::invalid_email("missing '@'");
//! assert!(verdict.is_failure());
//! assert_eq!(verdict.kind(), VerdictKind::InvalidEmail);
//! assert_eq!(verdict.reason(), Some("missing '@'"));
//! assert_eq!(verdict.to_string(), "INVALID_EMAIL: missing '@'");
//! ```

use std::fmt;

use crate::Validation;

/// The verdict of a rule: success, or one specific failure with a reason.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationResult {
    /// Every check passed.
    Success,
    /// The email does not have the expected shape.
    InvalidEmail(String),
    /// The phone number does not have the expected shape.
    InvalidPhoneNumber(String),
    /// The customer is younger than the configured minimum age.
    Underage(String),
}

/// Payload-free tag of a [`ValidationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerdictKind {
    /// See [`ValidationResult::Success`].
    Success,
    /// See [`ValidationResult::InvalidEmail`].
    InvalidEmail,
    /// See [`ValidationResult::InvalidPhoneNumber`].
    InvalidPhoneNumber,
    /// See [`ValidationResult::Underage`].
    Underage,
}

impl VerdictKind {
    /// Upper snake case label used in `Display` output.
    pub fn as_str(self) -> &'static str {
        match self {
            VerdictKind::Success => "SUCCESS",
            VerdictKind::InvalidEmail => "INVALID_EMAIL",
            VerdictKind::InvalidPhoneNumber => "INVALID_PHONE_NUMBER",
            VerdictKind::Underage => "UNDERAGE",
        }
    }
}

impl fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ValidationResult {
    /// The "all clear" verdict.
    pub const SUCCESS: ValidationResult = ValidationResult::Success;

    /// Create an `InvalidEmail` failure.
    pub fn invalid_email(reason: impl Into<String>) -> Self {
        ValidationResult::InvalidEmail(reason.into())
    }

    /// Create an `InvalidPhoneNumber` failure.
    pub fn invalid_phone_number(reason: impl Into<String>) -> Self {
        ValidationResult::InvalidPhoneNumber(reason.into())
    }

    /// Create an `Underage` failure.
    pub fn underage(reason: impl Into<String>) -> Self {
        ValidationResult::Underage(reason.into())
    }

    /// `true` for `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationResult::Success)
    }

    /// `true` for every failure variant.
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The tag of this verdict.
    pub fn kind(&self) -> VerdictKind {
        match self {
            ValidationResult::Success => VerdictKind::Success,
            ValidationResult::InvalidEmail(_) => VerdictKind::InvalidEmail,
            ValidationResult::InvalidPhoneNumber(_) => VerdictKind::InvalidPhoneNumber,
            ValidationResult::Underage(_) => VerdictKind::Underage,
        }
    }

    /// The failure reason, `None` for `Success`.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ValidationResult::Success => None,
            ValidationResult::InvalidEmail(reason)
            | ValidationResult::InvalidPhoneNumber(reason)
            | ValidationResult::Underage(reason) => Some(reason),
        }
    }

    /// Convert to a `Result`, so a caller can bail out with `?`.
    ///
    /// # Example
    ///
    /// ```
    /// use rulechain::ValidationResult;
    ///
    /// fn register(verdict: ValidationResult) -> Result<&'static str, ValidationResult> {
    ///     verdict.into_result()?;
    ///     Ok("registered")
    /// }
    ///
    /// assert_eq!(register(ValidationResult::SUCCESS), Ok("registered"));
    /// assert!(register(ValidationResult::underage("16 years old")).is_err());
    /// ```
    pub fn into_result(self) -> Result<(), ValidationResult> {
        match self {
            ValidationResult::Success => Ok(()),
            failure => Err(failure),
        }
    }

    /// Lift into an accumulating [`Validation`] holding at most this one failure.
    pub fn into_validation(self) -> Validation<(), Vec<ValidationResult>> {
        match self {
            ValidationResult::Success => Validation::Success(()),
            failure => Validation::Failure(vec![failure]),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason() {
            None => write!(f, "{}", self.kind()),
            Some(reason) => write!(f, "{}: {}", self.kind(), reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_values_are_equal() {
        assert_eq!(ValidationResult::SUCCESS, ValidationResult::Success);
        assert!(ValidationResult::SUCCESS.is_success());
        assert_eq!(ValidationResult::SUCCESS.reason(), None);
    }

    #[test]
    fn failures_compare_kind_and_reason() {
        assert_eq!(
            ValidationResult::invalid_email("x"),
            ValidationResult::invalid_email("x")
        );
        assert_ne!(
            ValidationResult::invalid_email("x"),
            ValidationResult::invalid_email("y")
        );
        assert_ne!(
            ValidationResult::invalid_email("x"),
            ValidationResult::invalid_phone_number("x")
        );
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(ValidationResult::SUCCESS.kind(), VerdictKind::Success);
        assert_eq!(
            ValidationResult::invalid_phone_number("p").kind(),
            VerdictKind::InvalidPhoneNumber
        );
        assert_eq!(ValidationResult::underage("a").kind(), VerdictKind::Underage);
    }

    #[test]
    fn display_includes_reason() {
        assert_eq!(ValidationResult::SUCCESS.to_string(), "SUCCESS");
        assert_eq!(
            ValidationResult::underage("17 years old").to_string(),
            "UNDERAGE: 17 years old"
        );
    }

    #[test]
    fn into_validation_wraps_single_failure() {
        assert_eq!(
            ValidationResult::SUCCESS.into_validation(),
            Validation::Success(())
        );
        assert_eq!(
            ValidationResult::underage("a").into_validation(),
            Validation::Failure(vec![ValidationResult::underage("a")])
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let verdict = ValidationResult::invalid_email("missing '@'");
        let json = serde_json::to_string(&verdict).unwrap();
        let back: ValidationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, verdict);
    }
}
