//! Error-accumulating validation
//!
//! `Validation` is the counterpart to the fail-fast [`Rule`](crate::Rule)
//! combinator: combining two validations keeps *both* failures instead of
//! stopping at the first one. The imperative audit in
//! [`CustomerValidatorService`](crate::CustomerValidatorService) is built on it.
//!
//! # Example
//!
//! ```
//! use rulechain::{Validation, ValidationResult};
//!
//! let email = ValidationResult::invalid_email("missing '@'").into_validation();
//! let age = ValidationResult::underage("17 years old").into_validation();
//!
//! let combined = email.and(age).map(|_| ());
//! assert_eq!(
//!     combined,
//!     Validation::Failure(vec![
//!         ValidationResult::invalid_email("missing '@'"),
//!         ValidationResult::underage("17 years old"),
//!     ])
//! );
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors.
///
/// # Type Parameters
///
/// * `T` - The success value
/// * `E` - The error value, a `Semigroup` when errors are accumulated
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Convert this validation to a `Result`
    ///
    /// # Examples
    ///
    /// ```
    /// use rulechain::Validation;
    ///
    /// let v = Validation::<i32, Vec<&str>>::failure(vec!["bad"]);
    /// assert_eq!(v.into_result(), Err(vec!["bad"]));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors with `Semigroup::combine`.
    ///
    /// Unlike the rule combinator, both sides are always already evaluated;
    /// nothing is skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use rulechain::Validation;
    ///
    /// let v1 = Validation::<i32, _>::failure(vec!["email"]);
    /// let v2 = Validation::<i32, _>::failure(vec!["phone"]);
    /// assert_eq!(v1.and(v2), Validation::Failure(vec!["email", "phone"]));
    /// ```
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Combine every validation of an iterator, keeping all successes or all errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use rulechain::Validation;
    ///
    /// let all = Validation::all([
    ///     Validation::<_, Vec<&str>>::success(1),
    ///     Validation::failure(vec!["phone"]),
    ///     Validation::failure(vec!["age"]),
    /// ]);
    /// assert_eq!(all, Validation::Failure(vec!["phone", "age"]));
    /// ```
    pub fn all<I>(validations: I) -> Validation<Vec<T>, E>
    where
        I: IntoIterator<Item = Validation<T, E>>,
    {
        let mut successes = Vec::new();
        let mut errors: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    errors = Some(match errors {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match errors {
            Some(errors) => Validation::Failure(errors),
            None => Validation::Success(successes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_both_success_pairs_values() {
        let v = Validation::<_, Vec<&str>>::success(1).and(Validation::success("a"));
        assert_eq!(v, Validation::Success((1, "a")));
    }

    #[test]
    fn and_keeps_single_failure() {
        let v = Validation::<i32, _>::success(1).and(Validation::<i32, _>::failure(vec!["x"]));
        assert_eq!(v, Validation::Failure(vec!["x"]));
    }

    #[test]
    fn all_of_empty_is_success() {
        let v = Validation::<i32, Vec<&str>>::all(Vec::new());
        assert_eq!(v, Validation::Success(vec![]));
    }

    #[test]
    fn all_collects_successes_in_order() {
        let v = Validation::<_, Vec<&str>>::all([Validation::success(1), Validation::success(2)]);
        assert_eq!(v, Validation::Success(vec![1, 2]));
    }

    #[test]
    fn into_result_round_trips_variants() {
        assert_eq!(Validation::<_, ()>::success(1).into_result(), Ok(1));
        assert!(Validation::<(), _>::failure("e").is_failure());
    }
}
