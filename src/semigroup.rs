//! Semigroup trait for accumulating failures
//!
//! The fail-fast combinator keeps only the first failure. Strategies that want
//! to report *every* failure instead need a way to merge failure collections;
//! that is what `Semigroup` provides.
//!
//! # Laws
//!
//! `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Example
//!
//! ```
//! use rulechain::{Semigroup, ValidationResult};
//!
//! let first = vec![ValidationResult::invalid_email("missing '@'")];
//! let second = vec![ValidationResult::underage("17 years old")];
//!
//! assert_eq!(first.combine(second).len(), 2);
//! ```

/// A type with an associative binary operation.
///
/// `combine` takes `self` by value; clone first if the originals are needed.
pub trait Semigroup: Sized {
    /// Combine this value with another, associatively.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
