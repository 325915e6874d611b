//! Rules and the fail-fast `and` combinator
//!
//! A [`Rule`] maps a subject to a [`ValidationResult`]. Rules compose with
//! [`RuleExt::and`]: the left rule runs first and, if it fails, its failure
//! is the answer and the right rule never runs. Only when the left rule
//! returns `Success` does the right rule decide.
//!
//! Unlike `&&` on booleans this keeps *which* rule failed and *why*.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rulechain::prelude::*;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let alice = Customer::new(
//!     "Alice",
//!     "alice@gmail.com",
//!     "+48535325",
//!     NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
//! )
//! .unwrap();
//!
//! let rule = is_email_valid()
//!     .and(is_phone_number_valid())
//!     .and(is_adult_with(AgePolicy::default(), FixedClock::new(today)));
//!
//! assert_eq!(rule.apply(&alice), ValidationResult::Success);
//! assert_eq!(
//!     rule.apply(&alice.with_email("alice")).kind(),
//!     VerdictKind::InvalidEmail,
//! );
//! ```

mod chain;
mod registration;
#[cfg(feature = "tracing")]
mod tracing;

use std::fmt;

use crate::ValidationResult;

pub use chain::{all_of, AllOf, Chain};
pub use registration::{
    is_adult, is_adult_with, is_email_valid, is_email_valid_with, is_phone_number_valid,
    is_phone_number_valid_with, registration_rule, AdultRule, EmailRule, PhoneNumberRule,
    RegistrationRule,
};
#[cfg(feature = "tracing")]
pub use self::tracing::Traced;

/// A pure check from a subject to a verdict.
///
/// Rules only borrow the subject and must not have side effects that the
/// verdict depends on. Any `Fn(&T) -> ValidationResult + Send + Sync` closure
/// is a rule.
///
/// # Example
///
/// ```rust
/// use rulechain::{Rule, ValidationResult};
///
/// let non_blank = |s: &str| {
///     if s.trim().is_empty() {
///         ValidationResult::invalid_email("blank")
///     } else {
///         ValidationResult::SUCCESS
///     }
/// };
///
/// assert!(non_blank.apply("x").is_success());
/// assert!(non_blank.apply(" ").is_failure());
/// ```
pub trait Rule<T: ?Sized>: Send + Sync {
    /// Evaluate the rule against `subject`.
    fn apply(&self, subject: &T) -> ValidationResult;
}

impl<T: ?Sized, F> Rule<T> for F
where
    F: Fn(&T) -> ValidationResult + Send + Sync,
{
    #[inline]
    fn apply(&self, subject: &T) -> ValidationResult {
        self(subject)
    }
}

/// Combinators available on every [`Rule`].
pub trait RuleExt<T: ?Sized>: Rule<T> + Sized {
    /// Compose with fail-fast semantics.
    ///
    /// `a.and(b)` returns `a`'s failure without running `b`, or `b`'s verdict
    /// when `a` succeeds. Grouping does not matter:
    /// `a.and(b).and(c)` and `a.and(b.and(c))` give the same verdict and skip
    /// the same rules.
    ///
    /// ```rust
    /// use rulechain::{Rule, RuleExt, ValidationResult};
    ///
    /// let fails = |_: &i32| ValidationResult::underage("too young");
    /// let panics = |_: &i32| -> ValidationResult { unreachable!() };
    ///
    /// assert_eq!(fails.and(panics).apply(&1), ValidationResult::underage("too young"));
    /// ```
    fn and<R: Rule<T>>(self, next: R) -> And<Self, R> {
        And(self, next)
    }

    /// Erase the concrete type, e.g. to store rules in a [`Chain`].
    fn boxed(self) -> BoxedRule<T>
    where
        Self: 'static,
    {
        BoxedRule::new(self)
    }

    /// Emit a `tracing` event with `name` and the verdict on every evaluation.
    #[cfg(feature = "tracing")]
    fn traced(self, name: &'static str) -> Traced<Self> {
        Traced::new(self, name)
    }
}

impl<T: ?Sized, R: Rule<T>> RuleExt<T> for R {}

/// Fail-fast composition of two rules. See [`RuleExt::and`].
#[derive(Clone, Copy, Debug)]
pub struct And<R1, R2>(pub R1, pub R2);

impl<T: ?Sized, R1: Rule<T>, R2: Rule<T>> Rule<T> for And<R1, R2> {
    #[inline]
    fn apply(&self, subject: &T) -> ValidationResult {
        match self.0.apply(subject) {
            ValidationResult::Success => self.1.apply(subject),
            failure => {
                #[cfg(feature = "tracing")]
                ::tracing::trace!(verdict = %failure.kind(), "short-circuit, skipping next rule");
                failure
            }
        }
    }
}

/// A type-erased rule.
pub struct BoxedRule<T: ?Sized> {
    inner: Box<dyn Rule<T>>,
}

impl<T: ?Sized> BoxedRule<T> {
    /// Box `rule`.
    pub fn new<R: Rule<T> + 'static>(rule: R) -> Self {
        Self {
            inner: Box::new(rule),
        }
    }
}

impl<T: ?Sized> Rule<T> for BoxedRule<T> {
    #[inline]
    fn apply(&self, subject: &T) -> ValidationResult {
        self.inner.apply(subject)
    }
}

impl<T: ?Sized> fmt::Debug for BoxedRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedRule").finish_non_exhaustive()
    }
}
