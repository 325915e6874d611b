//! Core predicate trait and its logical combinators.
//!
//! These are boolean checks, so `and` here is plain conjunction. The
//! verdict-preserving, fail-fast `and` lives on [`RuleExt`](crate::RuleExt).

/// A composable yes/no check over values of type `T`.
///
/// # Example
///
/// ```rust
/// use rulechain::predicate::*;
///
/// let digits = not_empty().and(all_chars(|c: char| c.is_ascii_digit()));
/// assert!(digits.check("48535325"));
/// assert!(!digits.check(""));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Method chaining for predicates. Every method returns a concrete type.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// True only when both predicates hold.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// Conjunction of two predicates.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}
