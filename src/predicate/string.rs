//! String predicates.

use super::combinators::Predicate;

/// Predicate that checks a string is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl Predicate<str> for NotEmpty {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.is_empty()
    }
}

/// Create a predicate that checks a string is not empty.
///
/// ```rust
/// use rulechain::predicate::*;
///
/// assert!(not_empty().check("alice"));
/// assert!(!not_empty().check(""));
/// ```
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks the character count is within `min..=max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LenBetween {
    min: usize,
    max: usize,
}

impl Predicate<str> for LenBetween {
    #[inline]
    fn check(&self, value: &str) -> bool {
        let len = value.chars().count();
        len >= self.min && len <= self.max
    }
}

/// Create a predicate that checks the character count is between `min` and `max`, inclusive.
///
/// ```rust
/// use rulechain::predicate::*;
///
/// let p = len_between(7, 15);
/// assert!(!p.check("123456"));
/// assert!(p.check("1234567"));
/// assert!(p.check("123456789012345"));
/// assert!(!p.check("1234567890123456"));
/// ```
pub fn len_between(min: usize, max: usize) -> LenBetween {
    LenBetween { min, max }
}

/// Predicate that checks a string starts with a prefix.
#[derive(Clone, Debug)]
pub struct StartsWith<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for StartsWith<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.starts_with(self.0.as_ref())
    }
}

/// Create a predicate that checks a string starts with `prefix`.
///
/// ```rust
/// use rulechain::predicate::*;
///
/// assert!(starts_with("+").check("+48535325"));
/// assert!(!starts_with("+").check("0048535325"));
/// ```
pub fn starts_with<S: AsRef<str> + Send + Sync>(prefix: S) -> StartsWith<S> {
    StartsWith(prefix)
}

/// Predicate that checks every character satisfies a condition.
///
/// Vacuously true for the empty string; pair with [`not_empty`] or
/// [`len_between`] when that matters.
#[derive(Clone, Copy, Debug)]
pub struct AllChars<F>(pub F);

impl<F: Fn(char) -> bool + Send + Sync> Predicate<str> for AllChars<F> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().all(&self.0)
    }
}

/// Create a predicate that checks every character satisfies `f`.
///
/// ```rust
/// use rulechain::predicate::*;
///
/// assert!(all_chars(|c: char| c.is_ascii_digit()).check("48535325"));
/// assert!(!all_chars(|c: char| c.is_ascii_digit()).check("4853 5325"));
/// ```
pub fn all_chars<F: Fn(char) -> bool + Send + Sync>(f: F) -> AllChars<F> {
    AllChars(f)
}

/// Predicate that checks at least one character satisfies a condition.
#[derive(Clone, Copy, Debug)]
pub struct AnyChar<F>(pub F);

impl<F: Fn(char) -> bool + Send + Sync> Predicate<str> for AnyChar<F> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().any(&self.0)
    }
}

/// Create a predicate that checks at least one character satisfies `f`.
///
/// ```rust
/// use rulechain::predicate::*;
///
/// assert!(any_char(char::is_whitespace).check("al ice@gmail.com"));
/// assert!(!any_char(char::is_whitespace).check("alice@gmail.com"));
/// ```
pub fn any_char<F: Fn(char) -> bool + Send + Sync>(f: F) -> AnyChar<F> {
    AnyChar(f)
}
