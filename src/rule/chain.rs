//! Left-to-right rule chains assembled at runtime.

use super::{BoxedRule, Rule, RuleExt};
use crate::ValidationResult;

/// An ordered list of rules evaluated with the same fail-fast semantics as
/// [`RuleExt::and`].
///
/// Use this when the set of rules is only known at runtime. An empty chain
/// passes everything.
///
/// # Example
///
/// ```rust
/// use rulechain::{Chain, Rule, ValidationResult};
///
/// let chain = Chain::<i32>::new()
///     .then(|n: &i32| if *n > 0 { ValidationResult::SUCCESS } else { ValidationResult::underage("not positive") })
///     .then(|n: &i32| if *n < 100 { ValidationResult::SUCCESS } else { ValidationResult::underage("too big") });
///
/// assert_eq!(chain.len(), 2);
/// assert!(chain.apply(&50).is_success());
/// assert_eq!(chain.apply(&0), ValidationResult::underage("not positive"));
/// ```
#[derive(Debug)]
pub struct Chain<T: ?Sized> {
    rules: Vec<BoxedRule<T>>,
}

impl<T: ?Sized> Chain<T> {
    /// An empty chain.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append `rule` to the end of the chain.
    pub fn then<R: Rule<T> + 'static>(mut self, rule: R) -> Self {
        self.push(rule);
        self
    }

    /// Append `rule` in place.
    pub fn push<R: Rule<T> + 'static>(&mut self, rule: R) {
        self.rules.push(rule.boxed());
    }

    /// Number of rules in the chain.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the chain has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T: ?Sized> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> FromIterator<BoxedRule<T>> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = BoxedRule<T>>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<T: ?Sized> Extend<BoxedRule<T>> for Chain<T> {
    fn extend<I: IntoIterator<Item = BoxedRule<T>>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl<T: ?Sized> Rule<T> for Chain<T> {
    fn apply(&self, subject: &T) -> ValidationResult {
        first_failure(self.rules.iter(), subject)
    }
}

/// Fail-fast conjunction of a fixed-size array of rules of one type.
///
/// For rules of different types use `.and()` chaining or a [`Chain`].
///
/// ```rust
/// use rulechain::{all_of, Rule, ValidationResult};
///
/// fn at_least(min: i32) -> impl Fn(&i32) -> ValidationResult + Send + Sync {
///     move |n| if *n >= min { ValidationResult::SUCCESS } else { ValidationResult::underage(format!("below {}", min)) }
/// }
///
/// let rule = all_of([at_least(0), at_least(10)]);
/// assert_eq!(rule.apply(&5), ValidationResult::underage("below 10"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct AllOf<R, const N: usize>(pub [R; N]);

impl<T: ?Sized, R: Rule<T>, const N: usize> Rule<T> for AllOf<R, N> {
    #[inline]
    fn apply(&self, subject: &T) -> ValidationResult {
        first_failure(self.0.iter(), subject)
    }
}

/// Create an [`AllOf`] from an array of rules.
pub fn all_of<R, const N: usize>(rules: [R; N]) -> AllOf<R, N> {
    AllOf(rules)
}

fn first_failure<'a, T, R, I>(rules: I, subject: &T) -> ValidationResult
where
    T: ?Sized,
    R: Rule<T> + 'a,
    I: IntoIterator<Item = &'a R>,
{
    rules
        .into_iter()
        .map(|rule| rule.apply(subject))
        .find(ValidationResult::is_failure)
        .unwrap_or(ValidationResult::Success)
}
