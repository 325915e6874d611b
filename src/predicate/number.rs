//! Threshold predicates for ordered values.

use super::combinators::Predicate;

/// Predicate for greater than.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Gt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value > self.0
    }
}

/// Create a predicate that checks a value is strictly above `threshold`.
///
/// ```rust
/// use rulechain::predicate::*;
///
/// assert!(gt(18u32).check(&19));
/// assert!(!gt(18u32).check(&18));
/// ```
pub fn gt<T: PartialOrd + Send + Sync>(threshold: T) -> Gt<T> {
    Gt(threshold)
}

/// Predicate for greater than or equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ge<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Ge<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.0
    }
}

/// Create a predicate that checks a value is at least `threshold`.
///
/// ```rust
/// use rulechain::predicate::*;
///
/// assert!(ge(18u32).check(&18));
/// assert!(!ge(18u32).check(&17));
/// ```
pub fn ge<T: PartialOrd + Send + Sync>(threshold: T) -> Ge<T> {
    Ge(threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ge_and_gt_differ_only_at_threshold() {
        for n in [0u32, 17, 19, 120] {
            assert_eq!(ge(18).check(&n), gt(18).check(&n));
        }
        assert!(ge(18u32).check(&18));
        assert!(!gt(18u32).check(&18));
    }
}
