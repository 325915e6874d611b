//! Testing utilities for rules
//!
//! Assertion macros for verdicts and an instrumented [`CountingRule`] for
//! checking which rules a chain actually ran.
//!
//! # Examples
//!
//! ```rust
//! use rulechain::testing::CountingRule;
//! use rulechain::{assert_failure, assert_success, Rule, RuleExt, ValidationResult};
//!
//! let reject = |_: &u8| ValidationResult::invalid_email("nope");
//! let tail = CountingRule::new(|_: &u8| ValidationResult::SUCCESS);
//! let calls = tail.counter();
//!
//! assert_failure!(reject.and(tail).apply(&0));
//! assert_eq!(calls.get(), 0);
//! assert_success!(ValidationResult::SUCCESS);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::{Rule, ValidationResult};

/// Assert that a verdict is `Success`.
///
/// ```rust
/// use rulechain::{assert_success, ValidationResult};
///
/// assert_success!(ValidationResult::SUCCESS);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($verdict:expr) => {
        match $verdict {
            $crate::ValidationResult::Success => {}
            failure => {
                panic!("Expected Success, got {:?}", failure);
            }
        }
    };
}

/// Assert that a verdict is a failure.
///
/// ```rust
/// use rulechain::{assert_failure, ValidationResult};
///
/// assert_failure!(ValidationResult::underage("17 years old"));
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($verdict:expr) => {
        if let $crate::ValidationResult::Success = $verdict {
            panic!("Expected a failure, got Success");
        }
    };
}

/// Assert that a verdict has a given [`VerdictKind`](crate::VerdictKind),
/// ignoring the reason.
///
/// ```rust
/// use rulechain::{assert_verdict, ValidationResult, VerdictKind};
///
/// assert_verdict!(ValidationResult::invalid_email("x"), VerdictKind::InvalidEmail);
/// ```
#[macro_export]
macro_rules! assert_verdict {
    ($verdict:expr, $kind:expr) => {{
        let verdict: $crate::ValidationResult = $verdict;
        let kind: $crate::VerdictKind = $kind;
        if verdict.kind() != kind {
            panic!("Expected {}, got {:?}", kind, verdict);
        }
    }};
}

/// Wraps a rule and counts how often it is evaluated.
///
/// The count is shared with every [`CallCounter`] handed out by
/// [`counter`](CountingRule::counter), so it can be read after the rule has
/// been moved into a composite.
#[derive(Debug, Clone)]
pub struct CountingRule<R> {
    inner: R,
    calls: Arc<AtomicUsize>,
}

impl<R> CountingRule<R> {
    /// Wrap `inner`.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A handle to this rule's call count.
    pub fn counter(&self) -> CallCounter {
        CallCounter(Arc::clone(&self.calls))
    }
}

impl<T: ?Sized, R: Rule<T>> Rule<T> for CountingRule<R> {
    fn apply(&self, subject: &T) -> ValidationResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.apply(subject)
    }
}

/// Read-only view of a [`CountingRule`]'s call count.
#[derive(Debug, Clone)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    /// Number of evaluations so far.
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for ValidationResult {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(ValidationResult::Success),
            ".*".prop_map(ValidationResult::InvalidEmail),
            ".*".prop_map(ValidationResult::InvalidPhoneNumber),
            ".*".prop_map(ValidationResult::Underage),
        ]
        .boxed()
    }
}
