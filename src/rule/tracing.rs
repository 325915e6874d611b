//! Tracing support for rules.
//!
//! Feature-gated behind `#[cfg(feature = "tracing")]`. The combinator itself
//! emits a `trace` event when it short-circuits; wrap individual rules with
//! [`RuleExt::traced`](super::RuleExt::traced) to also log each verdict.

use super::Rule;
use crate::ValidationResult;

/// A rule that logs its verdict under a name.
///
/// Created by [`RuleExt::traced`](super::RuleExt::traced).
#[derive(Debug, Clone, Copy)]
pub struct Traced<R> {
    inner: R,
    name: &'static str,
}

impl<R> Traced<R> {
    pub(crate) fn new(inner: R, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// Name attached to the emitted events.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: ?Sized, R: Rule<T>> Rule<T> for Traced<R> {
    fn apply(&self, subject: &T) -> ValidationResult {
        let verdict = self.inner.apply(subject);
        match verdict.reason() {
            None => ::tracing::debug!(rule = self.name, "rule passed"),
            Some(reason) => ::tracing::debug!(
                rule = self.name,
                verdict = %verdict.kind(),
                reason,
                "rule failed"
            ),
        }
        verdict
    }
}
