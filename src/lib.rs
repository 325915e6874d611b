//! # rulechain
//!
//! Fail-fast validation combinators.
//!
//! Small [`Rule`]s each answer one question about a value. `and` folds them
//! into one rule that stops at the first failure and reports *which* rule
//! failed and *why*, instead of collapsing everything to a single `bool`.
//!
//! ## Quick Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rulechain::prelude::*;
//!
//! let today = FixedClock::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
//! let alice = Customer::new(
//!     "Alice",
//!     "alice@gmail.com",
//!     "+48535325",
//!     NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
//! )
//! .unwrap();
//!
//! let result = is_email_valid()
//!     .and(is_phone_number_valid())
//!     .and(is_adult_with(AgePolicy::default(), today))
//!     .apply(&alice);
//!
//! assert_eq!(result, ValidationResult::Success);
//! ```
//!
//! ## Features
//!
//! - `tracing`: log short-circuits and, via [`RuleExt::traced`], every verdict
//! - `serde`: (de)serialize customers, verdicts and [`RuleConfig`]
//! - `proptest`: `Arbitrary` for [`ValidationResult`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod clock;
pub mod config;
pub mod customer;
pub mod error;
pub mod imperative;
pub mod predicate;
pub mod result;
pub mod rule;
pub mod semigroup;
pub mod testing;
pub mod validation;

// Re-exports
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{AgeBoundary, AgePolicy, EmailFormat, PhoneFormat, RuleConfig};
pub use customer::Customer;
pub use error::{ConfigError, CustomerError};
pub use imperative::CustomerValidatorService;
pub use result::{ValidationResult, VerdictKind};
pub use rule::{
    all_of, is_adult, is_adult_with, is_email_valid, is_email_valid_with, is_phone_number_valid,
    is_phone_number_valid_with, registration_rule, AdultRule, AllOf, And, BoxedRule, Chain,
    EmailRule, PhoneNumberRule, RegistrationRule, Rule, RuleExt,
};
#[cfg(feature = "tracing")]
pub use rule::Traced;
pub use semigroup::Semigroup;
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::config::{AgeBoundary, AgePolicy, EmailFormat, PhoneFormat, RuleConfig};
    pub use crate::customer::Customer;
    pub use crate::result::{ValidationResult, VerdictKind};
    pub use crate::rule::{
        is_adult, is_adult_with, is_email_valid, is_email_valid_with, is_phone_number_valid,
        is_phone_number_valid_with, registration_rule, Chain, Rule, RuleExt,
    };
}
