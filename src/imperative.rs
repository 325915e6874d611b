//! The "check everything" baseline
//!
//! [`CustomerValidatorService`] validates a customer the imperative way:
//! every check runs, and the caller gets either a single flag or the full
//! list of failures. It shares the format definitions with the rules but
//! not the fail-fast combinator.
//!
//! | | [`RuleExt::and`](crate::RuleExt::and) | [`CustomerValidatorService`] |
//! |---|---|---|
//! | stops at first failure | yes | no |
//! | reports which check failed | yes, the first | `audit` lists all, `is_all_customer_valid` none |

use crate::{
    is_adult_with, is_email_valid_with, is_phone_number_valid_with, predicate::Predicate, Clock,
    Customer, Rule, RuleConfig, SystemClock, Validation, ValidationResult,
};

/// Validates customers by running every check.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use rulechain::{Customer, CustomerValidatorService, FixedClock, RuleConfig, Validation, VerdictKind};
///
/// let service = CustomerValidatorService::new(
///     RuleConfig::default(),
///     FixedClock::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
/// );
///
/// let kid = Customer::new("Kid", "kid", "123", NaiveDate::from_ymd_opt(2015, 1, 1).unwrap()).unwrap();
/// assert!(!service.is_all_customer_valid(&kid));
///
/// let Validation::Failure(failures) = service.audit(&kid) else { panic!("expected failures") };
/// let kinds: Vec<_> = failures.iter().map(|f| f.kind()).collect();
/// assert_eq!(
///     kinds,
///     [VerdictKind::InvalidEmail, VerdictKind::InvalidPhoneNumber, VerdictKind::Underage]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CustomerValidatorService<C = SystemClock> {
    config: RuleConfig,
    clock: C,
}

impl CustomerValidatorService<SystemClock> {
    /// Service with default settings and the system clock.
    pub fn with_defaults() -> Self {
        Self::new(RuleConfig::default(), SystemClock)
    }
}

impl Default for CustomerValidatorService<SystemClock> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<C: Clock> CustomerValidatorService<C> {
    /// Service using `config` and measuring ages with `clock`.
    pub fn new(config: RuleConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Settings in use.
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// `true` only if every check passes. Says nothing about which one failed.
    pub fn is_all_customer_valid(&self, customer: &Customer) -> bool {
        let email_ok = self.config.email.check(customer.email());
        let phone_ok = self.config.phone.check(customer.phone_number());
        let adult = self.is_adult(customer);
        email_ok && phone_ok && adult
    }

    /// Run every rule and accumulate all failures, in email, phone, age order.
    pub fn audit(&self, customer: &Customer) -> Validation<(), Vec<ValidationResult>> {
        let today = || self.clock.today();
        let verdicts = [
            is_email_valid_with(self.config.email).apply(customer),
            is_phone_number_valid_with(self.config.phone.clone()).apply(customer),
            is_adult_with(self.config.age, today).apply(customer),
        ];

        Validation::all(verdicts.into_iter().map(ValidationResult::into_validation))
            .map(|_| ())
    }

    fn is_adult(&self, customer: &Customer) -> bool {
        self.clock
            .today()
            .years_since(customer.birth_date())
            .is_some_and(|age| self.config.age.admits(age))
    }
}
