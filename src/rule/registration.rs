//! Customer registration rules
//!
//! Each factory returns a concrete rule over [`Customer`]. The no-argument
//! factories use the default formats and the system clock; the `_with`
//! variants take explicit settings.

use super::{And, Rule, RuleExt};
use crate::{
    AgeBoundary, AgePolicy, Clock, Customer, EmailFormat, PhoneFormat, RuleConfig, SystemClock,
    ValidationResult,
};

/// Checks the customer's email against an [`EmailFormat`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailRule {
    format: EmailFormat,
}

impl Rule<Customer> for EmailRule {
    fn apply(&self, customer: &Customer) -> ValidationResult {
        match self.format.diagnose(customer.email()) {
            None => ValidationResult::Success,
            Some(reason) => ValidationResult::InvalidEmail(reason),
        }
    }
}

/// Rule that passes when the email has the default `local@domain` shape.
///
/// ```rust
/// use chrono::NaiveDate;
/// use rulechain::{is_email_valid, Customer, Rule, VerdictKind};
///
/// let birth = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// let bob = Customer::new("Bob", "bob.example.com", "+48535325", birth).unwrap();
/// assert_eq!(is_email_valid().apply(&bob).kind(), VerdictKind::InvalidEmail);
/// ```
pub fn is_email_valid() -> EmailRule {
    EmailRule::default()
}

/// Rule that checks the email against `format`.
pub fn is_email_valid_with(format: EmailFormat) -> EmailRule {
    EmailRule { format }
}

/// Checks the customer's phone number against a [`PhoneFormat`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneNumberRule {
    format: PhoneFormat,
}

impl Rule<Customer> for PhoneNumberRule {
    fn apply(&self, customer: &Customer) -> ValidationResult {
        match self.format.diagnose(customer.phone_number()) {
            None => ValidationResult::Success,
            Some(reason) => ValidationResult::InvalidPhoneNumber(reason),
        }
    }
}

/// Rule that passes when the phone number is `+` followed by 7 to 15 digits.
pub fn is_phone_number_valid() -> PhoneNumberRule {
    PhoneNumberRule::default()
}

/// Rule that checks the phone number against `format`.
pub fn is_phone_number_valid_with(format: PhoneFormat) -> PhoneNumberRule {
    PhoneNumberRule { format }
}

/// Checks the customer's age, in whole years as of the clock's today,
/// against an [`AgePolicy`].
///
/// A birth date after today is reported as `Underage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdultRule<C> {
    policy: AgePolicy,
    clock: C,
}

impl<C: Clock> Rule<Customer> for AdultRule<C> {
    fn apply(&self, customer: &Customer) -> ValidationResult {
        let born = customer.birth_date();
        let today = self.clock.today();

        let Some(age) = today.years_since(born) else {
            return ValidationResult::Underage(format!(
                "birth date {} is after {}",
                born, today
            ));
        };

        if self.policy.admits(age) {
            return ValidationResult::Success;
        }

        let requirement = match self.policy.boundary() {
            AgeBoundary::Inclusive => "at least",
            AgeBoundary::Exclusive => "older than",
        };
        ValidationResult::Underage(format!(
            "{} years old, must be {} {}",
            age,
            requirement,
            self.policy.min_age()
        ))
    }
}

/// Rule that passes for customers at least 18 years old today.
///
/// Reads the system clock on every evaluation. Use [`is_adult_with`] and a
/// [`FixedClock`](crate::FixedClock) for deterministic results.
pub fn is_adult() -> AdultRule<SystemClock> {
    is_adult_with(AgePolicy::default(), SystemClock)
}

/// Rule that checks age against `policy`, measuring "today" with `clock`.
///
/// ```rust
/// use chrono::NaiveDate;
/// use rulechain::{is_adult_with, AgePolicy, Customer, FixedClock, Rule, ValidationResult};
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let rule = is_adult_with(AgePolicy::default(), FixedClock::new(today));
///
/// let teen = Customer::new("Tom", "tom@x.io", "+48535325", NaiveDate::from_ymd_opt(2008, 1, 1).unwrap()).unwrap();
/// assert_eq!(rule.apply(&teen), ValidationResult::underage("16 years old, must be at least 18"));
/// ```
pub fn is_adult_with<C: Clock>(policy: AgePolicy, clock: C) -> AdultRule<C> {
    AdultRule { policy, clock }
}

/// The canonical registration chain: email, then phone number, then age.
pub type RegistrationRule<C> = And<And<EmailRule, PhoneNumberRule>, AdultRule<C>>;

/// Build the canonical registration chain from `config`.
///
/// ```rust
/// use chrono::NaiveDate;
/// use rulechain::{registration_rule, Customer, FixedClock, Rule, RuleConfig, ValidationResult};
///
/// let rule = registration_rule(
///     &RuleConfig::default(),
///     FixedClock::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
/// );
///
/// let alice = Customer::new(
///     "Alice",
///     "alice@gmail.com",
///     "+48535325",
///     NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(rule.apply(&alice), ValidationResult::Success);
/// ```
pub fn registration_rule<C: Clock>(config: &RuleConfig, clock: C) -> RegistrationRule<C> {
    is_email_valid_with(config.email)
        .and(is_phone_number_valid_with(config.phone.clone()))
        .and(is_adult_with(config.age, clock))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn alice() -> Customer {
        Customer::new("Alice", "alice@gmail.com", "+48535325", date(2000, 1, 1)).unwrap()
    }

    fn adult_on(today: NaiveDate) -> AdultRule<FixedClock> {
        is_adult_with(AgePolicy::default(), FixedClock::new(today))
    }

    #[test]
    fn email_rule_reports_reason() {
        assert_eq!(is_email_valid().apply(&alice()), ValidationResult::Success);
        assert_eq!(
            is_email_valid().apply(&alice().with_email("alice")),
            ValidationResult::invalid_email("`alice` is missing '@'")
        );
    }

    #[test]
    fn email_rule_with_strict_format() {
        let rule = is_email_valid_with(EmailFormat::default().require_domain_dot(true));
        assert!(rule.apply(&alice()).is_success());
        assert!(rule.apply(&alice().with_email("alice@localhost")).is_failure());
    }

    #[test]
    fn phone_rule_reports_reason() {
        assert_eq!(is_phone_number_valid().apply(&alice()), ValidationResult::Success);
        assert_eq!(
            is_phone_number_valid().apply(&alice().with_phone_number("535325")),
            ValidationResult::invalid_phone_number("`535325` must start with '+'")
        );
        assert!(is_phone_number_valid()
            .apply(&alice().with_phone_number("+48abc"))
            .is_failure());
    }

    #[test]
    fn exactly_min_age_passes_inclusive() {
        let customer = alice().with_birth_date(date(2006, 6, 1));
        assert_eq!(adult_on(date(2024, 6, 1)).apply(&customer), ValidationResult::Success);
    }

    #[test]
    fn one_day_short_of_min_age_fails() {
        let customer = alice().with_birth_date(date(2006, 6, 2));
        assert_eq!(
            adult_on(date(2024, 6, 1)).apply(&customer),
            ValidationResult::underage("17 years old, must be at least 18")
        );
    }

    #[test]
    fn exactly_min_age_fails_exclusive() {
        let customer = alice().with_birth_date(date(2006, 6, 1));
        let policy = AgePolicy::default().with_boundary(AgeBoundary::Exclusive);
        let rule = is_adult_with(policy, FixedClock::new(date(2024, 6, 1)));
        assert_eq!(
            rule.apply(&customer),
            ValidationResult::underage("18 years old, must be older than 18")
        );
        assert_eq!(
            rule.apply(&customer.with_birth_date(date(2006, 5, 31))),
            ValidationResult::underage("18 years old, must be older than 18")
        );
        assert!(rule.apply(&customer.with_birth_date(date(2005, 6, 1))).is_success());
    }

    #[test]
    fn leap_day_birthday_counts_from_march_first() {
        let customer = alice().with_birth_date(date(2004, 2, 29));
        assert!(adult_on(date(2022, 2, 28)).apply(&customer).is_failure());
        assert!(adult_on(date(2022, 3, 1)).apply(&customer).is_success());
    }

    #[test]
    fn future_birth_date_is_underage() {
        let customer = alice().with_birth_date(date(2030, 1, 1));
        assert_eq!(
            adult_on(date(2024, 6, 1)).apply(&customer),
            ValidationResult::underage("birth date 2030-01-01 is after 2024-06-01")
        );
    }

    #[test]
    fn closure_clock_is_accepted() {
        let rule = is_adult_with(AgePolicy::default().with_min_age(21), || date(2024, 6, 1));
        assert!(rule.apply(&alice()).is_success());
        assert!(rule.apply(&alice().with_birth_date(date(2004, 1, 1))).is_failure());
    }

    #[test]
    fn registration_rule_follows_config() {
        let config = RuleConfig::default().with_age(AgePolicy::default().with_min_age(30));
        let rule = registration_rule(&config, FixedClock::new(date(2024, 6, 1)));
        assert_eq!(
            rule.apply(&alice()),
            ValidationResult::underage("24 years old, must be at least 30")
        );
    }

    #[test]
    fn default_is_adult_uses_system_clock() {
        let old = alice().with_birth_date(date(1950, 1, 1));
        assert!(is_adult().apply(&old).is_success());
    }
}
