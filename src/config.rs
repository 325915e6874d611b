//! Rule configuration
//!
//! The formats and thresholds the registration rules check against. Configs
//! are pure data: cheap to clone, easy to compare, and (with the `serde`
//! feature) loadable from any serde format.
//!
//! # Defaults
//!
//! | Setting | Default |
//! |---------|---------|
//! | email   | `local@domain`, exactly one `@`, no whitespace, dot in domain not required |
//! | phone   | `+` followed by 7 to 15 ASCII digits |
//! | age     | 18 years, inclusive |
//!
//! # Example
//!
//! ```rust
//! use rulechain::{AgeBoundary, AgePolicy, PhoneFormat, RuleConfig};
//!
//! let config = RuleConfig::default()
//!     .with_age(AgePolicy::default().with_min_age(21).with_boundary(AgeBoundary::Exclusive))
//!     .with_phone(PhoneFormat::new("00", 9, 12).unwrap());
//!
//! assert_eq!(config.age.min_age(), 21);
//! assert_eq!(config.phone.prefix(), "00");
//! ```

use crate::predicate::{
    all_chars, any_char, ge, gt, len_between, not_empty, starts_with, Predicate, PredicateExt,
};
use crate::ConfigError;

/// All settings used by the registration rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RuleConfig {
    /// Email grammar.
    pub email: EmailFormat,
    /// Phone number grammar.
    pub phone: PhoneFormat,
    /// Minimum age policy.
    pub age: AgePolicy,
}

impl RuleConfig {
    /// Replace the email format.
    pub fn with_email(mut self, email: EmailFormat) -> Self {
        self.email = email;
        self
    }

    /// Replace the phone format.
    pub fn with_phone(mut self, phone: PhoneFormat) -> Self {
        self.phone = phone;
        self
    }

    /// Replace the age policy.
    pub fn with_age(mut self, age: AgePolicy) -> Self {
        self.age = age;
        self
    }
}

/// Minimal `local@domain` email grammar.
///
/// Accepts exactly one `@` with a non-empty local part and a non-empty
/// domain, and no whitespace anywhere. With
/// [`require_domain_dot`](EmailFormat::require_domain_dot) the domain must
/// also contain a `.`, and every dot-separated label must be non-empty.
///
/// ```rust
/// use rulechain::EmailFormat;
/// use rulechain::predicate::Predicate;
///
/// let format = EmailFormat::default();
/// assert!(format.check("alice@gmail.com"));
/// assert!(format.check("alice@localhost"));
/// assert!(!format.check("alice"));
///
/// let strict = format.require_domain_dot(true);
/// assert!(!strict.check("alice@localhost"));
/// assert_eq!(strict.diagnose("alice@localhost").as_deref(), Some("domain `localhost` has no '.'"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmailFormat {
    require_domain_dot: bool,
}

impl EmailFormat {
    /// Whether the domain must contain an inner `.`.
    pub fn require_domain_dot(mut self, required: bool) -> Self {
        self.require_domain_dot = required;
        self
    }

    /// Describe the first way `email` breaks this grammar, or `None` if it fits.
    pub fn diagnose(&self, email: &str) -> Option<String> {
        if !not_empty().check(email) {
            return Some("email is empty".to_string());
        }
        if any_char(char::is_whitespace).check(email) {
            return Some(format!("`{}` contains whitespace", email));
        }

        let Some((local, domain)) = email.split_once('@') else {
            return Some(format!("`{}` is missing '@'", email));
        };

        if domain.contains('@') {
            return Some(format!("`{}` has more than one '@'", email));
        }
        if !not_empty().check(local) {
            return Some(format!("`{}` has nothing before '@'", email));
        }
        if !not_empty().check(domain) {
            return Some(format!("`{}` has nothing after '@'", email));
        }
        if self.require_domain_dot {
            if !domain.contains('.') {
                return Some(format!("domain `{}` has no '.'", domain));
            }
            if domain.split('.').any(|label| !not_empty().check(label)) {
                return Some(format!("domain `{}` has an empty label", domain));
            }
        }

        None
    }
}

impl Predicate<str> for EmailFormat {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.diagnose(value).is_none()
    }
}

/// Phone number grammar: a fixed prefix followed only by ASCII digits.
///
/// ```rust
/// use rulechain::PhoneFormat;
/// use rulechain::predicate::Predicate;
///
/// let format = PhoneFormat::default();
/// assert!(format.check("+48535325"));
/// assert!(!format.check("48535325"));
/// assert!(!format.check("+48 535 325"));
/// assert!(!format.check("+123"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPhoneFormat"))]
pub struct PhoneFormat {
    prefix: String,
    min_digits: usize,
    max_digits: usize,
}

impl PhoneFormat {
    /// Default prefix.
    pub const DEFAULT_PREFIX: &'static str = "+";
    /// Default minimum number of digits after the prefix.
    pub const DEFAULT_MIN_DIGITS: usize = 7;
    /// Default maximum number of digits after the prefix (E.164 limit).
    pub const DEFAULT_MAX_DIGITS: usize = 15;

    /// Build a format, rejecting an empty prefix or `min_digits > max_digits`.
    pub fn new(
        prefix: impl Into<String>,
        min_digits: usize,
        max_digits: usize,
    ) -> Result<Self, ConfigError> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(ConfigError::Empty {
                setting: "phone prefix",
            });
        }
        if min_digits > max_digits {
            return Err(ConfigError::InvalidRange {
                setting: "phone digits",
                min: min_digits,
                max: max_digits,
            });
        }
        Ok(Self {
            prefix,
            min_digits,
            max_digits,
        })
    }

    /// Required prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Inclusive bounds on the digit count after the prefix.
    pub fn digit_bounds(&self) -> (usize, usize) {
        (self.min_digits, self.max_digits)
    }

    /// Describe the first way `phone` breaks this grammar, or `None` if it fits.
    pub fn diagnose(&self, phone: &str) -> Option<String> {
        if !starts_with(self.prefix.as_str()).check(phone) {
            return Some(format!("`{}` must start with '{}'", phone, self.prefix));
        }

        let digits = &phone[self.prefix.len()..];
        if !all_chars(|c: char| c.is_ascii_digit()).check(digits) {
            return Some(format!(
                "`{}` must contain only digits after '{}'",
                phone, self.prefix
            ));
        }

        if !len_between(self.min_digits, self.max_digits).check(digits) {
            return Some(format!(
                "`{}` has {} digits, expected {} to {}",
                phone,
                digits.len(),
                self.min_digits,
                self.max_digits
            ));
        }

        None
    }
}

impl Default for PhoneFormat {
    fn default() -> Self {
        Self {
            prefix: Self::DEFAULT_PREFIX.to_string(),
            min_digits: Self::DEFAULT_MIN_DIGITS,
            max_digits: Self::DEFAULT_MAX_DIGITS,
        }
    }
}

impl Predicate<str> for PhoneFormat {
    /// Same answer as `diagnose(value).is_none()` without building a message.
    fn check(&self, value: &str) -> bool {
        let digits = all_chars(|c: char| c.is_ascii_digit())
            .and(len_between(self.min_digits, self.max_digits));
        starts_with(self.prefix.as_str()).check(value)
            && digits.check(&value[self.prefix.len()..])
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPhoneFormat {
    prefix: String,
    min_digits: usize,
    max_digits: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPhoneFormat> for PhoneFormat {
    type Error = ConfigError;

    fn try_from(raw: RawPhoneFormat) -> Result<Self, Self::Error> {
        PhoneFormat::new(raw.prefix, raw.min_digits, raw.max_digits)
    }
}

/// Whether a customer exactly `min_age` years old passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AgeBoundary {
    /// Exactly `min_age` passes.
    #[default]
    Inclusive,
    /// Must be at least `min_age + 1` whole years old.
    Exclusive,
}

/// Minimum age policy.
///
/// Age is the number of whole years elapsed since the birth date. Someone
/// born on 29 February turns a year older on 1 March in non-leap years.
///
/// ```rust
/// use rulechain::{AgeBoundary, AgePolicy};
///
/// let inclusive = AgePolicy::default();
/// assert!(inclusive.admits(18));
/// assert!(!inclusive.admits(17));
///
/// let exclusive = inclusive.with_boundary(AgeBoundary::Exclusive);
/// assert!(!exclusive.admits(18));
/// assert!(exclusive.admits(19));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgePolicy {
    min_age: u32,
    boundary: AgeBoundary,
}

impl AgePolicy {
    /// Default minimum age.
    pub const DEFAULT_MIN_AGE: u32 = 18;

    /// Set the minimum age in whole years.
    pub fn with_min_age(mut self, years: u32) -> Self {
        self.min_age = years;
        self
    }

    /// Set the boundary policy.
    pub fn with_boundary(mut self, boundary: AgeBoundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Minimum age in whole years.
    pub fn min_age(&self) -> u32 {
        self.min_age
    }

    /// Boundary policy.
    pub fn boundary(&self) -> AgeBoundary {
        self.boundary
    }

    /// Whether someone `age` whole years old passes this policy.
    pub fn admits(&self, age: u32) -> bool {
        match self.boundary {
            AgeBoundary::Inclusive => ge(self.min_age).check(&age),
            AgeBoundary::Exclusive => gt(self.min_age).check(&age),
        }
    }
}

impl Default for AgePolicy {
    fn default() -> Self {
        Self {
            min_age: Self::DEFAULT_MIN_AGE,
            boundary: AgeBoundary::Inclusive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_diagnose_reports_first_problem() {
        let f = EmailFormat::default();
        assert_eq!(f.diagnose(""), Some("email is empty".to_string()));
        assert_eq!(f.diagnose("alice"), Some("`alice` is missing '@'".to_string()));
        assert_eq!(
            f.diagnose("a@b@c"),
            Some("`a@b@c` has more than one '@'".to_string())
        );
        assert_eq!(f.diagnose("@gmail.com"), Some("`@gmail.com` has nothing before '@'".to_string()));
        assert_eq!(f.diagnose("alice@"), Some("`alice@` has nothing after '@'".to_string()));
        assert_eq!(f.diagnose("al ice@x.y"), Some("`al ice@x.y` contains whitespace".to_string()));
        assert_eq!(f.diagnose("alice@gmail.com"), None);
    }

    #[test]
    fn email_domain_dot_must_be_inner() {
        let f = EmailFormat::default().require_domain_dot(true);
        assert!(f.check("a@gmail.com"));
        assert!(!f.check("a@gmail."));
        assert!(!f.check("a@.com"));
        assert!(!f.check("a@gmail"));
        assert_eq!(
            f.diagnose("a@b..c"),
            Some("domain `b..c` has an empty label".to_string())
        );
        assert!(f.check("a@mail.example.com"));
    }

    #[test]
    fn phone_zero_digit_minimum_accepts_bare_prefix() {
        let f = PhoneFormat::new("+", 0, 5).unwrap();
        assert_eq!(f.diagnose("+"), None);
        assert_eq!(
            f.diagnose("+1x"),
            Some("`+1x` must contain only digits after '+'".to_string())
        );
        assert_eq!(
            f.diagnose("+123456"),
            Some("`+123456` has 6 digits, expected 0 to 5".to_string())
        );
    }

    #[test]
    fn phone_diagnose_reports_first_problem() {
        let f = PhoneFormat::default();
        assert_eq!(f.diagnose("+48535325"), None);
        assert_eq!(
            f.diagnose("48535325"),
            Some("`48535325` must start with '+'".to_string())
        );
        assert_eq!(
            f.diagnose("+"),
            Some("`+` has 0 digits, expected 7 to 15".to_string())
        );
        assert_eq!(
            f.diagnose("+48-535-325"),
            Some("`+48-535-325` must contain only digits after '+'".to_string())
        );
        assert_eq!(
            f.diagnose("+123456"),
            Some("`+123456` has 6 digits, expected 7 to 15".to_string())
        );
        assert!(f.check("+1234567"));
        assert!(f.check("+123456789012345"));
        assert!(!f.check("+1234567890123456"));
    }

    #[test]
    fn phone_rejects_non_ascii_digits() {
        assert!(!PhoneFormat::default().check("+٤٨٥٣٥٣٢٥"));
    }

    #[test]
    fn phone_new_validates_settings() {
        assert_eq!(
            PhoneFormat::new("+", 10, 5),
            Err(ConfigError::InvalidRange {
                setting: "phone digits",
                min: 10,
                max: 5,
            })
        );
        assert_eq!(
            PhoneFormat::new("", 1, 5),
            Err(ConfigError::Empty {
                setting: "phone prefix"
            })
        );
        let custom = PhoneFormat::new("00", 9, 9).unwrap();
        assert!(custom.check("00485353251"));
        assert!(!custom.check("+485353251"));
        assert_eq!(custom.digit_bounds(), (9, 9));
    }

    #[test]
    fn age_policy_default_is_inclusive_eighteen() {
        let p = AgePolicy::default();
        assert_eq!(p.min_age(), 18);
        assert_eq!(p.boundary(), AgeBoundary::Inclusive);
    }

    #[test]
    fn rule_config_builders_replace_parts() {
        let config = RuleConfig::default()
            .with_email(EmailFormat::default().require_domain_dot(true))
            .with_age(AgePolicy::default().with_min_age(16));
        assert_eq!(config.age.min_age(), 16);
        assert!(!config.email.check("a@b"));
        assert_eq!(config.phone, PhoneFormat::default());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn phone_check_agrees_with_diagnose(phone in "(\\+|00)?[0-9a -]{0,18}") {
                for format in [PhoneFormat::default(), PhoneFormat::new("00", 0, 9).unwrap()] {
                    prop_assert_eq!(format.check(&phone), format.diagnose(&phone).is_none());
                }
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_deserializes_with_defaults() {
        let config: RuleConfig = serde_json::from_str(r#"{"age":{"min_age":21}}"#).unwrap();
        assert_eq!(config.age.min_age(), 21);
        assert_eq!(config.age.boundary(), AgeBoundary::Inclusive);
        assert_eq!(config.phone, PhoneFormat::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_rejects_bad_phone_range() {
        let json = r#"{"phone":{"prefix":"+","min_digits":9,"max_digits":2}}"#;
        assert!(serde_json::from_str::<RuleConfig>(json).is_err());
    }
}
