//! The customer record validated by the registration rules.

use chrono::NaiveDate;

use crate::CustomerError;

/// An immutable customer record.
///
/// Fields are private and only readable through accessors, so a `Customer`
/// never changes after construction. Equality is by value.
///
/// Only `name` is checked at construction. Email, phone number and birth
/// date are free-form here; judging them is the job of the rules.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use rulechain::Customer;
///
/// let alice = Customer::new(
///     "Alice",
///     "alice@gmail.com",
///     "+48535325",
///     NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(alice.name(), "Alice");
/// assert_eq!(alice.phone_number(), "+48535325");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCustomer"))]
pub struct Customer {
    name: String,
    email: String,
    phone_number: String,
    birth_date: NaiveDate,
}

impl Customer {
    /// Build a customer.
    ///
    /// Returns [`CustomerError::MissingField`] when `name` is blank.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Result<Self, CustomerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CustomerError::MissingField { field: "name" });
        }

        Ok(Self {
            name,
            email: email.into(),
            phone_number: phone_number.into(),
            birth_date,
        })
    }

    /// Customer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address, unvalidated.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Phone number, unvalidated.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Date of birth.
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Copy of this customer with a different email.
    pub fn with_email(&self, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..self.clone()
        }
    }

    /// Copy of this customer with a different phone number.
    pub fn with_phone_number(&self, phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            ..self.clone()
        }
    }

    /// Copy of this customer with a different birth date.
    pub fn with_birth_date(&self, birth_date: NaiveDate) -> Self {
        Self {
            birth_date,
            ..self.clone()
        }
    }
}

// Deserialization goes through `Customer::new` so the name check still applies.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCustomer {
    name: String,
    email: String,
    phone_number: String,
    birth_date: NaiveDate,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCustomer> for Customer {
    type Error = CustomerError;

    fn try_from(raw: RawCustomer) -> Result<Self, Self::Error> {
        Customer::new(raw.name, raw.email, raw.phone_number, raw.birth_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_keeps_fields() {
        let c = Customer::new("Alice", "alice@gmail.com", "+48535325", date(2000, 1, 1)).unwrap();
        assert_eq!(c.name(), "Alice");
        assert_eq!(c.email(), "alice@gmail.com");
        assert_eq!(c.phone_number(), "+48535325");
        assert_eq!(c.birth_date(), date(2000, 1, 1));
    }

    #[test]
    fn blank_name_is_a_precondition_error() {
        assert_eq!(
            Customer::new("", "a@b", "+1234567", date(2000, 1, 1)),
            Err(CustomerError::MissingField { field: "name" })
        );
        assert!(Customer::new(" \t", "a@b", "+1234567", date(2000, 1, 1)).is_err());
    }

    #[test]
    fn empty_email_is_not_a_precondition_error() {
        assert!(Customer::new("Bob", "", "", date(2000, 1, 1)).is_ok());
    }

    #[test]
    fn with_setters_leave_original_untouched() {
        let c = Customer::new("Alice", "alice@gmail.com", "+48535325", date(2000, 1, 1)).unwrap();
        let changed = c.with_email("alice");
        assert_eq!(c.email(), "alice@gmail.com");
        assert_eq!(changed.email(), "alice");
        assert_ne!(c, changed);
        assert_eq!(c.with_phone_number("+1").phone_number(), "+1");
        assert_eq!(c.with_birth_date(date(2010, 5, 5)).birth_date(), date(2010, 5, 5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let c = Customer::new("Alice", "alice@gmail.com", "+48535325", date(2000, 1, 1)).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"birth_date\":\"2000-01-01\""));
        let back: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_blank_name() {
        let json = r#"{"name":"","email":"a@b","phone_number":"+1234567","birth_date":"2000-01-01"}"#;
        let result: Result<Customer, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
