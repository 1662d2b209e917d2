//! Employee entity and email validation
//!
//! Email format: `local@domain`, checked at construction so a bad
//! address never reaches the database.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Maximum length for email addresses (RFC 5321 path limit)
const MAX_EMAIL_LEN: usize = 254;

/// One non-space local part, one `@`, one non-space domain part.
/// Matches the DB's expectations; anything stricter belongs upstream.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("invalid email regex"));

/// Persisted employee row.
///
/// `id` is assigned by the database on insert and never changes or
/// gets reused afterwards.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Employee payload before first persist - no identifier yet.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
}

/// Validated email address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new email address, validating shape.
    ///
    /// # Rules
    /// - Non-empty, max 254 characters
    /// - Exactly one `@` with non-empty parts on both sides
    /// - No whitespace
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }

        if s.len() > MAX_EMAIL_LEN {
            return Err(ValidationError::TooLong {
                field: "email",
                max: MAX_EMAIL_LEN,
            });
        }

        if !EMAIL_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must be of the form local@domain without whitespace",
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_addresses() {
        assert!(Email::new("dubrovskay.7830@mail.ru").is_ok());
        assert!(Email::new("a@b").is_ok());
        assert!(Email::new("first.last+tag@example.com").is_ok());
    }

    #[test]
    fn rejects_empty() {
        let err = Email::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn rejects_missing_at() {
        let err = Email::new("not-an-email").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn rejects_whitespace() {
        let err = Email::new("john doe@example.com").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn rejects_double_at() {
        let err = Email::new("a@@b").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn max_length() {
        let local = "a".repeat(MAX_EMAIL_LEN - 2);
        assert!(Email::new(&format!("{local}@b")).is_ok());

        let local = "a".repeat(MAX_EMAIL_LEN - 1);
        let err = Email::new(&format!("{local}@b")).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 254, .. }));
    }

    #[test]
    fn employee_serializes_camel_case() {
        let emp = Employee {
            id: 1,
            first_name: "Philip".into(),
            last_name: "Dubrovskiy".into(),
            email: "dubrovskay.7830@mail.ru".into(),
        };
        let json = serde_json::to_value(&emp).unwrap();
        assert_eq!(json["firstName"], "Philip");
        assert_eq!(json["lastName"], "Dubrovskiy");
        assert_eq!(json["id"], 1);
    }
}
