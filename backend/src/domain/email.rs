//! Contact email address.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Returned when a string is not a syntactically valid address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEmailAddress;

impl fmt::Display for InvalidEmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "email must be a valid email address")
    }
}

impl std::error::Error for InvalidEmailAddress {}

fn email_regex() -> &'static Regex {
    // One `@`, a non-empty local part, and a dotted domain without spaces.
    // The pattern is a literal, so compilation cannot fail at runtime.
    #[expect(clippy::expect_used, reason = "constant pattern")]
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("valid regex")
    });
    &RE
}

/// Email address supplied on the contact form.
///
/// Only the shape is checked; deliverability is not.
///
/// # Examples
/// ```
/// use cruzo_backend::domain::EmailAddress;
///
/// assert!(EmailAddress::new("hello@cruzo.care").is_ok());
/// assert!(EmailAddress::new("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an address. Surrounding whitespace is trimmed.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidEmailAddress> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if !email_regex().is_match(trimmed) {
            return Err(InvalidEmailAddress);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = InvalidEmailAddress;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
