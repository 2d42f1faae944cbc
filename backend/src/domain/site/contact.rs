//! Business contact details and the outbound chat link.
//!
//! Bookings are confirmed over WhatsApp. The page only links out; nothing in
//! this system observes that conversation.

use std::fmt;

use url::Url;

use crate::domain::EmailAddress;

const WHATSAPP_BASE: &str = "https://wa.me/";
const MIN_DIGITS: usize = 8;
const MAX_DIGITS: usize = 15;

/// Validation errors for [`PhoneNumber`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneNumberError {
    InvalidCharacters,
    WrongLength { digits: usize },
}

impl fmt::Display for PhoneNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacters => write!(
                f,
                "phone number may only contain digits, spaces, dashes, parentheses and a leading +",
            ),
            Self::WrongLength { digits } => write!(
                f,
                "phone number must have between {MIN_DIGITS} and {MAX_DIGITS} digits, got {digits}",
            ),
        }
    }
}

impl std::error::Error for PhoneNumberError {}

/// International phone number in the form shown to visitors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    display: String,
    digits: String,
}

impl PhoneNumber {
    /// Validate a number such as `+91 84383 47944`.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, PhoneNumberError> {
        let display = raw.as_ref().trim();
        let body = display.strip_prefix('+').unwrap_or(display);
        if !body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
        {
            return Err(PhoneNumberError::InvalidCharacters);
        }
        let digits: String = body.chars().filter(char::is_ascii_digit).collect();
        if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()) {
            return Err(PhoneNumberError::WrongLength {
                digits: digits.len(),
            });
        }
        Ok(Self {
            display: display.to_owned(),
            digits,
        })
    }

    /// Digits only, country code included.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// `tel:` URI for click-to-call.
    #[must_use]
    pub fn tel_uri(&self) -> String {
        format!("tel:+{}", self.digits)
    }

    /// WhatsApp click-to-chat link; `wa.me` expects digits without `+`.
    ///
    /// # Examples
    /// ```
    /// use cruzo_backend::domain::site::PhoneNumber;
    ///
    /// let number = PhoneNumber::new("+91 84383 47944").expect("valid number");
    /// assert_eq!(number.whatsapp_link(None), "https://wa.me/918438347944");
    /// ```
    #[must_use]
    pub fn whatsapp_link(&self, prefill: Option<&str>) -> String {
        let base = format!("{WHATSAPP_BASE}{}", self.digits);
        match (prefill, Url::parse(&base)) {
            (Some(text), Ok(mut url)) => {
                url.query_pairs_mut().append_pair("text", text);
                url.into()
            }
            _ => base,
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// How visitors reach the business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    pub whatsapp: PhoneNumber,
    pub email: EmailAddress,
    pub city: String,
}

impl ContactDetails {
    #[must_use]
    pub fn mailto_uri(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("+918438347944", "918438347944")]
    #[case(" +91 84383 47944 ", "918438347944")]
    #[case("+91 (843) 834-7944", "918438347944")]
    fn digits_are_extracted(#[case] raw: &str, #[case] expected: &str) {
        let number = PhoneNumber::new(raw).expect("valid number");
        assert_eq!(number.digits(), expected);
        assert_eq!(number.tel_uri(), format!("tel:+{expected}"));
    }

    #[rstest]
    #[case("call me", PhoneNumberError::InvalidCharacters)]
    #[case("+91+84383", PhoneNumberError::InvalidCharacters)]
    #[case("12345", PhoneNumberError::WrongLength { digits: 5 })]
    #[case("1234567890123456", PhoneNumberError::WrongLength { digits: 16 })]
    fn malformed_numbers_are_rejected(#[case] raw: &str, #[case] expected: PhoneNumberError) {
        assert_eq!(PhoneNumber::new(raw), Err(expected));
    }

    #[rstest]
    fn whatsapp_link_encodes_prefilled_text() {
        let number = PhoneNumber::new("+918438347944").expect("valid number");
        let link = number.whatsapp_link(Some("Hi Cruzo, SUV wash & shine?"));
        assert_eq!(
            link,
            "https://wa.me/918438347944?text=Hi+Cruzo%2C+SUV+wash+%26+shine%3F"
        );
    }

    #[rstest]
    fn mailto_uses_configured_address() {
        let contact = ContactDetails {
            whatsapp: PhoneNumber::new("+918438347944").expect("valid number"),
            email: EmailAddress::new("hello@cruzo.care").expect("valid email"),
            city: "Chennai, Tamil Nadu".to_owned(),
        };
        assert_eq!(contact.mailto_uri(), "mailto:hello@cruzo.care");
    }
}
