//! Shape checks for submitted form payloads.
//!
//! Submissions arrive as arbitrary JSON. [`FormFields`] reads one object and
//! reports the first field that is missing or holds the wrong primitive type.
//! Entity constructors such as [`crate::domain::NewInquiry::from_json`] build on
//! it.

use std::fmt;

use serde_json::{Map, Value};

/// Form fields understood by the submission endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    ServiceType,
    Location,
    Message,
    PreferredDate,
    Username,
    Password,
}

impl Field {
    /// Wire name of the field, as clients send it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::ServiceType => "serviceType",
            Self::Location => "location",
            Self::Message => "message",
            Self::PreferredDate => "preferredDate",
            Self::Username => "username",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a submission fails its shape check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The body is valid JSON but not an object.
    NotAnObject,
    /// A required field is absent or `null`.
    MissingField { field: Field },
    /// A field holds a number, boolean, array or object instead of a string.
    InvalidType { field: Field },
    /// The email field is present but not a valid address.
    InvalidEmail { field: Field },
    /// A field that must carry text is blank.
    BlankField { field: Field },
}

impl ValidationError {
    /// Field the failure refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::NotAnObject => None,
            Self::MissingField { field }
            | Self::InvalidType { field }
            | Self::InvalidEmail { field }
            | Self::BlankField { field } => Some(*field),
        }
    }

    /// Stable machine-readable reason.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotAnObject => "not_an_object",
            Self::MissingField { .. } => "missing_field",
            Self::InvalidType { .. } => "invalid_type",
            Self::InvalidEmail { .. } => "invalid_email",
            Self::BlankField { .. } => "blank_field",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "request body must be a JSON object"),
            Self::MissingField { field } => write!(f, "missing required field: {field}"),
            Self::InvalidType { field } => write!(f, "{field} must be a string"),
            Self::InvalidEmail { field } => write!(f, "{field} must be a valid email address"),
            Self::BlankField { field } => write!(f, "{field} must not be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Borrowed view over a submitted JSON object.
///
/// Unknown keys are ignored, so a client cannot smuggle server-owned values
/// such as `id`, `status` or `createdAt` into a record.
///
/// # Examples
/// ```
/// use cruzo_backend::domain::{Field, FormFields};
/// use serde_json::json;
///
/// let body = json!({ "name": "Priya", "message": null });
/// let fields = FormFields::from_value(&body).expect("object body");
/// assert_eq!(fields.required_text(Field::Name).as_deref(), Ok("Priya"));
/// assert_eq!(fields.optional_text(Field::Message), Ok(None));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FormFields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> FormFields<'a> {
    /// Wrap a JSON value, rejecting anything but an object.
    pub fn from_value(value: &'a Value) -> Result<Self, ValidationError> {
        value
            .as_object()
            .map(|map| Self { map })
            .ok_or(ValidationError::NotAnObject)
    }

    /// Read a field that must be present and hold a string.
    pub fn required_text(&self, field: Field) -> Result<String, ValidationError> {
        match self.map.get(field.as_str()) {
            None | Some(Value::Null) => Err(ValidationError::MissingField { field }),
            Some(Value::String(text)) => Ok(text.clone()),
            Some(_) => Err(ValidationError::InvalidType { field }),
        }
    }

    /// Read a field that may be absent, `null` or blank.
    ///
    /// All three collapse to `None`; any other non-string value is rejected.
    pub fn optional_text(&self, field: Field) -> Result<Option<String>, ValidationError> {
        match self.map.get(field.as_str()) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(_) => Err(ValidationError::InvalidType { field }),
        }
    }
}
