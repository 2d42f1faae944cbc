//! Contact-form inquiries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{EmailAddress, Field, FormFields, RecordId, ValidationError};

/// Validated contact-form submission, not yet stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInquiry {
    pub name: String,
    pub phone: String,
    pub email: Option<EmailAddress>,
    pub service_type: String,
    pub location: String,
    pub message: Option<String>,
    pub preferred_date: Option<String>,
}

impl NewInquiry {
    /// Check a submitted JSON body against the inquiry shape.
    ///
    /// Required: `name`, `phone`, `serviceType`, `location`. Optional:
    /// `email`, `message`, `preferredDate`; absent, `null` and blank values all
    /// become `None`.
    ///
    /// # Examples
    /// ```
    /// use cruzo_backend::domain::NewInquiry;
    /// use serde_json::json;
    ///
    /// let inquiry = NewInquiry::from_json(&json!({
    ///     "name": "Rajesh Kumar",
    ///     "phone": "+91 98400 00000",
    ///     "serviceType": "premium",
    ///     "location": "Sholinganallur",
    /// }))
    /// .expect("valid inquiry");
    /// assert!(inquiry.email.is_none());
    /// ```
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let fields = FormFields::from_value(body)?;
        let email = fields
            .optional_text(Field::Email)?
            .map(|raw| {
                EmailAddress::new(raw).map_err(|_| ValidationError::InvalidEmail {
                    field: Field::Email,
                })
            })
            .transpose()?;

        Ok(Self {
            name: fields.required_text(Field::Name)?,
            phone: fields.required_text(Field::Phone)?,
            email,
            service_type: fields.required_text(Field::ServiceType)?,
            location: fields.required_text(Field::Location)?,
            message: fields.optional_text(Field::Message)?,
            preferred_date: fields.optional_text(Field::PreferredDate)?,
        })
    }
}

/// Stored inquiry.
///
/// ## Invariants
/// - `id` and `created_at` are assigned by the store, never by clients.
/// - Records are immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    id: RecordId,
    name: String,
    phone: String,
    email: Option<EmailAddress>,
    service_type: String,
    location: String,
    message: Option<String>,
    preferred_date: Option<String>,
    created_at: DateTime<Utc>,
}

impl Inquiry {
    /// Materialise a stored record from a validated submission.
    #[must_use]
    pub fn new(id: RecordId, draft: NewInquiry, created_at: DateTime<Utc>) -> Self {
        let NewInquiry {
            name,
            phone,
            email,
            service_type,
            location,
            message,
            preferred_date,
        } = draft;
        Self {
            id,
            name,
            phone,
            email,
            service_type,
            location,
            message,
            preferred_date,
            created_at,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn preferred_date(&self) -> Option<&str> {
        self.preferred_date.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
