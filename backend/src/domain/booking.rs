//! Booking requests.
//!
//! A booking records the service and date a customer asked for. Confirmation
//! happens over WhatsApp, outside this system, so the stored status is written
//! once as [`BookingStatus::Pending`] and never changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Field, FormFields, RecordId, ValidationError};

/// Lifecycle marker stored with each booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Awaiting confirmation through the chat channel.
    #[default]
    Pending,
}

/// Validated booking submission, not yet stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub name: String,
    pub phone: String,
    pub service_type: String,
    pub preferred_date: String,
    pub location: String,
}

impl NewBooking {
    /// Check a submitted JSON body against the booking shape.
    ///
    /// All of `name`, `phone`, `serviceType`, `preferredDate` and `location`
    /// are required strings. Any `status` sent by the client is ignored.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let fields = FormFields::from_value(body)?;
        Ok(Self {
            name: fields.required_text(Field::Name)?,
            phone: fields.required_text(Field::Phone)?,
            service_type: fields.required_text(Field::ServiceType)?,
            preferred_date: fields.required_text(Field::PreferredDate)?,
            location: fields.required_text(Field::Location)?,
        })
    }
}

/// Stored booking.
///
/// ## Invariants
/// - `status` is [`BookingStatus::Pending`] for every record created here.
/// - `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    id: RecordId,
    name: String,
    phone: String,
    service_type: String,
    preferred_date: String,
    location: String,
    status: BookingStatus,
    created_at: DateTime<Utc>,
}

impl Booking {
    /// Materialise a pending booking from a validated submission.
    #[must_use]
    pub fn new(id: RecordId, draft: NewBooking, created_at: DateTime<Utc>) -> Self {
        let NewBooking {
            name,
            phone,
            service_type,
            preferred_date,
            location,
        } = draft;
        Self {
            id,
            name,
            phone,
            service_type,
            preferred_date,
            location,
            status: BookingStatus::Pending,
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

    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    pub fn preferred_date(&self) -> &str {
        &self.preferred_date
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
