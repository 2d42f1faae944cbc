//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::EmailAddress;
use crate::domain::ports::{BookingRepository, InquiryRepository};
use crate::domain::site::{ContactDetails, PhoneNumber, SiteContent};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::MemStore;

/// Timestamp every record created through [`memory_state`] carries.
pub fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

struct FixtureClock;

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        fixture_timestamp().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        fixture_timestamp()
    }
}

/// Landing page content with the default contact details.
pub fn test_site() -> Arc<SiteContent> {
    Arc::new(SiteContent::cruzo(ContactDetails {
        whatsapp: PhoneNumber::new("+918438347944").expect("valid number"),
        email: EmailAddress::new("hello@cruzo.care").expect("valid email"),
        city: "Chennai, Tamil Nadu".to_owned(),
    }))
}

/// State backed by a fresh in-memory store on a fixed clock.
pub fn memory_state() -> HttpState {
    let store = Arc::new(MemStore::new(Arc::new(FixtureClock)));
    HttpState::new(store.clone(), store, test_site())
}

/// State backed by the supplied ports, typically mocks.
pub fn state_with(
    inquiries: impl InquiryRepository + 'static,
    bookings: impl BookingRepository + 'static,
) -> HttpState {
    HttpState::new(Arc::new(inquiries), Arc::new(bookings), test_site())
}
