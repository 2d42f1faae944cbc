//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain ports and stay testable without a real store.

use std::sync::Arc;

use crate::domain::ports::{BookingRepository, InquiryRepository};
use crate::domain::site::SiteContent;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub inquiries: Arc<dyn InquiryRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub site: Arc<SiteContent>,
}

impl HttpState {
    /// Construct state from the store ports and landing page content.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use cruzo_backend::domain::EmailAddress;
    /// use cruzo_backend::domain::site::{ContactDetails, PhoneNumber, SiteContent};
    /// use cruzo_backend::inbound::http::state::HttpState;
    /// use cruzo_backend::outbound::memory::MemStore;
    ///
    /// let store = Arc::new(MemStore::new(Arc::new(mockable::DefaultClock)));
    /// let site = SiteContent::cruzo(ContactDetails {
    ///     whatsapp: PhoneNumber::new("+918438347944").expect("valid number"),
    ///     email: EmailAddress::new("hello@cruzo.care").expect("valid email"),
    ///     city: "Chennai, Tamil Nadu".to_owned(),
    /// });
    /// let state = HttpState::new(store.clone(), store, Arc::new(site));
    /// # let _ = state;
    /// ```
    pub fn new(
        inquiries: Arc<dyn InquiryRepository>,
        bookings: Arc<dyn BookingRepository>,
        site: Arc<SiteContent>,
    ) -> Self {
        Self {
            inquiries,
            bookings,
            site,
        }
    }
}
