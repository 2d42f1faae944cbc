//! Shared application builder for in-process HTTP tests.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use cruzo_backend::Trace;
use cruzo_backend::domain::EmailAddress;
use cruzo_backend::domain::site::{ContactDetails, PhoneNumber, SiteContent};
use cruzo_backend::inbound::http::configure;
use cruzo_backend::inbound::http::state::HttpState;
use cruzo_backend::outbound::memory::MemStore;
use mockable::DefaultClock;

pub const WHATSAPP_NUMBER: &str = "+918438347944";

/// Fresh state over an empty in-memory store and the system clock.
pub fn memory_state() -> HttpState {
    let store = Arc::new(MemStore::new(Arc::new(DefaultClock)));
    let site = SiteContent::cruzo(ContactDetails {
        whatsapp: PhoneNumber::new(WHATSAPP_NUMBER).expect("valid number"),
        email: EmailAddress::new("hello@cruzo.care").expect("valid email"),
        city: "Chennai, Tamil Nadu".to_owned(),
    });
    HttpState::new(store.clone(), store, Arc::new(site))
}

/// The production route table wrapped in the trace middleware.
pub fn cruzo_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
}
