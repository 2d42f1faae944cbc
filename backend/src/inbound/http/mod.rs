//! HTTP inbound adapter exposing the JSON API, health probes and the landing
//! page.

pub mod bookings;
pub mod error;
pub mod health;
pub mod inquiries;
pub mod pages;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::web;

pub use error::{ApiResult, ErrorEnvelope};

/// Register the JSON API under `/api` and the landing page at `/`.
///
/// Expects [`state::HttpState`] to be registered as app data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use cruzo_backend::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(validation::json_config())
            .service(inquiries::create_inquiry)
            .service(inquiries::list_inquiries)
            .service(bookings::create_booking)
            .service(bookings::list_bookings),
    )
    .service(pages::home);
}
