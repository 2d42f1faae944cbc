//! Booking request handlers.
//!
//! ```text
//! POST /api/bookings {"name":"Priya Sharma","phone":"+91 90000 11111","serviceType":"sedan","preferredDate":"2026-11-02","location":"Medavakkam"}
//! GET /api/bookings
//! ```

use actix_web::{get, post, web};
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Booking, Error, NewBooking};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::{BookingRequestSchema, BookingSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::validation_error;

const INVALID_BOOKING: &str = "Invalid booking data";

/// Body of a successful `POST /api/bookings`.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingCreated {
    #[schema(example = true)]
    pub success: bool,
    #[schema(value_type = BookingSchema)]
    pub booking: Booking,
}

/// Body of a successful `GET /api/bookings`.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingList {
    #[schema(example = true)]
    pub success: bool,
    #[schema(value_type = Vec<BookingSchema>)]
    pub bookings: Vec<Booking>,
}

/// Record a booking request. The stored booking is always `pending`; any
/// client-supplied status is ignored.
#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = BookingRequestSchema,
    responses(
        (status = 200, description = "Booking stored", body = BookingCreated),
        (status = 400, description = "Invalid booking data", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["bookings"],
    operation_id = "createBooking"
)]
#[post("/bookings")]
pub async fn create_booking(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<BookingCreated>> {
    let draft =
        NewBooking::from_json(&payload).map_err(|err| validation_error(&err, INVALID_BOOKING))?;
    let booking = state
        .bookings
        .create_booking(draft)
        .await
        .map_err(|err| Error::from(err).with_context("Failed to save booking"))?;
    info!(
        booking_id = %booking.id(),
        service_type = booking.service_type(),
        preferred_date = booking.preferred_date(),
        "booking received"
    );
    Ok(web::Json(BookingCreated {
        success: true,
        booking,
    }))
}

/// List every booking in the order received.
#[utoipa::path(
    get,
    path = "/api/bookings",
    responses(
        (status = 200, description = "Stored bookings", body = BookingList),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["bookings"],
    operation_id = "listBookings"
)]
#[get("/bookings")]
pub async fn list_bookings(state: web::Data<HttpState>) -> ApiResult<web::Json<BookingList>> {
    let bookings = state
        .bookings
        .bookings()
        .await
        .map_err(|err| Error::from(err).with_context("Failed to fetch bookings"))?;
    Ok(web::Json(BookingList {
        success: true,
        bookings,
    }))
}
