//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape and are registered under the
//! domain names.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request conflicts with an existing record.
    #[schema(rename = "conflict")]
    Conflict,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::BookingStatus`].
#[derive(ToSchema)]
#[schema(as = BookingStatus)]
pub enum BookingStatusSchema {
    #[schema(rename = "pending")]
    Pending,
}

/// OpenAPI schema for [`crate::domain::Inquiry`].
#[derive(ToSchema)]
#[schema(as = Inquiry)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct InquirySchema {
    /// Per-collection identifier starting at 1.
    #[schema(example = 1)]
    id: u64,
    #[schema(example = "Rajesh Kumar")]
    name: String,
    #[schema(example = "+91 98400 00000")]
    phone: String,
    #[schema(example = "rajesh@example.com")]
    email: Option<String>,
    #[schema(example = "premium")]
    service_type: String,
    #[schema(example = "Sholinganallur")]
    location: String,
    message: Option<String>,
    #[schema(example = "2026-11-02")]
    preferred_date: Option<String>,
    /// Set by the server when the inquiry is stored.
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::Booking`].
#[derive(ToSchema)]
#[schema(as = Booking)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BookingSchema {
    /// Per-collection identifier starting at 1.
    #[schema(example = 1)]
    id: u64,
    #[schema(example = "Priya Sharma")]
    name: String,
    #[schema(example = "+91 90000 11111")]
    phone: String,
    #[schema(example = "sedan")]
    service_type: String,
    #[schema(example = "2026-11-02")]
    preferred_date: String,
    #[schema(example = "Medavakkam")]
    location: String,
    status: BookingStatusSchema,
    /// Set by the server when the booking is stored.
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}

/// Request body accepted by `POST /api/inquiries`.
#[derive(ToSchema)]
#[schema(as = InquiryRequest)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct InquiryRequestSchema {
    name: String,
    phone: String,
    /// Omitted, `null` and blank values are stored as `null`.
    email: Option<String>,
    service_type: String,
    location: String,
    message: Option<String>,
    preferred_date: Option<String>,
}

/// Request body accepted by `POST /api/bookings`.
#[derive(ToSchema)]
#[schema(as = BookingRequest)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BookingRequestSchema {
    name: String,
    phone: String,
    service_type: String,
    preferred_date: String,
    location: String,
}
