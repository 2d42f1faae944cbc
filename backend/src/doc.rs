//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every JSON endpoint and the health probes, plus the
//! schema wrappers from [`crate::inbound::http::schemas`] so domain types stay
//! free of utoipa derives. The document backs Swagger UI in debug builds and
//! the `openapi-dump` binary.

use crate::inbound::http::bookings::{BookingCreated, BookingList};
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::inquiries::{InquiryCreated, InquiryList};
use crate::inbound::http::schemas::{
    BookingRequestSchema, BookingSchema, BookingStatusSchema, ErrorCodeSchema,
    InquiryRequestSchema, InquirySchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cruzo backend API",
        description = "Contact-form inquiries, booking requests and health probes for the Cruzo doorstep car wash."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::inquiries::create_inquiry,
        crate::inbound::http::inquiries::list_inquiries,
        crate::inbound::http::bookings::create_booking,
        crate::inbound::http::bookings::list_bookings,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        InquirySchema,
        InquiryRequestSchema,
        InquiryCreated,
        InquiryList,
        BookingSchema,
        BookingStatusSchema,
        BookingRequestSchema,
        BookingCreated,
        BookingList,
        ErrorEnvelope,
        ErrorCodeSchema
    )),
    tags(
        (name = "inquiries", description = "Contact-form submissions"),
        (name = "bookings", description = "Service booking requests"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
