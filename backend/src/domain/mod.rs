//! Domain primitives, entities and ports.
//!
//! Purpose: define the submission records accepted from the landing page,
//! their validation rules, and the store ports adapters implement. Types stay
//! free of HTTP concerns; serde contracts are documented on each type.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure with a stable code.
//! - Inquiry / NewInquiry: contact-form submissions.
//! - Booking / NewBooking / BookingStatus: booking requests.
//! - User / NewUser / Username: back-office accounts.
//! - FormFields / Field / ValidationError: shape checks on raw JSON.
//! - site: hand-authored landing page content.

pub mod booking;
pub mod email;
pub mod error;
pub mod inquiry;
pub mod ports;
pub mod record_id;
pub mod site;
pub mod trace_id;
pub mod user;
pub mod validation;

pub use self::booking::{Booking, BookingStatus, NewBooking};
pub use self::email::{EmailAddress, InvalidEmailAddress};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::inquiry::{Inquiry, NewInquiry};
pub use self::record_id::RecordId;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User, Username};
pub use self::validation::{Field, FormFields, ValidationError};
