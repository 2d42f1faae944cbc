//! Domain ports for the hexagonal boundary.
//!
//! Inbound adapters depend on these traits only; the in-memory store in
//! `outbound::memory` implements all of them.

mod macros;
pub(crate) use macros::define_port_error;

mod booking_repository;
mod inquiry_repository;
mod store_error;
mod user_repository;

#[cfg(test)]
pub use booking_repository::MockBookingRepository;
pub use booking_repository::BookingRepository;
#[cfg(test)]
pub use inquiry_repository::MockInquiryRepository;
pub use inquiry_repository::InquiryRepository;
pub use store_error::StoreError;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
