//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local store for inquiries, bookings and users

pub mod memory;
