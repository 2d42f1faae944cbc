//! Port for storing and listing booking requests.

use async_trait::async_trait;

use crate::domain::{Booking, NewBooking};

use super::StoreError;

/// Booking collection of the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Assign the next id and creation time, then store the booking as pending.
    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, StoreError>;

    /// Every stored booking in insertion order.
    async fn bookings(&self) -> Result<Vec<Booking>, StoreError>;
}
