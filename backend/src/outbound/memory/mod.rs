//! Process-local store backing every collection.
//!
//! Records live for the lifetime of the process. Each collection has its own
//! lock and identifier counter, so inquiries, bookings and users are numbered
//! independently.

mod collection;

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{BookingRepository, InquiryRepository, StoreError, UserRepository};
use crate::domain::{Booking, Inquiry, NewBooking, NewInquiry, NewUser, RecordId, User};

use collection::Collection;

/// In-memory implementation of the inquiry, booking and user ports.
pub struct MemStore {
    clock: Arc<dyn Clock>,
    inquiries: Mutex<Collection<Inquiry>>,
    bookings: Mutex<Collection<Booking>>,
    users: Mutex<Collection<User>>,
}

impl MemStore {
    /// Create an empty store stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            inquiries: Mutex::new(Collection::new("inquiries")),
            bookings: Mutex::new(Collection::new("bookings")),
            users: Mutex::new(Collection::new("users")),
        }
    }
}

impl std::fmt::Debug for MemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemStore").finish_non_exhaustive()
    }
}

fn lock<T>(collection: &Mutex<Collection<T>>) -> Result<MutexGuard<'_, Collection<T>>, StoreError>
where
    T: Clone,
{
    collection
        .lock()
        .map_err(|err| StoreError::unavailable(err.to_string()))
}

#[async_trait]
impl InquiryRepository for MemStore {
    async fn create_inquiry(&self, inquiry: NewInquiry) -> Result<Inquiry, StoreError> {
        let created_at = self.clock.utc();
        let mut inquiries = lock(&self.inquiries)?;
        let stored = inquiries.insert_with(|id| Inquiry::new(id, inquiry, created_at))?;
        info!(
            collection = inquiries.name(),
            id = %stored.id(),
            "stored inquiry"
        );
        Ok(stored)
    }

    async fn inquiries(&self) -> Result<Vec<Inquiry>, StoreError> {
        Ok(lock(&self.inquiries)?.to_vec())
    }
}

#[async_trait]
impl BookingRepository for MemStore {
    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, StoreError> {
        let created_at = self.clock.utc();
        let mut bookings = lock(&self.bookings)?;
        let stored = bookings.insert_with(|id| Booking::new(id, booking, created_at))?;
        info!(
            collection = bookings.name(),
            id = %stored.id(),
            "stored booking"
        );
        Ok(stored)
    }

    async fn bookings(&self) -> Result<Vec<Booking>, StoreError> {
        Ok(lock(&self.bookings)?.to_vec())
    }
}

#[async_trait]
impl UserRepository for MemStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = lock(&self.users)?;
        if users
            .values()
            .any(|existing| existing.username() == &user.username)
        {
            debug!(username = %user.username, "rejected duplicate username");
            return Err(StoreError::duplicate_username(user.username.as_ref()));
        }
        let stored = users.insert_with(|id| User::new(id, user))?;
        info!(collection = users.name(), id = %stored.id(), "stored user");
        Ok(stored)
    }

    async fn user(&self, id: RecordId) -> Result<Option<User>, StoreError> {
        Ok(lock(&self.users)?.get(id).cloned())
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(lock(&self.users)?
            .values()
            .find(|user| user.username().as_ref() == username)
            .cloned())
    }
}
