//! Port for storing and listing contact-form inquiries.

use async_trait::async_trait;

use crate::domain::{Inquiry, NewInquiry};

use super::StoreError;

/// Inquiry collection of the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InquiryRepository: Send + Sync {
    /// Assign the next id and creation time, then store the inquiry.
    async fn create_inquiry(&self, inquiry: NewInquiry) -> Result<Inquiry, StoreError>;

    /// Every stored inquiry in insertion order.
    async fn inquiries(&self) -> Result<Vec<Inquiry>, StoreError>;
}
