//! Errors raised by store adapters and their mapping onto [`Error`].

use tracing::error;

use crate::domain::Error;

use super::define_port_error;

define_port_error! {
    /// Failures inside a store adapter.
    pub enum StoreError {
        /// The store cannot be accessed, for example after a writer panicked.
        Unavailable { message: String } => "store unavailable: {message}",
        /// The identifier counter for a collection ran out.
        IdsExhausted { collection: String } => "{collection} identifiers exhausted",
        /// A user with the same username already exists.
        DuplicateUsername { username: String } => "username already taken: {username}",
    }
}

impl From<StoreError> for Error {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::DuplicateUsername { username } => {
                Self::conflict(format!("username already taken: {username}"))
            }
            other => {
                // Log the cause; clients only ever see a generic message.
                error!(error = %other, "store operation failed");
                Self::internal(other.to_string())
            }
        }
    }
}
