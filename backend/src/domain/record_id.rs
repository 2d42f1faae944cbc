//! Integer record identifiers assigned by the store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned identifier, unique within one collection.
///
/// Identifiers start at 1 and increase by one per insert. Collections keep
/// independent counters, so an inquiry and a booking may share a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// First identifier handed out by an empty collection.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw identifier, rejecting zero.
    #[must_use]
    pub fn new(raw: u64) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    /// Identifier following this one, or `None` once the counter is exhausted.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Raw integer value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
