//! Back-office user records.
//!
//! The store keeps a user collection for back-office use. Nothing in the
//! public submission flow reads or writes it.

use std::fmt;

use crate::domain::{Field, RecordId, ValidationError};

/// Unique login name, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate and construct a username.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BlankField {
                field: Field::Username,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Validated user registration, not yet stored.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: Username,
    pub password: String,
}

impl NewUser {
    /// Build a registration from raw parts.
    ///
    /// # Examples
    /// ```
    /// use cruzo_backend::domain::NewUser;
    ///
    /// let user = NewUser::try_from_parts(" ops ", "s3cret").expect("valid user");
    /// assert_eq!(user.username.as_ref(), "ops");
    /// assert!(NewUser::try_from_parts("ops", "").is_err());
    /// ```
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, ValidationError> {
        let username = Username::new(username)?;
        if password.is_empty() {
            return Err(ValidationError::BlankField {
                field: Field::Password,
            });
        }
        Ok(Self {
            username,
            password: password.to_owned(),
        })
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Stored user.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    id: RecordId,
    username: Username,
    password: String,
}

impl User {
    /// Materialise a stored user from a registration.
    #[must_use]
    pub fn new(id: RecordId, draft: NewUser) -> Self {
        Self {
            id,
            username: draft.username,
            password: draft.password,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
