use std::fmt;

use thiserror::Error;

/// Account field that must be unique across users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictField {
    Username,
    Email,
}

impl fmt::Display for ConflictField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username => write!(f, "username"),
            Self::Email => write!(f, "email"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    AuthFailure,
    #[error("Operation requires an administrator account")]
    Unauthorized,
    #[error("An account with this {0} already exists")]
    Conflict(ConflictField),
}
