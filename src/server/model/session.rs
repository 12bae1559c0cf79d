use crate::server::{error::auth::AuthError, model::db::UserModel};

/// Authenticated user on whose behalf operations run.
///
/// Produced by a successful login and used both to stamp the cashier on new tickets and to
/// gate administrator-only operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i32,
    pub username: String,
    is_admin: bool,
}

impl Principal {
    /// Whether this principal may edit and delete tickets
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Returns [`AuthError::Unauthorized`] unless this principal is an administrator
    pub fn require_admin(&self) -> Result<(), AuthError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(AuthError::Unauthorized)
        }
    }
}

impl From<&UserModel> for Principal {
    fn from(user: &UserModel) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            is_admin: user.is_admin,
        }
    }
}
