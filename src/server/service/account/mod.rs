//! Cashier accounts.
//!
//! Password login, self-registration of cashier accounts, and creation of the bootstrap
//! administrator on first start. Passwords are only ever stored as bcrypt digests.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    config::AdminConfig,
    data::user::{NewUser, UserRepository},
    error::{
        auth::{AuthError, ConflictField},
        validation::ValidationError,
        Error,
    },
    model::{account::RegistrationRequest, db::UserModel},
    util::password::PasswordHasher,
};

static ADMIN_FIRST_NAME: &str = "Administrator";
static ADMIN_LAST_NAME: &str = "Administrator";

/// Service for authenticating and registering users.
pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
    hasher: PasswordHasher,
}

impl<'a> AccountService<'a> {
    /// Creates a new instance of [`AccountService`]
    pub fn new(db: &'a DatabaseConnection, hasher: PasswordHasher) -> Self {
        Self { db, hasher }
    }

    /// Checks a username & password pair.
    ///
    /// Unknown usernames and wrong passwords fail identically so a caller cannot probe which
    /// accounts exist.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - Credentials match
    /// - `Err(Error::ValidationError)` - Username or password left empty
    /// - `Err(Error::AuthError(AuthFailure))` - No such user or wrong password
    /// - `Err(Error::DbErr)` - Database query failed
    /// - `Err(Error::HashError)` - Stored digest is malformed
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<UserModel, Error> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::field("username").into());
        }
        if password.is_empty() {
            return Err(ValidationError::field("password").into());
        }

        let Some(user) = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
        else {
            tracing::debug!(username, "Login failed, unknown username");
            return Err(AuthError::AuthFailure.into());
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            tracing::debug!(username, "Login failed, wrong password");
            return Err(AuthError::AuthFailure.into());
        }

        tracing::info!(user_id = user.id, username, "User logged in");

        Ok(user)
    }

    /// Registers a new non-admin cashier account.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - Account created
    /// - `Err(Error::ValidationError)` - Blank field or password confirmation mismatch
    /// - `Err(Error::AuthError(Conflict))` - Username or email already taken
    /// - `Err(Error::DbErr)` - Database operation failed
    /// - `Err(Error::HashError)` - Hashing the password failed
    pub async fn register(&self, request: &RegistrationRequest) -> Result<UserModel, Error> {
        request.validate()?;

        let username = request.username.trim();
        let email = request.email.trim();

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_username(username).await?.is_some() {
            return Err(AuthError::Conflict(ConflictField::Username).into());
        }
        if user_repo.find_by_email(email).await?.is_some() {
            return Err(AuthError::Conflict(ConflictField::Email).into());
        }

        let password_hash = self.hasher.hash(&request.password)?;

        let user = user_repo
            .create(NewUser {
                username,
                first_name: request.first_name.trim(),
                last_name: request.last_name.trim(),
                middle_name: Some(request.middle_name.trim()),
                email,
                password_hash,
                is_admin: false,
            })
            .await
            .map_err(account_conflict_or_db_err)?;

        tracing::info!(user_id = user.id, username, "Registered new account");

        Ok(user)
    }

    /// Creates the administrator account if no users exist yet.
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))` - Administrator created
    /// - `Ok(None)` - Users already exist, nothing was created
    /// - `Err(Error::DbErr)` - Database operation failed
    /// - `Err(Error::HashError)` - Hashing the password failed
    pub async fn ensure_default_admin(
        &self,
        admin: &AdminConfig,
    ) -> Result<Option<UserModel>, Error> {
        let user_repo = UserRepository::new(self.db);
        if !user_repo.is_empty().await? {
            return Ok(None);
        }

        let password_hash = self.hasher.hash(&admin.password)?;

        let user = user_repo
            .create(NewUser {
                username: &admin.username,
                first_name: ADMIN_FIRST_NAME,
                last_name: ADMIN_LAST_NAME,
                middle_name: None,
                email: &admin.email,
                password_hash,
                is_admin: true,
            })
            .await?;

        tracing::info!(
            user_id = user.id,
            username = %user.username,
            "Created default administrator account"
        );

        Ok(Some(user))
    }
}

/// Maps a unique index violation on account creation to the conflicting field.
///
/// Only reached when another registration commits between the lookups and the insert.
fn account_conflict_or_db_err(err: DbErr) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => {
            let field = if message.contains("email") {
                ConflictField::Email
            } else {
                ConflictField::Username
            };

            AuthError::Conflict(field).into()
        }
        _ => err.into(),
    }
}
