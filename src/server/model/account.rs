use crate::server::{error::validation::ValidationError, model::ticket::required};

/// Input for registering a new cashier account.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationRequest {
    /// Checks every field is filled in and the password confirmation matches.
    ///
    /// Passwords are compared untrimmed, whitespace is significant in a password.
    pub fn validate(&self) -> Result<(), ValidationError> {
        required(&self.username, "username")?;
        required(&self.first_name, "first_name")?;
        required(&self.last_name, "last_name")?;
        required(&self.middle_name, "middle_name")?;
        required(&self.email, "email")?;

        if self.password.is_empty() {
            return Err(ValidationError::field("password"));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::field("confirm_password"));
        }

        Ok(())
    }
}
