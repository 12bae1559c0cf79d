use ticket_office_test_utils::{
    constant::{TEST_BCRYPT_COST, TEST_PASSWORD},
    prelude::*,
};

use crate::server::{model::account::RegistrationRequest, util::password::PasswordHasher};


fn test_hasher() -> PasswordHasher {
    PasswordHasher::new(TEST_BCRYPT_COST)
}

fn registration(username: &str, email: &str) -> RegistrationRequest {
    RegistrationRequest {
        username: username.to_string(),
        first_name: "Alice".to_string(),
        last_name: "Smirnova".to_string(),
        middle_name: "Igorevna".to_string(),
        email: email.to_string(),
        password: "secret".to_string(),
        confirm_password: "secret".to_string(),
    }
}
