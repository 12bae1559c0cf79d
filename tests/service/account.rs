//! End-to-end account scenarios over the public service API.

use ticket_office::server::{
    error::{auth::AuthError, Error},
    model::{account::RegistrationRequest, session::Principal},
    service::account::AccountService,
    util::password::PasswordHasher,
};
use ticket_office_test_utils::{constant::TEST_BCRYPT_COST, prelude::*};

/// Expect a registered cashier to log in with the right password only
#[tokio::test]
async fn registers_and_authenticates() -> Result<(), TestError> {
    let test = test_setup_with_booking_tables!()?;

    let account_service = AccountService::new(&test.db, PasswordHasher::new(TEST_BCRYPT_COST));
    account_service
        .register(&RegistrationRequest {
            username: "alice".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Smirnova".to_string(),
            middle_name: "Igorevna".to_string(),
            email: "alice@station.local".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        })
        .await
        .unwrap();

    let user = account_service.authenticate("alice", "secret").await.unwrap();
    assert_eq!(user.username, "alice");

    let principal = Principal::from(&user);
    assert!(!principal.is_admin());

    let result = account_service.authenticate("alice", "wrong").await;
    assert!(matches!(result, Err(Error::AuthError(AuthError::AuthFailure))));

    Ok(())
}
