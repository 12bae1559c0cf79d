use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_BCRYPT_COST, TEST_PASSWORD},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user whose password is [`TEST_PASSWORD`]
    pub async fn insert_user(
        &self,
        username: &str,
        is_admin: bool,
    ) -> Result<entity::user::Model, TestError> {
        let password_hash = bcrypt::hash(TEST_PASSWORD, TEST_BCRYPT_COST)?;

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            first_name: ActiveValue::Set("Test".to_string()),
            last_name: ActiveValue::Set("User".to_string()),
            middle_name: ActiveValue::Set(None),
            email: ActiveValue::Set(format!("{username}@station.local")),
            password_hash: ActiveValue::Set(password_hash),
            is_admin: ActiveValue::Set(is_admin),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
